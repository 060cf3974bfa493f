//! # Kiosk Infrastructure
//!
//! Concrete implementations of the ports defined in `kiosk-core`:
//! JSON-file post persistence and the on-disk music catalog.

pub mod music;
pub mod store;

pub use music::FsMusicLibrary;
pub use store::JsonFilePostStore;
