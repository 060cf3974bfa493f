//! # Kiosk Shared
//!
//! Wire types shared between the widget frontends and the API handlers.

pub mod dto;
pub mod response;

pub use response::{ErrorBody, MessageBody, UserBody};
