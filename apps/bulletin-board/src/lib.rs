//! # Bulletin Board
//!
//! A portal widget: post CRUD over a JSON-file store, with authorship taken
//! from the portal-supplied forwarded-user header.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
