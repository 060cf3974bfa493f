//! Post collection persistence.

mod json_file;

pub use json_file::JsonFilePostStore;
