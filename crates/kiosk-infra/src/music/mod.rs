//! Audio file catalog.

mod fs_library;

pub use fs_library::{AUDIO_EXTENSIONS, FsMusicLibrary};
