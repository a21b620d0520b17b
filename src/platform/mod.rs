//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Asset names and loading (images, music)
//! - Keyboard input mapping

pub mod assets;
pub mod input;

pub use assets::{song_path, sprite_path};
pub use input::{KeyCommand, map_key};
