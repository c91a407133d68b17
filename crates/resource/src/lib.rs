//! Font sources for the nes-scratch tools.
//!
//! This crate provides platform-specific implementations of the
//! `FontSource` trait from nes-scratch-traits.
//!
//! ## Available Sources
//!
//! - [`FilesystemFontSource`]: Loads fonts from the local filesystem
//!
//! The in-memory source is re-exported for convenience:
//! - [`InMemoryFontSource`]: Pre-populated in-memory storage

mod filesystem;

pub use filesystem::FilesystemFontSource;

pub use nes_scratch_traits::InMemoryFontSource;
