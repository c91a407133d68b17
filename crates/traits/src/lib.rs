pub mod source;

pub use source::{FontSource, FontSourceError, InMemoryFontSource, SharedFontData};
