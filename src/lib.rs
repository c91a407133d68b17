//! Scratch tools kept next to the NES emulator.
//!
//! - `duration-table` sorts the hand-written APU length-counter table by index.
//! - `glyph-width` prints the advance width of one character of a font.
//!
//! The two tools share nothing beyond the error type and logging setup here.

pub mod error;

pub use error::ScratchError;

pub use nes_scratch_duration as duration;
pub use nes_scratch_glyph as glyph;
pub use nes_scratch_resource as resource;
pub use nes_scratch_traits as traits;

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` is honoured and defaults to `warn`; `debug` forces the
/// `debug` level regardless.
pub fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
