//! glyph-width - Print the advance width of one character of a font
//!
//! The width is in font design units. Characters the font does not map are
//! measured as the `.notdef` glyph.

use clap::{ArgAction, Parser};
use nes_scratch::glyph::{self, DEFAULT_CHARACTER, DEFAULT_FONT_PATH, GlyphLookupConfig};
use nes_scratch::resource::FilesystemFontSource;
use nes_scratch::{ScratchError, init_logging};

/// Print a character's glyph advance width in font design units.
#[derive(Parser, Debug)]
#[command(name = "glyph-width")]
#[command(version, about, long_about = None)]
struct Args {
    /// Font file, relative to the current directory
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    font: String,

    /// Character to measure
    #[arg(short, long = "char", default_value_t = DEFAULT_CHARACTER)]
    character: char,

    /// Also print the glyph that answered and whether .notdef was used
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Use debug logging level
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> Result<(), ScratchError> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = GlyphLookupConfig {
        font_path: args.font,
        character: args.character,
    };
    let source = FilesystemFontSource::current_dir()?;
    let hit = glyph::run(&config, &source)?;

    println!("{}", hit.width);
    if args.verbose {
        println!("{hit}");
    }
    Ok(())
}
