//! duration-table - Sort the APU length-counter table by index
//!
//! Prints one `(index, 'row')` tuple per table row in ascending index order.
//! `--format lookup` prints the 32-entry tick array instead.

use clap::{ArgAction, Parser};
use nes_scratch::duration::{self, OutputFormat, TableConfig, TableInput};
use nes_scratch::{ScratchError, init_logging};
use std::io::{self, Write};
use std::path::PathBuf;

/// Sort the hand-written APU length-counter table by its binary index.
#[derive(Parser, Debug)]
#[command(name = "duration-table")]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the table from this file instead of the built-in one
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format: tuple, lookup or json
    #[arg(short, long, default_value_t = OutputFormat::Tuple)]
    format: OutputFormat,

    /// Use debug logging level
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,
}

impl From<&Args> for TableConfig {
    fn from(args: &Args) -> Self {
        Self {
            input: args
                .input
                .clone()
                .map_or(TableInput::Embedded, TableInput::File),
            format: args.format,
        }
    }
}

fn main() -> Result<(), ScratchError> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = TableConfig::from(&args);
    let output = duration::run(&config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
