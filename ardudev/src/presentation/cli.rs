use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "ardudev: board toolchain driver and header generators", long_about = None)]
pub struct Cli {
    /// Project config (JSON); ./ardu.json is used when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile the sketch
    Build,

    /// Compile, upload to the one connected board, then monitor it
    Upload,

    /// Open a serial monitor on the one connected board
    Monitor,

    /// Convert the favicon into a PROGMEM byte array header
    Favicon {
        /// source file (defaults to the config's favicon.input)
        #[arg(long)]
        input: Option<PathBuf>,
        /// header to write (defaults to the config's favicon.output)
        #[arg(long)]
        output: Option<PathBuf>,
        /// bytes per array row
        #[arg(long)]
        chunk_width: Option<NonZeroUsize>,
    },

    /// Convert the built web page into a header of print statements
    Html {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        /// bytes per print statement
        #[arg(long)]
        chunk_width: Option<NonZeroUsize>,
    },
}
