//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quotecard", version, about = "A random inspirational quote in your terminal")]
pub struct Args {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print one quote and exit instead of starting the interactive widget
    #[arg(long)]
    pub print: bool,

    /// With --print: copy the quote to the clipboard
    #[arg(long, requires = "print")]
    pub copy: bool,

    /// With --print: open a share link for the quote
    #[arg(long, requires = "print")]
    pub share: bool,
}
