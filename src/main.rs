use anyhow::Context;
use clap::Parser;

use quotecard::args::Args;
use quotecard::config::Config;
use quotecard::{logging, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if args.print {
        logging::init_stderr_logging();
        return ui::plain::print_once(&config, args.copy, args.share).await;
    }

    logging::init_file_logging();
    ui::runtime::run(&config).await
}
