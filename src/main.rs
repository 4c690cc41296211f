mod cli;

use clap::Parser;
use color_eyre::Report;
use text_rope::{Config, Rope};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{execute, load_source, Args};

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::new().leaf_max(args.leaf_max).auto_rebalance(!args.no_rebalance);

    let rope = Rope::build_with(&load_source(&args)?, config);
    debug!(len = rope.len(), height = rope.height(), "built rope");

    println!("{}", execute(&rope, &args.command)?);
    Ok(())
}
