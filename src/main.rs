use std::io::{self, BufWriter, Write};
use std::process;

use bst_rebalance::cli::Cli;
use bst_rebalance::demo;
use bst_rebalance::error::DemoResult;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> DemoResult<()> {
    let config = cli.config()?;
    let mut out = BufWriter::new(io::stdout().lock());
    demo::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // `RUST_LOG` wins over `-d` when set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}
