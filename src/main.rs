mod args;
mod format;
mod scan;

use anyhow::{ensure, Result};
use clap::Parser;
use std::io::{BufWriter, Write};
use tracing::debug;

use crate::scan::{source::Source, ScanConfig};

fn main() -> Result<()> {
    init_tracing();

    let args = args::Args::parse();
    let config = ScanConfig::from(args.pattern.clone())
        .case_insensitive(args.ignore_case)
        .case_smart(args.smart_case)
        .format(args.format());
    let sources = Source::from_paths(&args.files);

    debug!(pattern = %config.pattern, format = %config.format, sources = sources.len(), "starting scan");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = scan::scan(&config, &sources, &mut out)?;
    out.flush().ok();

    debug!(
        sources_scanned = stats.sources_scanned,
        lines_matched = stats.lines_matched,
        "scan finished"
    );

    ensure!(
        stats.sources_failed == 0,
        "failed to scan {} of {} sources",
        stats.sources_failed,
        sources.len()
    );

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // RUST_LOG overrides the default level, e.g. RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
