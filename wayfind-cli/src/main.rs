use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod bench;
mod registry;
mod shell;

#[derive(Parser, Debug)]
#[command(
    name = "wayfind",
    version,
    about = "Compare Dijkstra and A* over edge-list road networks"
)]
struct Args {
    /// JSON file with an array of dataset specs, replacing the built-in
    /// registry
    #[arg(long = "datasets", value_name = "PATH")]
    datasets: Option<PathBuf>,

    /// Emit logs as JSON lines instead of human-readable output
    #[arg(long = "log-json")]
    log_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let registry = match &args.datasets {
        Some(path) => registry::Registry::from_json_file(path)?,
        None => registry::Registry::builtin(),
    };
    tracing::info!(
        core_version = %wayfind_core::version(),
        datasets = registry.len(),
        "starting wayfind"
    );

    shell::Shell::new(registry)?.run()
}
