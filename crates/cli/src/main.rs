use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use stalactite_cli::{decorate, map};

fn main() -> ExitCode {
    let map_path: PathBuf = std::env::args()
        .skip_while(|a| a != "--map")
        .nth(1)
        .unwrap_or_else(|| "map.json".into())
        .into();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .init();

    // Any failure -- missing input, malformed map, a fault mid-generation --
    // is reported here and the run aborts. The save step only runs after
    // generation completes, so no partial file is ever written.
    if let Err(e) = run(&map_path) {
        tracing::error!("Decoration failed: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(map_path: &std::path::Path) -> Result<()> {
    tracing::info!("Loading {}...", map_path.display());
    let mut map_file = map::load(map_path)?;

    let added = decorate::decorate(&mut map_file)?;

    tracing::info!("Saving updated map with {} new blocks...", added);
    map::save(&map_file, map_path)?;

    tracing::info!("Done! Map has been updated.");
    Ok(())
}
