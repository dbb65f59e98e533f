use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use notebake_cli::cli::{Cli, Commands};
use notebake_cli::{commands, config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "notebake={level},notebake_core={level},notebake_parser={level},notebake_cli={level}"
        )))
        .with_writer(std::io::stderr)
        .init();

    let settings = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Bake {
            note,
            subpath,
            output,
        } => {
            let baked = commands::bake(&cli.vault, &settings, &note, subpath).await?;
            match output {
                Some(path) => std::fs::write(&path, baked)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{baked}"),
            }
        }
        Commands::Scan { note, json } => {
            let report = commands::scan(&cli.vault, &note, json)?;
            print!("{report}");
        }
    }

    Ok(())
}
