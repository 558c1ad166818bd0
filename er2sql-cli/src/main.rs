use clap::Parser;
use er2sql_tools::{run_pipeline, MySqlRenderer, PipelineOutcome, Result};
use tracing::{info, instrument};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy())
        .init();

    let cli = cli::Cli::parse();

    run(cli)?;

    Ok(())
}

#[instrument(skip_all)]
fn run(cli: cli::Cli) -> Result<()> {
    let config = cli.into_pipeline_config();

    match run_pipeline(&config, None, &MySqlRenderer)? {
        PipelineOutcome::NoModel => {
            info!("No model given, set --model or IN to generate a script");
        }
        PipelineOutcome::Written { path, included, skipped } => {
            info!(path = %path.display(), included = included.len(), skipped = skipped.len(), "Generated script");
        }
    }

    Ok(())
}
