use anyhow::{Context, Result};

use affordance_resolver::{
    cli::args_from_env, config::Config, logging::init_tracing, request::ResolveRequest,
};

fn main() -> Result<()> {
    let args = args_from_env()?;
    let config = Config::load_or_default(&args.config_path)
        .with_context(|| format!("failed to load config from {}", args.config_path.display()))?;
    let logging_guard = init_tracing(&config.logging)?;

    let request = ResolveRequest::load(&args.request_path)?;
    let output = request.resolve(&config)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("failed to serialize output")?
    );

    tracing::info!(target: "main", run_id = logging_guard.run_id(), "run_finished");
    Ok(())
}
