use std::process::ExitCode;

use clap::Parser;
use plantilla_gateway::GatewayClient;
use plantilla_view::PlantillaView;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(commands::Outcome::Shown) => ExitCode::SUCCESS,
        Ok(commands::Outcome::Reported) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("plantilla error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<commands::Outcome> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let config = bootstrap::load_config(&flags)?;
    let format = bootstrap::output_format(&flags, &config)?;
    tracing::debug!(gateway = config.gateway.base(), ?format, "configuration loaded");

    let gateway = GatewayClient::new(&config.gateway)?;
    let mut view = PlantillaView::new(
        gateway,
        output::StdoutArticle::new(format),
        output::StderrAlert,
    );

    commands::dispatch(&cli.command, &mut view).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PLANTILLA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
