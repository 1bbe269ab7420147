use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `plantilla` binary.
#[derive(Debug, Parser)]
#[command(
    name = "plantilla",
    version,
    about = "Plantilla - players from the microservice gateway"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: raw, json (defaults to general.output)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Gateway base URL (overrides gateway.base_url)
    #[arg(short, long, global = true)]
    pub gateway: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            gateway: self.gateway.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
