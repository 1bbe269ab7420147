use clap::ValueEnum;

/// How the article is written to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Title line, blank line, HTML body.
    Raw,
    /// `{"title": ..., "body": ...}`
    Json,
}

impl OutputFormat {
    /// Parse the `general.output` config value.
    pub fn from_config(value: &str) -> anyhow::Result<Self> {
        <Self as ValueEnum>::from_str(value, true)
            .map_err(|_| anyhow::anyhow!("invalid general.output '{value}': expected raw or json"))
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub gateway: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}
