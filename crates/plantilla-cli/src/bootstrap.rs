use anyhow::Context;
use plantilla_config::PlantillaConfig;

use crate::cli::{GlobalFlags, OutputFormat};

/// Load layered config and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PlantillaConfig> {
    let mut config = PlantillaConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut PlantillaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(gateway) = &flags.gateway {
        config.gateway.base_url.clone_from(gateway);
        config.gateway.validate()?;
    }
    Ok(())
}

/// `--format` wins over `general.output`.
pub fn output_format(flags: &GlobalFlags, config: &PlantillaConfig) -> anyhow::Result<OutputFormat> {
    match flags.format {
        Some(format) => Ok(format),
        None => OutputFormat::from_config(&config.general.output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: None,
            gateway: None,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn gateway_flag_overrides_config() {
        let mut config = PlantillaConfig::default();
        let flags = GlobalFlags {
            gateway: Some("https://gw.example:443".into()),
            ..flags()
        };
        apply_overrides(&mut config, &flags).unwrap();
        assert_eq!(config.gateway.base_url, "https://gw.example:443");
    }

    #[test]
    fn invalid_gateway_flag_is_rejected() {
        let mut config = PlantillaConfig::default();
        let flags = GlobalFlags {
            gateway: Some("gw.example".into()),
            ..flags()
        };
        assert!(apply_overrides(&mut config, &flags).is_err());
    }

    #[test]
    fn format_flag_wins_over_config() {
        let mut config = PlantillaConfig::default();
        config.general.output = "raw".into();
        let flags = GlobalFlags {
            format: Some(OutputFormat::Json),
            ..flags()
        };
        assert_eq!(output_format(&flags, &config).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn format_falls_back_to_config() {
        let mut config = PlantillaConfig::default();
        config.general.output = "JSON".into();
        assert_eq!(output_format(&flags(), &config).unwrap(), OutputFormat::Json);

        config.general.output = "xml".into();
        assert!(output_format(&flags(), &config).is_err());
    }
}
