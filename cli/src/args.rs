//! Command-line arguments.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use flames_engine::{FlamesConfig, UiOptions, calculation_delay_from_ms};

#[derive(Debug, Parser)]
#[command(name = "flames")]
#[command(version, about = "Find out what FLAMES says about two names")]
pub struct Cli {
    /// First name; prints the result and exits when given with NAME2
    #[arg(value_name = "NAME1", requires = "second")]
    pub first: Option<String>,

    /// Second name
    #[arg(value_name = "NAME2")]
    pub second: Option<String>,

    /// Print the reading as JSON (one-shot mode only)
    #[arg(long, requires = "first")]
    pub json: bool,

    /// Use ASCII-only glyphs
    #[arg(long)]
    pub ascii: bool,

    /// Use the high-contrast palette
    #[arg(long)]
    pub high_contrast: bool,

    /// Disable screen effects and spinner motion
    #[arg(long)]
    pub reduced_motion: bool,

    /// Cosmetic delay before the result shows, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Read config from this file instead of ~/.flames/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Both names, when running one-shot.
    pub fn names(&self) -> Option<(&str, &str)> {
        match (&self.first, &self.second) {
            (Some(first), Some(second)) => Some((first, second)),
            _ => None,
        }
    }

    /// Layer flags over config and environment. Flags only switch options on.
    pub fn ui_options(&self, config: &FlamesConfig) -> UiOptions {
        let base = config.ui_options();
        UiOptions {
            ascii_only: base.ascii_only || self.ascii,
            high_contrast: base.high_contrast || self.high_contrast,
            reduced_motion: base.reduced_motion || self.reduced_motion,
        }
    }

    pub fn calculation_delay(&self, config: &FlamesConfig) -> Duration {
        self.delay_ms
            .map_or_else(|| config.calculation_delay(), calculation_delay_from_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use clap::error::ErrorKind;
    use flames_engine::{DEFAULT_CALCULATION_DELAY, FlamesConfig};

    use super::Cli;

    #[test]
    fn no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["flames"]).unwrap();
        assert!(cli.names().is_none());
        assert!(!cli.json);
    }

    #[test]
    fn two_names_are_one_shot() {
        let cli = Cli::try_parse_from(["flames", "Mary Jane", "Bob", "--json"]).unwrap();
        assert_eq!(cli.names(), Some(("Mary Jane", "Bob")));
        assert!(cli.json);
    }

    #[test]
    fn one_name_is_a_usage_error() {
        let err = Cli::try_parse_from(["flames", "Alice"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn json_needs_names() {
        assert!(Cli::try_parse_from(["flames", "--json"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["flames", "--ascii", "--delay-ms", "10"]).unwrap();
        let config = FlamesConfig::default();
        assert!(cli.ui_options(&config).ascii_only);
        assert_eq!(cli.calculation_delay(&config), Duration::from_millis(10));
    }

    #[test]
    fn delay_defaults_to_config() {
        let cli = Cli::try_parse_from(["flames"]).unwrap();
        assert_eq!(
            cli.calculation_delay(&FlamesConfig::default()),
            DEFAULT_CALCULATION_DELAY
        );
    }
}
