use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use fbdh_core::utilities::data_parsers::parse_instant_utc;
use fbdh_core::{Clock, FixedClock, Locale, SystemClock};
use serde::Deserialize;
use tracing::info;

use crate::cli::Cli;

/// Contents of the optional TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FbdhConfig {
    /// Output language (`fr` or `en`).
    #[serde(default)]
    pub locale: Option<String>,

    /// Evaluation instant used instead of the wall clock
    /// (RFC 3339 or `YYYY-MM-DD`).
    #[serde(default)]
    pub now: Option<String>,
}

impl FbdhConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

/// Effective settings once the file and the flags are merged.
#[derive(Debug)]
pub struct Settings {
    /// Output language.
    pub locale: Locale,
    /// Source of "now".
    pub clock: Arc<dyn Clock>,
}

impl Settings {
    /// Merge command-line flags over the configuration file (if any).
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                info!(path = %path.display(), "loading configuration");
                FbdhConfig::load(path)?
            }
            None => FbdhConfig::default(),
        };
        Self::from_parts(file, cli.locale.as_deref())
    }

    fn from_parts(file: FbdhConfig, locale_flag: Option<&str>) -> Result<Self> {
        let locale = match locale_flag.or(file.locale.as_deref()) {
            Some(s) => s.parse::<Locale>()?,
            None => Locale::default(),
        };
        let clock: Arc<dyn Clock> = match file.now.as_deref() {
            Some(s) => {
                let now = parse_instant_utc(s).context("invalid `now` in configuration")?;
                info!(%now, "using fixed evaluation instant");
                Arc::new(FixedClock::new(now))
            }
            None => Arc::new(SystemClock),
        };
        Ok(Self { locale, clock })
    }
}
