use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use solar_times::{GOTHENBURG, GeoCoordinate, Zenith};
use tracing::info;

/// Name of the location that is always available.
pub const BUILTIN_LOCATION: &str = "gothenburg";

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarConfig {
    /// Default zenith for `times`.
    #[serde(default)]
    pub zenith: Option<ZenithToml>,

    /// Default solver for `times`.
    #[serde(default)]
    pub algorithm: Option<Algorithm>,

    /// Named locations.
    #[serde(default)]
    pub location: Vec<LocationToml>,
}

/// Zenith given by name or as an angle in degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ZenithToml {
    Degrees(f64),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Solver selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Sunrise equation, both events from one solar transit.
    Equation,
    /// Solar hour angle, one evaluation per event.
    HourAngle,
    /// Run both and print them side by side.
    #[default]
    Both,
}

impl SolarConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        info!(path = %path.display(), locations = config.location.len(), "config loaded");
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolve a location by name. Config entries shadow the built-in one.
    pub fn location(&self, name: &str) -> Result<GeoCoordinate> {
        if let Some(entry) = self
            .location
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
        {
            return GeoCoordinate::checked(entry.latitude, entry.longitude)
                .with_context(|| format!("location '{}' in config", entry.name));
        }
        if name.eq_ignore_ascii_case(BUILTIN_LOCATION) {
            return Ok(GOTHENBURG);
        }
        bail!("unknown location '{name}': add a [[location]] entry to the config file")
    }

    /// Resolve the zenith: the command-line value wins over the config file.
    pub fn zenith(&self, cli_value: Option<&str>) -> Result<Zenith> {
        match (cli_value, &self.zenith) {
            (Some(value), _) => parse_zenith(value),
            (None, Some(ZenithToml::Name(name))) => parse_zenith(name),
            (None, Some(ZenithToml::Degrees(degrees))) => {
                Zenith::custom(*degrees).context("zenith in config")
            }
            (None, None) => Ok(Zenith::default()),
        }
    }

    /// Resolve the solver: the command-line value wins over the config file.
    pub fn algorithm(&self, cli_value: Option<Algorithm>) -> Algorithm {
        cli_value.or(self.algorithm).unwrap_or_default()
    }
}

/// Parse a zenith name (`civil`, ...) or an angle in degrees.
pub fn parse_zenith(value: &str) -> Result<Zenith> {
    if let Some(zenith) = Zenith::from_name(value) {
        return Ok(zenith);
    }
    let degrees: f64 = value
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid zenith '{value}': expected a twilight name or degrees"))?;
    Ok(Zenith::custom(degrees)?)
}
