//! Configuration: defaults, then an optional JSON file, then the command line

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use skycast_core::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use skycast_core::{Coordinates, StaticGeolocator, Units};

use crate::state::Theme;

/// Terminal weather dashboard
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "skycast", version)]
#[command(about = "Current conditions and a daily or hourly forecast in your terminal")]
pub struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "SKYCAST_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Look up this city at start instead of using the configured location
    #[arg(long, short)]
    pub city: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write logs (the terminal belongs to the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// metric or imperial
    #[arg(long, value_parser = parse_units)]
    pub units: Option<Units>,

    /// light or dark
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,
}

fn parse_units(s: &str) -> Result<Units, String> {
    match s.to_ascii_lowercase().as_str() {
        "metric" => Ok(Units::Metric),
        "imperial" => Ok(Units::Imperial),
        other => Err(format!("unknown units {:?}, expected metric or imperial", other)),
    }
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    match s.to_ascii_lowercase().as_str() {
        "light" => Ok(Theme::Light),
        "dark" => Ok(Theme::Dark),
        other => Err(format!("unknown theme {:?}, expected light or dark", other)),
    }
}

/// Contents of `config.json`; every key is optional
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub units: Option<Units>,
    pub timeout_secs: Option<u64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub allow_location: Option<bool>,
    pub theme: Option<Theme>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub units: Units,
    pub timeout: Duration,
    /// Coordinates handed out by the geolocator
    pub location: Option<Coordinates>,
    pub allow_location: bool,
    pub theme: Theme,
    /// Place-name query to run at start instead of geolocation
    pub city: Option<String>,
    pub log_file: PathBuf,
}

impl Config {
    /// Read the config file (explicit or default location) and merge the args over it
    pub fn load(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_path(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => FileConfig::from_path(&path)?,
                None => FileConfig::default(),
            },
        };
        Self::resolve(args, file)
    }

    /// Merge layers; command line wins over file, file over defaults
    pub fn resolve(args: Args, file: FileConfig) -> Result<Self> {
        let api_key = args
            .api_key
            .or(file.api_key)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .context(
                "No API key configured. Pass --api-key, set SKYCAST_API_KEY, \
                 or add \"api_key\" to the config file",
            )?;

        let location = match (file.latitude, file.longitude) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                    bail!("Configured location {}, {} is out of range", lat, lon);
                }
                Some(Coordinates::new(lat, lon))
            }
            (None, None) => None,
            _ => bail!("Config file must set both latitude and longitude, or neither"),
        };

        let timeout = match file.timeout_secs {
            Some(0) => bail!("timeout_secs must be at least 1"),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url: file.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            units: args.units.or(file.units).unwrap_or_default(),
            timeout,
            location,
            allow_location: file.allow_location.unwrap_or(true),
            theme: args.theme.or(file.theme).unwrap_or_default(),
            city: args
                .city
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            log_file: args.log_file.unwrap_or_else(default_log_path),
        })
    }

    pub fn geolocator(&self) -> StaticGeolocator {
        StaticGeolocator::new(self.location, self.allow_location)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skycast").join("config.json"))
}

pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("skycast")
        .join("skycast.log")
}
