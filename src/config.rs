use crate::geometry::Point;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

pub const DEFAULT_SLICES: usize = 15;
pub const DEFAULT_SIZE: u32 = 800;
pub const DEFAULT_MIN_RADIUS: f64 = 130.0;
pub const DEFAULT_MAX_RADIUS: f64 = 250.0;

/// How many discrete ship positions each slice edge offers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PoseSet {
    #[strum(serialize = "three", serialize = "3")]
    Three,
    #[default]
    #[strum(serialize = "five", serialize = "5")]
    Five,
}

impl PoseSet {
    pub fn count(&self) -> usize {
        match self {
            Self::Three => 3,
            Self::Five => 5,
        }
    }
}

/// What part of the selected slice is re-stroked in the ship color.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    #[default]
    #[strum(serialize = "edge")]
    Edge,
    #[strum(serialize = "triangle")]
    Triangle,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub slices: usize,
    pub size: u32,
    pub min_radius: f64,
    pub max_radius: f64,
    pub poses: PoseSet,
    pub highlight: Highlight,
    pub seed: Option<u64>,
    pub debug_markers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slices: DEFAULT_SLICES,
            size: DEFAULT_SIZE,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            poses: PoseSet::default(),
            highlight: Highlight::default(),
            seed: None,
            debug_markers: false,
        }
    }
}

impl Config {
    pub fn center(&self) -> Point {
        let half = self.size as f64 / 2.0;
        Point::new(half, half)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.slices == 0 {
            return invalid("slices must be at least 1".into());
        }
        if self.size == 0 {
            return invalid("size must be positive".into());
        }
        for (name, r) in [("min_radius", self.min_radius), ("max_radius", self.max_radius)] {
            if !r.is_finite() || r <= 0.0 {
                return invalid(format!("{name} must be a positive number, got {r}"));
            }
        }
        if self.min_radius > self.max_radius {
            return invalid(format!(
                "min_radius ({}) exceeds max_radius ({})",
                self.min_radius, self.max_radius
            ));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "pieship", "pieship")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn build(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    let cfg: Config = builder
        .add_source(config::Environment::with_prefix("PIESHIP"))
        .build()?
        .try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    build(
        config::Config::builder().add_source(config::File::from(config_path).required(false)),
    )
}

/// Loads the user config, using built-in defaults when no config directory
/// can be resolved. An invalid config is still an error.
pub fn load_or_default() -> Result<Config, ConfigError> {
    match load_config() {
        Err(ConfigError::ConfigDirNotFound) => {
            log::warn!("No config directory available, using defaults");
            build(config::Config::builder())
        }
        other => other,
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
