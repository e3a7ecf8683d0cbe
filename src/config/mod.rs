use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Unit used when printing angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

fn default_tolerance() -> f64 {
    5.0
}
fn default_pretty() -> bool {
    true
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    /// Simplification tolerance in meters
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub angle_unit: AngleUnit,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            angle_unit: AngleUnit::default(),
            pretty: default_pretty(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Load the first config file found on the search path
    pub fn load() -> Option<Self> {
        Self::load_first(&get_config_paths())
    }

    fn load_first(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        // Logging is not installed yet at this point
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file; errors are fatal here
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: FileConfig = toml::from_str(&contents).context("Failed to parse config file")?;
        if config.tolerance.is_nan() || config.tolerance < 0.0 {
            bail!("tolerance must be a non-negative number of meters");
        }
        Ok(config)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("geopath.toml"));
    paths.push(PathBuf::from(".geopath.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("geopath").join("config.toml"));
        paths.push(config_dir.join("geopath.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".geopath.toml"));
        paths.push(home.join(".config").join("geopath").join("config.toml"));
    }

    paths
}
