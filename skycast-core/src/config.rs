use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Cities the dashboard ships with before the user configures any.
pub const STARTER_CITIES: [&str; 5] = ["New York", "London", "Tokyo", "Sydney", "Paris"];

/// Dashboard settings stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// City shown when no city is passed on the command line.
    pub default_city: Option<String>,

    /// Cities offered for quick selection.
    pub cities: Vec<String>,
}

impl Config {
    /// Config pre-populated with the dashboard's starter cities.
    pub fn with_starter_cities() -> Self {
        Self {
            default_city: Some(STARTER_CITIES[0].to_string()),
            cities: STARTER_CITIES.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Return the default city, or a hint-bearing error when unset.
    pub fn default_city(&self) -> Result<&str> {
        self.default_city.as_deref().ok_or_else(|| {
            anyhow!(
                "No default city configured.\n\
                 Hint: run `skycast configure` or pass a city name explicitly."
            )
        })
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c.eq_ignore_ascii_case(city))
    }

    /// Add a city to the quick-selection list; the first city added also
    /// becomes the default. Duplicates (case-insensitive) are ignored.
    pub fn add_city(&mut self, city: &str) {
        if !self.has_city(city) {
            self.cities.push(city.to_string());
        }

        if self.default_city.is_none() {
            self.default_city = Some(city.to_string());
        }
    }

    /// Make `city` the default, adding it to the list if missing.
    pub fn set_default_city(&mut self, city: &str) {
        self.add_city(city);
        self.default_city = Some(city.to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
