use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the city CSV files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Registry of lowercase city name -> CSV file name.
    #[serde(default = "default_cities")]
    pub cities: BTreeMap<String, String>,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_cities() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("chicago".to_string(), "chicago.csv".to_string()),
        ("new york city".to_string(), "new_york_city.csv".to_string()),
        ("washington".to_string(), "washington.csv".to_string()),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cities: default_cities(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikestats")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".bikestats")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikestats.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize the configuration directory and default config file.
    /// In test mode the file is printed instead of written.
    pub fn init_all(force: bool, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;

        if is_test {
            println!("{yaml}");
            return Ok(());
        }

        let path = Self::config_file();
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        println!("✅ Config file: {:?}", path);
        println!("✅ Data dir:    {:?}", expand_tilde(&config.data_dir));

        Ok(())
    }

    /// Resolve a city to its backing CSV file through the registry.
    pub fn city_file(&self, city: &City) -> AppResult<PathBuf> {
        let file = self
            .cities
            .get(city.key())
            .ok_or_else(|| AppError::Config(format!("city '{}' is not registered", city.key())))?;
        Ok(expand_tilde(&self.data_dir).join(file))
    }
}
