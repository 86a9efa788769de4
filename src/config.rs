use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub bucket: BucketConfig,
    pub ui: UiConfig,
}

/// Storage bucket deployment identity
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BucketConfig {
    /// Bucket name as provisioned by the deployment
    pub name: String,
    /// Bucket region, used for the console link
    pub region: String,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UiConfig {
    /// Show the folder sidebar on startup
    pub sidebar_open: bool,
    /// Width of the folder sidebar (in pixels)
    pub sidebar_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bucket: BucketConfig {
                name: "haciendaerp-filestore-dev".to_string(),
                region: "us-east-1".to_string(),
            },
            ui: UiConfig {
                sidebar_open: true,
                sidebar_width: 220.0,
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "almacen") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to parse config file, using defaults");
                        }
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read config file, using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Deployment label derived from the bucket name. Purely cosmetic.
    pub fn environment_label(&self) -> Option<&'static str> {
        let name = self.bucket.name.to_lowercase();
        if name.contains("dev") {
            Some("Development")
        } else if name.contains("prod") {
            Some("Production")
        } else {
            None
        }
    }

    /// Web console URL for a folder path inside the bucket
    pub fn console_url(&self, path: &str) -> String {
        format!(
            "https://s3.console.aws.amazon.com/s3/buckets/{}?region={}&prefix={}",
            self.bucket.name, self.bucket.region, path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ui.sidebar_open);
        assert_eq!(config.ui.sidebar_width, 220.0);
        assert_eq!(config.bucket.region, "us-east-1");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.bucket.name, deserialized.bucket.name);
        assert_eq!(config.ui.sidebar_width, deserialized.ui.sidebar_width);
    }

    #[test]
    fn test_environment_label() {
        let mut config = Config::default();
        config.bucket.name = "haciendaerp-filestore-dev".into();
        assert_eq!(config.environment_label(), Some("Development"));

        config.bucket.name = "haciendaerp-filestore-prod".into();
        assert_eq!(config.environment_label(), Some("Production"));

        config.bucket.name = "haciendaerp-filestore".into();
        assert_eq!(config.environment_label(), None);
    }

    #[test]
    fn test_console_url_includes_prefix() {
        let config = Config::default();
        let url = config.console_url("ConversionFiles/");
        assert!(url.contains("prefix=ConversionFiles/"));
        assert!(url.contains(&config.bucket.name));
    }
}
