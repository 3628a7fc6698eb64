// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Screen to open on launch (home, routines, products, profile)
    #[serde(default = "default_screen")]
    pub screen: String,

    /// Whether the home screen shows the tip-of-the-day card
    #[serde(default = "default_show_tips")]
    pub show_tips: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Display the header clock as 24-hour time
    #[serde(default = "default_use_24h_clock")]
    pub use_24h_clock: bool,

    /// Optional catalog TOML overriding the built-in product list
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_screen() -> String {
    "home".to_string()
}

fn default_show_tips() -> bool {
    true
}

fn default_use_24h_clock() -> bool {
    true
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            screen: default_screen(),
            show_tips: default_show_tips(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            use_24h_clock: default_use_24h_clock(),
            catalog: None, // Built-in catalog unless the user points elsewhere
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("skindash")
        } else {
            // Linux, Windows and others
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("skindash")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            let config: Config = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?;

            Ok(config)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {}", e);
                eprintln!(
                    "Using built-in defaults. Run 'skindash init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.startup.screen, "home");
        assert_eq!(config.startup.show_tips, true);
        assert_eq!(config.defaults.use_24h_clock, true);
        assert_eq!(config.defaults.catalog, None);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be able to deserialize back
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.startup.screen, config.startup.screen);
        assert_eq!(deserialized.startup.show_tips, config.startup.show_tips);
        assert_eq!(
            deserialized.defaults.use_24h_clock,
            config.defaults.use_24h_clock
        );
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [startup]
            screen = "profile"
            "#,
        )
        .unwrap();

        assert_eq!(config.startup.screen, "profile");
        assert_eq!(config.startup.show_tips, true);
        assert_eq!(config.defaults.use_24h_clock, true);
    }

    #[test]
    fn test_catalog_path_persistence() {
        let mut config = Config::default();
        config.defaults.catalog = Some(PathBuf::from("/tmp/my-catalog.toml"));

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("catalog"));

        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            deserialized.defaults.catalog,
            Some(PathBuf::from("/tmp/my-catalog.toml"))
        );
    }
}
