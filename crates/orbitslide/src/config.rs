use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ai::GeminiClient;
use crate::ai::gemini::DEFAULT_MODEL;
use crate::catalog::animations;
use crate::catalog::themes::{ThemeCatalog, ThemeDef};
use crate::state::Settings;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "orbitslide";

/// Environment variables consulted, in order, when no key is configured.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai: Option<AiConfig>,

    /// User-defined themes, listed before the built-in ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<ThemeDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_seconds: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// API key. If not set, falls back to GEMINI_API_KEY, then API_KEY.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl AiConfig {
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }
}

/// Where the resolved API key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Config,
    Env(&'static str),
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "config file"),
            Self::Env(var) => write!(f, "${var}"),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `orbitslide config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Using default configuration: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# OrbitSlide configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Theme catalog including the user's custom themes.
    pub fn theme_catalog(&self) -> ThemeCatalog {
        ThemeCatalog::with_custom(&self.themes)
    }

    /// Session defaults with unset values filled in.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(defaults) = &self.defaults {
            if let Some(theme) = &defaults.theme {
                settings.theme = theme.clone();
            }
            if let Some(secs) = defaults.autoplay_seconds.filter(|s| *s > 0) {
                settings.slide_duration = Duration::from_secs(secs);
            }
            if let Some(animation) = &defaults.animation {
                settings.animation = animation.clone();
            }
            if let Some(speed) = &defaults.animation_speed {
                settings.animation_speed = speed.clone();
            }
        }
        settings
    }

    /// Resolve the API key from the config file or the environment.
    pub fn resolve_api_key(&self) -> Option<(String, KeySource)> {
        self.resolve_api_key_with(|var| std::env::var(var).ok())
    }

    fn resolve_api_key_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Option<(String, KeySource)> {
        if let Some(key) = self
            .ai
            .as_ref()
            .and_then(|ai| ai.api_key.clone())
            .filter(|k| !k.is_empty())
        {
            return Some((key, KeySource::Config));
        }
        API_KEY_ENV_VARS.into_iter().find_map(|var| {
            env(var)
                .filter(|k| !k.is_empty())
                .map(|k| (k, KeySource::Env(var)))
        })
    }

    pub fn model(&self) -> &str {
        self.ai.as_ref().map_or(DEFAULT_MODEL, AiConfig::model)
    }

    pub fn gemini_client(&self) -> GeminiClient {
        GeminiClient::new(self.resolve_api_key().map(|(key, _)| key), self.model())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                if self.theme_catalog().find(value).is_none() {
                    anyhow::bail!(
                        "Invalid theme: {value}. Run `orbitslide themes` to list theme ids."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.autoplay_seconds" => {
                let secs = match value.parse::<u64>() {
                    Ok(secs) if secs > 0 => secs,
                    _ => anyhow::bail!(
                        "Invalid autoplay_seconds: {value}. Must be a positive whole number."
                    ),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .autoplay_seconds = Some(secs);
            }
            "defaults.animation" => {
                if animations::find(value).is_none() {
                    anyhow::bail!(
                        "Invalid animation: {value}. Run `orbitslide animations` to list animation ids."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .animation = Some(value.to_string());
            }
            "defaults.animation_speed" => {
                if animations::speed(value).is_none() {
                    let ids: Vec<&str> = animations::SPEEDS
                        .iter()
                        .map(|s| s.id)
                        .filter(|id| !id.is_empty())
                        .collect();
                    anyhow::bail!(
                        "Invalid animation_speed: {value}. Must be one of {}, or '' for normal.",
                        ids.join(", ")
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .animation_speed = Some(value.to_string());
            }
            "ai.model" => {
                if value.trim().is_empty() {
                    anyhow::bail!("Invalid model: must not be empty.");
                }
                self.ai.get_or_insert_with(AiConfig::default).model = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.autoplay_seconds, defaults.animation, defaults.animation_speed, ai.model"
            ),
        }
        Ok(())
    }
}

/// Show the first and last four characters of a key.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_validates_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "cosmic").unwrap();
        assert!(config.set("defaults.theme", "nope").is_err());

        config.set("defaults.autoplay_seconds", "12").unwrap();
        assert!(config.set("defaults.autoplay_seconds", "0").is_err());
        assert!(config.set("defaults.autoplay_seconds", "-3").is_err());
        assert!(config.set("defaults.autoplay_seconds", "ten").is_err());

        config.set("defaults.animation", "animate__zoomIn").unwrap();
        assert!(config.set("defaults.animation", "spin").is_err());

        config.set("defaults.animation_speed", "animate__slow").unwrap();
        assert!(config.set("defaults.animation_speed", "warp").is_err());

        config.set("ai.model", "gemini-2.5-pro").unwrap();
        assert!(config.set("ai.model", " ").is_err());
        assert!(config.set("defaults.aspect", "16:9").is_err());

        let settings = config.settings();
        assert_eq!(settings.theme, "cosmic");
        assert_eq!(settings.slide_duration, Duration::from_secs(12));
        assert_eq!(settings.animation, "animate__zoomIn");
        assert_eq!(settings.animation_speed, "animate__slow");
        assert_eq!(config.model(), "gemini-2.5-pro");
    }

    #[test]
    fn test_custom_theme_is_a_valid_default() {
        let yaml = r##"
themes:
  - id: brand
    name: Brand
    background: "#101820"
    text_primary: "#ffffff"
    text_secondary: "#cccccc"
    accent: "#f2aa4c"
    font_family: Inter
    card_background: "rgba(255,255,255,0.05)"
"##;
        let mut config: Config = serde_yaml::from_str(yaml).unwrap();
        config.set("defaults.theme", "brand").unwrap();
        assert_eq!(config.theme_catalog().resolve("brand").name, "Brand");
    }

    #[test]
    fn test_api_key_resolution_order() {
        let env = |var: &str| match var {
            "GEMINI_API_KEY" => Some("gemini-env".to_string()),
            "API_KEY" => Some("plain-env".to_string()),
            _ => None,
        };
        let mut config = Config::default();
        assert_eq!(
            config.resolve_api_key_with(env),
            Some(("gemini-env".to_string(), KeySource::Env("GEMINI_API_KEY")))
        );
        assert_eq!(
            config.resolve_api_key_with(|var| (var == "API_KEY").then(|| "plain-env".to_string())),
            Some(("plain-env".to_string(), KeySource::Env("API_KEY")))
        );

        config.ai = Some(AiConfig {
            model: None,
            api_key: Some("from-file".to_string()),
        });
        assert_eq!(
            config.resolve_api_key_with(env),
            Some(("from-file".to_string(), KeySource::Config))
        );
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("orbitslide-config-{}", std::process::id()))
            .join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.autoplay_seconds", "7").unwrap();
        config.save_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# OrbitSlide configuration\n"));
        assert!(!text.contains("themes"));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(
            loaded.settings().slide_duration,
            Duration::from_secs(7)
        );
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("abcd"), "****");
        assert_eq!(mask_key("AIzaSyExample1234"), "AIza…1234");
    }
}
