use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_location = "London"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Used by `wwo show` when no location is given.
    pub default_location: Option<String>,

    /// Request timeout; no timeout when absent.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Return the configured API key.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `wwo configure` and enter your World Weather Online key."
            )
        })
    }

    /// Pick the explicit location if given, otherwise the configured default.
    pub fn resolve_location(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .or(self.default_location.as_deref())
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| {
                anyhow!(
                    "No location given and no default location configured.\n\
                     Hint: pass a location (e.g. `wwo show London`) or run `wwo configure`."
                )
            })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_default_location(&mut self, location: Option<String>) {
        self.default_location = location.filter(|l| !l.is_empty());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
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
        let dirs = ProjectDirs::from("dev", "wwo", "wwo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `wwo configure`"));
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key(String::new());

        assert!(cfg.api_key().is_err());

        cfg.set_api_key("abc123".into());
        assert_eq!(cfg.api_key().unwrap(), "abc123");
    }

    #[test]
    fn explicit_location_wins_over_default() {
        let mut cfg = Config::default();
        cfg.set_default_location(Some("Paris".into()));

        assert_eq!(cfg.resolve_location(Some("London")).unwrap(), "London");
        assert_eq!(cfg.resolve_location(None).unwrap(), "Paris");
    }

    #[test]
    fn resolve_location_errors_without_any_location() {
        let mut cfg = Config::default();
        cfg.set_default_location(Some(String::new()));

        assert_eq!(cfg.default_location, None);
        let err = cfg.resolve_location(None).unwrap_err();
        assert!(err.to_string().contains("No location given"));
    }

    #[test]
    fn parses_toml_with_optional_fields() {
        let cfg = Config::parse(
            r#"
            api_key = "KEY"
            timeout_secs = 7
            "#,
        )
        .unwrap();

        assert_eq!(cfg.api_key().unwrap(), "KEY");
        assert_eq!(cfg.default_location, None);
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(7)));
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.set_default_location(Some("London".into()));

        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), cfg);
    }
}
