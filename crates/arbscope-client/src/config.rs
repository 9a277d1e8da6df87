use crate::{Error, Result};
use arbscope_engine::EngineConfig;
use arbscope_types::ClassifyDefaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ARBSCOPE_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.arbscope (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ARBSCOPE_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("arbscope").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".arbscope").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Backend API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Notional the routes endpoint quotes against.
    pub routes_amount_usd: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
            routes_amount_usd: 500.0,
        }
    }
}

/// Derived-state knobs forwarded into the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSection {
    pub volatility_alert_pct: f64,
    pub slippage_warn_pct: f64,
    /// Optional status line for the overview header.
    pub banner: Option<String>,
    pub poll_interval_secs: u64,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            volatility_alert_pct: 15.0,
            slippage_warn_pct: 1.5,
            banner: None,
            poll_interval_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub engine: EngineSection,
    /// Tier assigned when a classification input is missing (per quantity).
    pub missing_defaults: ClassifyDefaults,
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            defaults: self.missing_defaults,
            volatility_alert_pct: self.engine.volatility_alert_pct,
            slippage_warn_pct: self.engine.slippage_warn_pct,
            banner: self.engine.banner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbscope_types::Tier;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.missing_defaults.risk, Tier::High);
    }

    #[test]
    fn test_round_trip_preserves_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.api.base_url = "http://10.0.0.5:9000".to_string();
        config.engine.volatility_alert_pct = 20.0;
        config.missing_defaults.risk = Tier::Medium;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, "http://10.0.0.5:9000");
        assert_eq!(loaded.engine.volatility_alert_pct, 20.0);
        assert_eq!(loaded.missing_defaults.risk, Tier::Medium);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://backend:8000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://backend:8000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.engine.poll_interval_secs, 5);
    }
}
