//! TOML-based card configuration.
//!
//! Everything that differs between card variants lives here:
//! - Growth slope and optional scale cap
//! - Decline limit before the negative option disappears
//! - The celebration date
//! - All copy shown on the card
//! - Cue and artwork settings
//!
//! Configuration is stored at `~/.config/valentine/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::card::{CardCopy, CardEngine, GrowthCurve, DEFAULT_DECLINE_LIMIT};
use crate::countdown::AnnualDate;
use crate::error::{ConfigError, CoreError, Result, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    #[serde(default = "default_slope")]
    pub slope: f64,
    /// Layout-safety cap on the scale factor. Unset means no cap.
    #[serde(default)]
    pub max_scale: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalConfig {
    /// Declines allowed before the negative option is withdrawn; 0 = never.
    #[serde(default = "default_decline_limit")]
    pub decline_limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownConfig {
    #[serde(default = "default_month")]
    pub month: u32,
    #[serde(default = "default_day")]
    pub day: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding `proposal.txt` / `success.txt` artwork.
    #[serde(default)]
    pub dir: Option<String>,
}

/// Card configuration.
///
/// Serialized to/from TOML at `~/.config/valentine/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub growth: GrowthConfig,
    #[serde(default)]
    pub proposal: ProposalConfig,
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub copy: CardCopy,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

// Default functions
fn default_slope() -> f64 {
    GrowthCurve::DEFAULT_SLOPE
}
fn default_decline_limit() -> u32 {
    DEFAULT_DECLINE_LIMIT
}
fn default_month() -> u32 {
    AnnualDate::VALENTINES_DAY.month()
}
fn default_day() -> u32 {
    AnnualDate::VALENTINES_DAY.day()
}
fn default_true() -> bool {
    true
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            slope: default_slope(),
            max_scale: None,
        }
    }
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            decline_limit: default_decline_limit(),
        }
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            month: default_month(),
            day: default_day(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = if matches!(value, "none" | "null") && is_optional_path(key) {
                serde_json::Value::Null
            } else {
                match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => parse_number(value).ok_or_else(|| {
                        invalid(format!("cannot parse '{value}' as number"))
                    })?,
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    serde_json::Value::Null if OPTIONAL_NUMBER_KEYS.contains(&key) => {
                        parse_number(value).ok_or_else(|| {
                            invalid(format!("cannot parse '{value}' as number"))
                        })?
                    }
                    serde_json::Value::Null => serde_json::Value::String(value.into()),
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                }
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    })?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(CoreError::Io(e)),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value in memory. The result must still validate.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and persist. Returns error if key is unknown.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)?;
        self.save()
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.growth_curve()?;
        self.target_date()?;
        Ok(())
    }

    pub fn growth_curve(&self) -> std::result::Result<GrowthCurve, ValidationError> {
        let curve = GrowthCurve::new(self.growth.slope)?;
        match self.growth.max_scale {
            Some(cap) => curve.with_cap(cap),
            None => Ok(curve),
        }
    }

    pub fn decline_limit(&self) -> Option<u32> {
        (self.proposal.decline_limit > 0).then_some(self.proposal.decline_limit)
    }

    pub fn target_date(&self) -> std::result::Result<AnnualDate, ValidationError> {
        AnnualDate::new(self.countdown.month, self.countdown.day)
    }

    /// Fresh state machine for this configuration.
    pub fn engine(&self) -> std::result::Result<CardEngine, ValidationError> {
        Ok(CardEngine::new(self.growth_curve()?, self.decline_limit()))
    }
}

fn parse_number(value: &str) -> Option<serde_json::Value> {
    if let Ok(n) = value.parse::<u64>() {
        Some(serde_json::Value::Number(n.into()))
    } else {
        value
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(serde_json::Value::Number)
    }
}

/// Keys that may be unset; `none` clears them.
const OPTIONAL_NUMBER_KEYS: &[&str] = &["growth.max_scale"];
const OPTIONAL_STRING_KEYS: &[&str] = &["assets.dir"];

fn is_optional_path(key: &str) -> bool {
    OPTIONAL_NUMBER_KEYS.contains(&key) || OPTIONAL_STRING_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.proposal.decline_limit, 4);
        assert_eq!(parsed.growth.max_scale, None);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("[growth]\nslope = 0.75\n").unwrap();
        assert_eq!(cfg.growth.slope, 0.75);
        assert_eq!(cfg.countdown.month, 2);
        assert_eq!(cfg.countdown.day, 14);
        assert_eq!(cfg.copy.question, "Will you be my Valentine?");
    }

    #[test]
    fn get_by_dotted_key() {
        let cfg = Config::default();
        assert_eq!(cfg.get("growth.slope").as_deref(), Some("0.4"));
        assert_eq!(cfg.get("copy.footer").as_deref(), Some("Sent with love"));
        assert_eq!(cfg.get("growth.max_scale").as_deref(), Some("null"));
        assert_eq!(cfg.get("nope.nothing"), None);
    }

    #[test]
    fn set_updates_typed_values() {
        let mut cfg = Config::default();
        cfg.set_value("growth.slope", "0.7").unwrap();
        cfg.set_value("proposal.decline_limit", "0").unwrap();
        cfg.set_value("notifications.enabled", "false").unwrap();
        cfg.set_value("growth.max_scale", "3").unwrap();
        cfg.set_value("copy.question", "Coffee tomorrow?").unwrap();

        assert_eq!(cfg.growth.slope, 0.7);
        assert_eq!(cfg.decline_limit(), None);
        assert!(!cfg.notifications.enabled);
        assert_eq!(cfg.growth.max_scale, Some(3.0));
        assert_eq!(cfg.copy.question, "Coffee tomorrow?");

        cfg.set_value("growth.max_scale", "none").unwrap();
        assert_eq!(cfg.growth.max_scale, None);
        assert!(cfg.set_value("growth.max_scale", "huge").is_err());

        cfg.set_value("assets.dir", "2024").unwrap();
        assert_eq!(cfg.assets.dir.as_deref(), Some("2024"));
        cfg.set_value("assets.dir", "none").unwrap();
        assert_eq!(cfg.assets.dir, None);
    }

    #[test]
    fn set_rejects_unknown_and_invalid() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set_value("growth.speed", "1"),
            Err(CoreError::Config(ConfigError::UnknownKey(_)))
        ));
        assert!(cfg.set_value("growth.slope", "fast").is_err());
        assert!(matches!(
            cfg.set_value("growth.slope", "-1"),
            Err(CoreError::Validation(ValidationError::InvalidSlope(_)))
        ));
        assert!(cfg.set_value("countdown.day", "31").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn load_from_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[growth\nslope = ").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(CoreError::Config(ConfigError::LoadFailed { .. }))
        ));
    }

    #[test]
    fn engine_uses_configured_variant() {
        let mut cfg = Config::default();
        cfg.growth.slope = 0.75;
        cfg.proposal.decline_limit = 2;
        let mut engine = cfg.engine().unwrap();
        engine.decline();
        engine.decline();
        assert!(!engine.decline_available());
        assert_eq!(engine.scale(), 2.5);
    }
}
