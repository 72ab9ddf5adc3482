//! Configuration
//!
//! Every field has a default, so a page can override only what it needs
//! through a JSON block. Unknown fields are ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BodyView, PainLevel};
use crate::repository::DEFAULT_STORAGE_KEY;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level, as taken by console loggers.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// User-facing text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    /// Prefix of exported file names
    pub artifact: String,
    pub front: String,
    pub back: String,
    pub level_heading: String,
    /// Button captions for levels 1..=4
    pub levels: [String; 4],
    pub clear: String,
    pub clear_prompt: String,
    pub save: String,
    pub share: String,
    pub share_title: String,
    pub share_text: String,
    /// Shown when sharing fell back to a download
    pub share_fallback_notice: String,
    pub hint: String,
}

impl Labels {
    pub fn view_label(&self, view: BodyView) -> &str {
        match view {
            BodyView::Front => &self.front,
            BodyView::Back => &self.back,
        }
    }

    pub fn level_label(&self, level: PainLevel) -> &str {
        &self.levels[usize::from(level.value() - 1)]
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "疼痛部位標記".to_string(),
            artifact: "疼痛標記".to_string(),
            front: "正面".to_string(),
            back: "背面".to_string(),
            level_heading: "疼痛程度".to_string(),
            levels: [
                "輕微".to_string(),
                "中度".to_string(),
                "嚴重".to_string(),
                "劇烈".to_string(),
            ],
            clear: "清除標記".to_string(),
            clear_prompt: "確定要清除所有標記嗎？".to_string(),
            save: "儲存圖片".to_string(),
            share: "分享".to_string(),
            share_title: "我的疼痛部位標記".to_string(),
            share_text: "這是我標記的疼痛部位".to_string(),
            share_fallback_notice: "圖片已下載，您可以透過 LINE 傳送給醫生".to_string(),
            hint: "點擊身體圖示標記疼痛位置，點擊標記可移除".to_string(),
        }
    }
}

/// How the exported PNG is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportStyle {
    pub background: String,
    /// Canvas pixels per logical unit
    pub scale: f64,
    pub marker_radius: f64,
    pub outline_color: String,
    pub outline_width: f64,
}

impl Default for ExportStyle {
    fn default() -> Self {
        Self {
            background: "#fafafa".to_string(),
            scale: 2.0,
            marker_radius: 16.0,
            outline_color: "white".to_string(),
            outline_width: 4.0,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key holding the markers
    pub storage_key: String,
    pub log_level: LogLevel,
    pub labels: Labels,
    pub export: ExportStyle,
    /// How long the notice toast stays up
    pub notice_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: LogLevel::default(),
            labels: Labels::default(),
            export: ExportStyle::default(),
            notice_ms: 4000,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".to_string()));
        }
        if !self.export.scale.is_finite() || self.export.scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "export.scale must be positive, got {}",
                self.export.scale
            )));
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{"storage_key": "clinicA", "log_level": "debug", "labels": {"front": "Front"}}"#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "clinicA");
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.labels.view_label(BodyView::Front), "Front");
        assert_eq!(config.labels.view_label(BodyView::Back), "背面");
        assert_eq!(config.export, ExportStyle::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_json(r#"{"storage_key": "  "}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"export": {"scale": 0}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(AppConfig::from_json("nope"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_log_level_matches_filter() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert_eq!(level.to_level().to_level_filter(), level.to_level_filter());
        }
        assert_eq!(LogLevel::default().to_level(), log::Level::Info);
    }

    #[test]
    fn test_level_labels() {
        let labels = Labels::default();
        assert_eq!(labels.level_label(PainLevel::One), "輕微");
        assert_eq!(labels.level_label(PainLevel::Four), "劇烈");
    }
}
