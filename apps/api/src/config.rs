use std::str::FromStr;

use anyhow::{Context, Result};

use crate::editor::EditorConfig;
use crate::toolbar::{ToolbarConfig, ToolbarSize};

/// Application configuration loaded from environment variables.
/// Every variable is optional; unparseable values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub toolbar_width: f64,
    pub toolbar_height: f64,
    pub toolbar_gap: f64,
    pub canvas_margin: f64,
    pub click_debounce_ms: u64,
    pub drag_threshold_px: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            toolbar_width: env_or("TOOLBAR_WIDTH", 400.0)?,
            toolbar_height: env_or("TOOLBAR_HEIGHT", 50.0)?,
            toolbar_gap: env_or("TOOLBAR_GAP", 8.0)?,
            canvas_margin: env_or("CANVAS_MARGIN", 8.0)?,
            click_debounce_ms: env_or("CLICK_DEBOUNCE_MS", 200)?,
            drag_threshold_px: env_or("DRAG_THRESHOLD_PX", 3.0)?,
        })
    }

    pub fn toolbar_config(&self) -> ToolbarConfig {
        ToolbarConfig {
            size: ToolbarSize {
                width: self.toolbar_width,
                height: self.toolbar_height,
            },
            gap: self.toolbar_gap,
            margin: self.canvas_margin,
        }
    }

    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            click_debounce_ms: self.click_debounce_ms,
            drag_threshold_px: self.drag_threshold_px,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_padded_numbers() {
        assert_eq!(parse_value::<u16>("PORT", " 9000 ").unwrap(), 9000);
        assert_eq!(parse_value::<f64>("TOOLBAR_GAP", "12.5").unwrap(), 12.5);
    }

    #[test]
    fn test_parse_value_names_the_variable() {
        let err = parse_value::<u64>("CLICK_DEBOUNCE_MS", "soon").unwrap_err();
        assert!(err.to_string().contains("CLICK_DEBOUNCE_MS"));
    }

    #[test]
    fn test_derived_configs_match_defaults() {
        let config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            toolbar_width: 400.0,
            toolbar_height: 50.0,
            toolbar_gap: 8.0,
            canvas_margin: 8.0,
            click_debounce_ms: 200,
            drag_threshold_px: 3.0,
        };
        assert_eq!(config.toolbar_config(), ToolbarConfig::default());
        assert_eq!(config.editor_config(), EditorConfig::default());
    }
}
