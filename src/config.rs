use std::path::{Path, PathBuf};

use crossterm::event::KeyCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Fast cycle: metric sampling.
    pub metrics_interval_ms: u64,
    /// Slow cycle: process listing.
    pub process_interval_ms: u64,
    /// Extra listing refresh this long after a termination request.
    pub settle_delay_ms: u64,
    pub default_sort: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            metrics_interval_ms: 1000,
            process_interval_ms: 5000,
            settle_delay_ms: 1000,
            default_sort: "cpu".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub terminate: String,
    pub force_terminate: String,
    pub refresh: String,
    pub cycle_sort: String,
    pub help: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            terminate: "k".to_string(),
            force_terminate: "K".to_string(),
            refresh: "r".to_string(),
            cycle_sort: "s".to_string(),
            help: "?".to_string(),
        }
    }
}

pub fn parse_key(value: &str) -> Option<KeyCode> {
    match value {
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("vitals").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.metrics_interval_ms, 1000);
        assert_eq!(config.general.process_interval_ms, 5000);
        assert_eq!(config.general.settle_delay_ms, 1000);
        assert_eq!(config.general.default_sort, "cpu");
        assert_eq!(config.keybinds.quit, "q");
        assert_eq!(config.keybinds.force_terminate, "K");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
process_interval_ms = 2000
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.process_interval_ms, 2000);
        // Untouched fields keep their defaults
        assert_eq!(config.general.metrics_interval_ms, 1000);
        assert_eq!(config.keybinds.terminate, "k");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
metrics_interval_ms = 500
process_interval_ms = 3000
settle_delay_ms = 1500
default_sort = "memory"

[keybinds]
quit = "x"
terminate = "d"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.metrics_interval_ms, 500);
        assert_eq!(config.general.settle_delay_ms, 1500);
        assert_eq!(config.general.default_sort, "memory");
        assert_eq!(config.keybinds.quit, "x");
        assert_eq!(config.keybinds.terminate, "d");
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.general.metrics_interval_ms, 1000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("vitals_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.process_interval_ms, 5000);
        let _ = std::fs::remove_file(&temp);
    }

    #[test]
    fn parse_key_handles_named_and_single_chars() {
        assert_eq!(parse_key("q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("Enter"), Some(KeyCode::Enter));
        assert_eq!(parse_key("Esc"), Some(KeyCode::Esc));
        assert_eq!(parse_key("ctrl+x"), None);
    }
}
