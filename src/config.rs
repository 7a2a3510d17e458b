//! Configuration file support
//!
//! Loads settings from ~/.snipview.conf (or %USERPROFILE%\.snipview.conf
//! on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # snipview configuration
//! theme = auto
//! line-numbers = true
//! theme-file = /home/user/.config/snipview/colors.toml
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::theme::ThemeMode;

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme mode to render with
    pub theme: ThemeMode,
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Optional TOML file with color overrides
    pub theme_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Auto,
            show_line_numbers: true,
            theme_file: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".snipview.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".snipview.conf"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("theme") {
            if let Ok(mode) = value.parse::<ThemeMode>() {
                self.theme = mode;
            }
        }

        if let Some(value) = settings.get("line-numbers") {
            self.show_line_numbers = parse_bool(value);
        }

        if let Some(value) = settings.get("theme-file") {
            if !value.is_empty() {
                self.theme_file = Some(PathBuf::from(value));
            }
        }
    }

    /// Save current configuration to file
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            let theme = match self.theme {
                ThemeMode::Light => "light",
                ThemeMode::Dark => "dark",
                ThemeMode::Auto => "auto",
            };
            let theme_file = self
                .theme_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            let contents = format!(
                "# snipview configuration\n\
                 # Generated automatically\n\n\
                 theme = {}\n\
                 line-numbers = {}\n\
                 theme-file = {}\n",
                theme, self.show_line_numbers, theme_file
            );
            fs::write(path, contents)?;
        }
        Ok(())
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
theme = dark
line-numbers = false
theme-file = /tmp/colors.toml
        "#;

        let settings = Config::parse(contents);
        assert_eq!(settings.get("theme"), Some(&"dark".to_string()));
        assert_eq!(settings.get("line-numbers"), Some(&"false".to_string()));
        assert_eq!(settings.get("theme-file"), Some(&"/tmp/colors.toml".to_string()));
    }

    #[test]
    fn test_apply_settings() {
        let mut config = Config::default();
        let mut settings = HashMap::new();
        settings.insert("theme".to_string(), "light".to_string());
        settings.insert("line-numbers".to_string(), "no".to_string());
        settings.insert("theme-file".to_string(), "/tmp/t.toml".to_string());

        config.apply(&settings);

        assert_eq!(config.theme, ThemeMode::Light);
        assert!(!config.show_line_numbers);
        assert_eq!(config.theme_file, Some(PathBuf::from("/tmp/t.toml")));
    }

    #[test]
    fn test_apply_ignores_invalid_theme() {
        let mut config = Config::default();
        let mut settings = HashMap::new();
        settings.insert("theme".to_string(), "sepia".to_string());
        config.apply(&settings);
        assert_eq!(config.theme, ThemeMode::Auto);
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("Yes"));
        assert!(parse_bool("on"));
        assert!(parse_bool("1"));

        assert!(!parse_bool("false"));
        assert!(!parse_bool("off"));
        assert!(!parse_bool("anything"));
    }
}
