use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

/// User configuration, loaded from `<config dir>/clipgrid/config.toml`.
/// Missing file or missing keys fall back to defaults; a malformed file
/// logs a warning and is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default export target when no `-o` flag is given
    pub export_file: PathBuf,
    /// Cap on rendered column width
    pub max_col_width: usize,
    /// Stripe alternate body rows
    pub zebra: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_file: PathBuf::from("export.csv"),
            max_col_width: 30,
            zebra: true,
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("clipgrid").join("config.toml"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => Self::from_toml(&text),
            Err(_) => Self::default(),
        }
    }

    fn from_toml(text: &str) -> Self {
        match toml::from_str(text) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "malformed config file, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.export_file, PathBuf::from("export.csv"));
        assert_eq!(c.max_col_width, 30);
        assert!(c.zebra);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let c = Config::from_toml("max_col_width = 50\n");
        assert_eq!(c.max_col_width, 50);
        assert_eq!(c.export_file, PathBuf::from("export.csv"));
        assert!(c.zebra);
    }

    #[test]
    fn test_full_toml() {
        let c = Config::from_toml("export_file = \"out.csv\"\nmax_col_width = 12\nzebra = false\n");
        assert_eq!(c.export_file, PathBuf::from("out.csv"));
        assert_eq!(c.max_col_width, 12);
        assert!(!c.zebra);
    }

    #[test]
    fn test_malformed_toml_falls_back() {
        let c = Config::from_toml("max_col_width = \"not a number\"");
        assert_eq!(c.max_col_width, 30);
    }
}
