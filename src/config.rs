use crate::{GeometryError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_PRECISION: usize = 6;

/// Output settings shared by the exercise binaries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Decimal places used when printing numbers
    pub precision: usize,
    /// Colored headings
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            color: true,
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| GeometryError::config(path, err))?;
        let settings = Self::from_toml(&content).map_err(|err| GeometryError::config(path, err))?;
        log::debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    pub fn fmt_number(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_empty() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.precision, 6);
        assert!(settings.color);
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_toml("precision = 2").unwrap();
        assert_eq!(settings.precision, 2);
        assert!(settings.color);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Settings::from_toml("precison = 2").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision = 3\ncolor = false").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.precision, 3);
        assert!(!settings.color);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Settings::load_or_default(Some(&path)).unwrap_err();
        assert!(matches!(err, GeometryError::Config { .. }));
    }

    #[test]
    fn test_fmt_number_uses_precision() {
        let settings = Settings {
            precision: 2,
            color: false,
        };
        assert_eq!(settings.fmt_number(std::f64::consts::PI), "3.14");
    }
}
