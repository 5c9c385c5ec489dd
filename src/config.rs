use crate::error::{EtlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime configuration for a pipeline run.
///
/// Values come from an optional TOML file; CLI flags override file values,
/// and anything still unset falls back to the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the Region A orders CSV.
    pub region_a_path: PathBuf,
    /// Path to the Region B orders CSV.
    pub region_b_path: PathBuf,
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// When true, non-numeric cells in numeric columns are coerced to 0
    /// instead of aborting the run.
    pub coerce_invalid_numeric: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region_a_path: PathBuf::from("order_region_a.csv"),
            region_b_path: PathBuf::from("order_region_b.csv"),
            db_path: PathBuf::from("sales_data.db"),
            coerce_invalid_numeric: false,
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            EtlError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Loads the config file when it exists, otherwise starts from defaults.
    /// An explicitly requested file that cannot be read is still an error.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new("config.toml");
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_conventional_paths() {
        let config = Config::default();
        assert_eq!(config.region_a_path, PathBuf::from("order_region_a.csv"));
        assert_eq!(config.region_b_path, PathBuf::from("order_region_b.csv"));
        assert_eq!(config.db_path, PathBuf::from("sales_data.db"));
        assert!(!config.coerce_invalid_numeric);
    }

    #[test]
    fn partial_file_keeps_defaults_for_unset_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "db_path = \"/tmp/out.db\"").unwrap();
        writeln!(file, "coerce_invalid_numeric = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/out.db"));
        assert!(config.coerce_invalid_numeric);
        assert_eq!(config.region_a_path, PathBuf::from("order_region_a.csv"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Config::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(EtlError::Config(_))));
    }
}
