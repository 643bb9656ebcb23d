use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use feedback_engine::FormConfig;
use thiserror::Error;

pub(crate) const CONFIG_FILENAME: &str = "feedback_form.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Reads a RON config. A missing file means defaults; fields left out of the
/// file keep their defaults.
pub(crate) fn try_load_config(path: &Path) -> Result<FormConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(FormConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_engine::{LogDestination, DEFAULT_CONFIRMATION_DELAY_MS};
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = try_load_config(&temp.path().join(CONFIG_FILENAME)).unwrap();

        assert_eq!(config, FormConfig::default());
        assert_eq!(config.confirmation_delay_ms, DEFAULT_CONFIRMATION_DELAY_MS);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(confirmation_delay_ms: 250)").unwrap();

        let config = try_load_config(&path).unwrap();
        assert_eq!(config.confirmation_delay_ms, 250);
        assert_eq!(config.log_destination, LogDestination::File);
    }

    #[test]
    fn full_file_is_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "(confirmation_delay_ms: 10, log_destination: Both)",
        )
        .unwrap();

        let config = try_load_config(&path).unwrap();
        assert_eq!(config.confirmation_delay_ms, 10);
        assert_eq!(config.log_destination, LogDestination::Both);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(confirmation_delay_ms: \"soon\")").unwrap();

        let err = try_load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn directory_path_is_a_read_error() {
        let temp = TempDir::new().unwrap();

        let err = try_load_config(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
