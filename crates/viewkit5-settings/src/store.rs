//! Record persistence: config-directory paths and JSON/TOML file I/O.
//!
//! Records are plain serde types. The file format is chosen by extension,
//! `.json` or `.toml`, matching how the rest of the application stores its
//! configuration.

use crate::error::{SettingsError, SettingsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-folder view record file.
const VIEW_FILE: &str = "view.toml";

/// Name of the global default view record file.
const DEFAULT_VIEW_FILE: &str = "view_default.toml";

/// Platform configuration directory for the application.
pub fn config_dir() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("viewkit5"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })
}

/// Create the configuration directory if it does not exist.
pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Global default location of the view record.
pub fn default_view_path() -> SettingsResult<PathBuf> {
    Ok(config_dir()?.join(DEFAULT_VIEW_FILE))
}

/// Location of the view record inside a named folder.
pub fn view_path(folder: &Path) -> PathBuf {
    folder.join(VIEW_FILE)
}

/// Load a record from a JSON or TOML file.
pub fn load_record<T: DeserializeOwned>(path: &Path) -> SettingsResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SettingsError::LoadError(format!("cannot read {}: {}", path.display(), e))
    })?;

    let record = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&content)?
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)?
    } else {
        return Err(SettingsError::UnsupportedFormat(
            path.display().to_string(),
        ));
    };

    debug!(path = %path.display(), "loaded settings record");
    Ok(record)
}

/// Save a record to a JSON or TOML file, creating parent directories.
pub fn save_record<T: Serialize>(path: &Path, record: &T) -> SettingsResult<()> {
    let content = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::to_string_pretty(record)?
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        toml::to_string_pretty(record)?
    } else {
        return Err(SettingsError::UnsupportedFormat(
            path.display().to_string(),
        ));
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SettingsError::SaveError(format!("cannot create {}: {}", parent.display(), e))
        })?;
    }
    std::fs::write(path, content).map_err(|e| {
        SettingsError::SaveError(format!("cannot write {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), "saved settings record");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn sample() -> Sample {
        Sample {
            name: "front".to_string(),
            count: 3,
        }
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        save_record(&path, &sample()).unwrap();
        let loaded: Sample = load_record(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.toml");

        save_record(&path, &sample()).unwrap();
        let loaded: Sample = load_record(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result: SettingsResult<Sample> = load_record(&path);
        assert!(matches!(result, Err(SettingsError::LoadError(_))));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.yaml");

        let result = save_record(&path, &sample());
        assert!(matches!(result, Err(SettingsError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_view_path_appends_record_name() {
        let folder = Path::new("/data/views/front");
        assert_eq!(view_path(folder), folder.join("view.toml"));
    }
}
