//! JSON file helpers for ~/.mastermind/.

use crate::error::ConfigError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.mastermind/ directory path. The directory is not created.
pub fn mastermind_dir() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home_dir.join(".mastermind"))
}

/// Get the full path for a file in ~/.mastermind/.
pub fn data_path(filename: &str) -> Result<PathBuf, ConfigError> {
    Ok(mastermind_dir()?.join(filename))
}

/// Load a JSON file. Returns `Ok(None)` if the file does not exist.
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    Ok(Some(serde_json::from_str(&json)?))
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("mastermind-persistence-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_data_path_format() {
        if let Ok(path) = data_path("config.json") {
            assert!(path.ends_with(".mastermind/config.json"));
        }
    }

    #[test]
    fn test_load_missing_returns_none() {
        let val: Option<Vec<String>> = load_json(&temp_path("nonexistent.json")).unwrap();
        assert!(val.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Option<Vec<String>> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(data));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_malformed_json() {
        let path = temp_path("malformed.json");
        save_json(&path, &"placeholder").unwrap();
        fs::write(&path, "{ not json").unwrap();

        let result: Result<Option<Vec<String>>, _> = load_json(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        fs::remove_file(path).ok();
    }
}
