//! Configuration file support.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File loading logic

mod error;
mod loading;
mod types;

pub use error::ConfigError;
pub use loading::PROJECT_CONFIG_FILES;
pub use types::Config;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.paths.is_empty());
        assert!(config.python.is_none());
        assert!(config.format.is_none());
        assert!(!config.sorted);
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".whatprovides.yaml");
        fs::write(
            &config_path,
            "paths:\n  - /opt/lib\npython: python3.12\nformat: json\nsorted: true\n",
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("/opt/lib")]);
        assert_eq!(config.python.as_deref(), Some("python3.12"));
        assert!(matches!(config.format, Some(OutputFormat::Json)));
        assert!(config.sorted);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".whatprovides.toml");
        fs::write(&config_path, "python = \"pypy3\"\ncolor = false\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.python.as_deref(), Some("pypy3"));
        assert_eq!(config.color, Some(false));
        assert!(config.paths.is_empty());
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".whatprovides.json");
        fs::write(&config_path, r#"{"format": "terminal", "paths": ["src"]}"#).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(matches!(config.format, Some(OutputFormat::Terminal)));
        assert_eq!(config.paths, vec![PathBuf::from("src")]);
    }

    #[test]
    fn test_from_file_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.ini");
        fs::write(&config_path, "paths = src").unwrap();

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_, ref ext) if ext == "ini"));
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(".whatprovides.yaml");
        fs::write(&config_path, "paths: [unclosed").unwrap();

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML config"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = Config::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_load_prefers_project_yaml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".whatprovides.yaml"), "python: from-yaml\n").unwrap();
        fs::write(dir.path().join(".whatprovides.toml"), "python = \"from-toml\"\n").unwrap();

        let config = Config::load(Some(dir.path()));
        assert_eq!(config.python.as_deref(), Some("from-yaml"));
    }

    #[test]
    fn test_load_skips_broken_project_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".whatprovides.yaml"), "paths: [unclosed").unwrap();
        fs::write(dir.path().join(".whatprovides.toml"), "sorted = true\n").unwrap();

        let config = Config::load(Some(dir.path()));
        assert!(config.sorted);
    }
}
