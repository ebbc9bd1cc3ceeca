//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ToolConfig;
use std::path::Path;

/// File name looked up in a directory by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "cxrt.toml";

/// Loads `<dir>/cxrt.toml`, falling back to defaults when the file is absent.
pub fn load_config(dir: &Path) -> Result<ToolConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(ToolConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads and validates a configuration from an explicit path.
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_config_file(path: &Path) -> Result<ToolConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `cxrt.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ToolConfig) -> Result<(), ConfigError> {
    if config.parallel.chunk_size == 0 {
        return Err(ConfigError::ValidationError(
            "parallel.chunk_size must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Algorithm, OutputFormat, DEFAULT_CHUNK_SIZE};

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.hash.algorithm, Algorithm::Poly);
        assert_eq!(config.parallel.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[hash]
algorithm = "fnv"
format = "decimal"

[parallel]
chunk_size = 4096
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.hash.algorithm, Algorithm::Fnv);
        assert_eq!(config.hash.format, OutputFormat::Decimal);
        assert_eq!(config.parallel.chunk_size, 4096);
    }

    #[test]
    fn zero_chunk_size_errors() {
        let err = load_config_from_str("[parallel]\nchunk_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn unknown_section_errors() {
        let err = load_config_from_str("[cache]\nsize = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_file_in_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.hash.format, OutputFormat::Hex);
    }

    #[test]
    fn loads_file_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[hash]\nformat = \"json\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.hash.format, OutputFormat::Json);
    }

    #[test]
    fn explicit_missing_file_errors() {
        let err = load_config_file(Path::new("/nonexistent/cxrt.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
