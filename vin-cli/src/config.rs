//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vin_decoder::DecoderConfig;

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub decoder: DecoderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// VINs listed directly in the config
    #[serde(default)]
    pub vins: Vec<String>,
    /// Files with one VIN per line
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Exit successfully even if some VINs fail to decode
    #[serde(default)]
    pub skip_invalid: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

/// Read VINs from a file, one per line
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn read_vin_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read VIN file: {:?}", path))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            vins = ["1HGCM82633A004352"]
            files = ["fleet.txt"]

            [decoder]
            reference_year = 2020

            [output]
            format = "json"
            skip_invalid = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.vins.len(), 1);
        assert_eq!(config.input.files.len(), 1);
        assert_eq!(config.decoder.reference_year, Some(2020));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.skip_invalid);
    }

    #[test]
    fn test_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.input.vins.is_empty());
        assert_eq!(config.decoder.reference_year, None);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(toml::from_str::<AppConfig>("[output]\nformat = \"html\"").is_err());
    }
}
