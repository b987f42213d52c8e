//! Engine configuration.
//!
//! Loaded from TOML, YAML or JSON. Every field has a default, so a file only
//! needs the values it changes:
//!
//! ```toml
//! batch_size = 512
//! display_rows = 20
//!
//! [csv]
//! delimiter = ";"
//! has_header = true
//!
//! [types]
//! id = "int64"
//! price = "float64"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::ColumnType;
use crate::dataframe::DEFAULT_DISPLAY_ROWS;
use crate::error::{Error, Result};

/// Rows per batch handed out by `TableReader` unless configured otherwise
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Text ingestion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field separator; must be a single ASCII character
    pub delimiter: char,
    pub has_header: bool,
    /// Trim whitespace around fields and headers
    pub trim: bool,
    /// Accept records with a differing number of fields
    pub flexible: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            trim: false,
            flexible: false,
        }
    }
}

impl CsvOptions {
    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(Error::Config(format!(
                "delimiter {:?} is not an ASCII character",
                self.delimiter
            )))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub csv: CsvOptions,
    pub batch_size: usize,
    pub display_rows: usize,
    /// Column name to type name, applied at ingestion
    pub types: HashMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            csv: CsvOptions::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            display_rows: DEFAULT_DISPLAY_ROWS,
            types: HashMap::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a file, choosing the format from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        log::debug!("loading engine config from {}", path.display());
        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(Error::Config(format!(
                "unrecognized config extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }

    /// Checks the values a deserializer cannot check
    pub fn validate(&self) -> Result<()> {
        self.csv.delimiter_byte()?;
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be positive".to_string()));
        }
        self.column_types()?;
        Ok(())
    }

    /// The `types` map with every type name resolved
    pub fn column_types(&self) -> Result<HashMap<String, ColumnType>> {
        self.types
            .iter()
            .map(|(name, ty)| -> Result<(String, ColumnType)> {
                Ok((name.clone(), ty.parse::<ColumnType>()?))
            })
            .collect()
    }
}
