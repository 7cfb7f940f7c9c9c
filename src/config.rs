use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::record::ReaderOptions;

pub const DEFAULT_TYPE_LABEL: &str = "Entity";
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// Everything a single conversion run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub input_path: PathBuf,
    pub identifier_field: String,
    pub type_label: String,
    pub is_identity: bool,
    pub output_path: PathBuf,
    pub delimiter: u8,
}

/// Optional YAML job file supplying defaults for the command-line options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    pub type_label: Option<String>,
    #[serde(default)]
    pub is_identity: bool,
    pub output_path: Option<PathBuf>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read job file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse job file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid delimiter '{0}': expected a single ASCII character")]
    InvalidDelimiter(String),
}

impl ConversionConfig {
    pub fn new(input_path: impl Into<PathBuf>, identifier_field: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            identifier_field: identifier_field.into(),
            type_label: DEFAULT_TYPE_LABEL.to_string(),
            is_identity: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: b',',
        }
    }

    pub fn with_type_label(mut self, type_label: impl Into<String>) -> Self {
        self.type_label = type_label.into();
        self
    }

    pub fn with_identity(mut self, is_identity: bool) -> Self {
        self.is_identity = is_identity;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Layer job file values over the built-in defaults
    pub fn apply_job_file(mut self, job: &JobFile) -> Result<Self, ConfigError> {
        if let Some(ref label) = job.type_label {
            self.type_label = label.clone();
        }
        if job.is_identity {
            self.is_identity = true;
        }
        if let Some(ref path) = job.output_path {
            self.output_path = path.clone();
        }
        if let Some(ref delimiter) = job.delimiter {
            self.delimiter = parse_delimiter(delimiter)?;
        }
        Ok(self)
    }

    pub fn reader_options(&self) -> ReaderOptions {
        ReaderOptions::default().with_delimiter(self.delimiter)
    }
}

impl JobFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }
}

/// Accepts a single ASCII character, or the escape `\t` for tab
pub fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
    if value == "\\t" {
        return Ok(b'\t');
    }
    let bytes = value.as_bytes();
    if bytes.len() == 1 && bytes[0].is_ascii() {
        Ok(bytes[0])
    } else {
        Err(ConfigError::InvalidDelimiter(value.to_string()))
    }
}
