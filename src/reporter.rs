use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{config::ConversionConfig, node::NodeDocument};

/// Reporter for summarizing a finished conversion run
pub struct ConversionReporter {
    output_format: ReportFormat,
}

/// Available output formats for conversion reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Console,
    Json,
}

/// Summary of one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub identifier_field: String,
    pub type_label: String,
    pub is_identity: bool,
    pub records_read: usize,
    pub nodes_written: usize,
    /// `None` when no records were read
    pub properties_per_node: Option<usize>,
}

impl ConversionReport {
    pub fn new(config: &ConversionConfig, records_read: usize, document: &NodeDocument) -> Self {
        Self {
            input_path: config.input_path.clone(),
            output_path: config.output_path.clone(),
            identifier_field: config.identifier_field.clone(),
            type_label: config.type_label.clone(),
            is_identity: config.is_identity,
            records_read,
            nodes_written: document.len(),
            properties_per_node: document.nodes().first().map(|n| n.properties.len()),
        }
    }
}

impl ConversionReporter {
    pub fn new() -> Self {
        Self {
            output_format: ReportFormat::Console,
        }
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Format the report according to the configured output format
    pub fn format_report(&self, report: &ConversionReport) -> Result<String, ReportError> {
        match self.output_format {
            ReportFormat::Console => Ok(self.format_console_report(report)),
            ReportFormat::Json => self.format_json_report(report),
        }
    }

    fn format_console_report(&self, report: &ConversionReport) -> String {
        let mut output = String::new();

        output.push_str("=== Conversion Complete ===\n");
        output.push_str(&format!("  Input file: {}\n", report.input_path.display()));
        output.push_str(&format!("  External id column: {}\n", report.identifier_field));
        output.push_str(&format!(
            "  Node type: {} (identity: {})\n",
            report.type_label, report.is_identity
        ));
        output.push_str(&format!("  Records read: {}\n", report.records_read));
        output.push_str(&format!("  Nodes written: {}\n", report.nodes_written));
        if let Some(count) = report.properties_per_node {
            output.push_str(&format!("  Properties per node: {}\n", count));
        }
        output.push_str(&format!("JSON file saved to {}\n", report.output_path.display()));

        output
    }

    fn format_json_report(&self, report: &ConversionReport) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for ConversionReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
