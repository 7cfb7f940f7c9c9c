use thiserror::Error;
use crate::{
    config::ConversionConfig,
    node::{Node, NodeDocument, Property},
    record::Record,
};

/// Maps input records onto graph nodes keyed by one designated field
#[derive(Debug, Clone)]
pub struct RecordTransformer {
    identifier_field: String,
    type_label: String,
    is_identity: bool,
}

/// Errors that can occur during transformation
#[derive(Debug, Error)]
pub enum TransformationError {
    #[error("Identifier field '{field}' missing from record {row}")]
    MissingIdentifierField { field: String, row: usize },
}

impl RecordTransformer {
    pub fn new(
        identifier_field: impl Into<String>,
        type_label: impl Into<String>,
        is_identity: bool,
    ) -> Self {
        Self {
            identifier_field: identifier_field.into(),
            type_label: type_label.into(),
            is_identity,
        }
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        Self::new(
            config.identifier_field.clone(),
            config.type_label.clone(),
            config.is_identity,
        )
    }

    /// Transform every record, in order, into a node document.
    ///
    /// The first record lacking a value for the identifier field aborts the
    /// whole run; no partial document is returned.
    pub fn transform<'a, I>(&self, records: I) -> Result<NodeDocument, TransformationError>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut nodes = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            nodes.push(self.transform_record(record, index + 1)?);
        }

        tracing::info!(
            nodes = nodes.len(),
            node_type = %self.type_label,
            "transformed records into nodes"
        );
        Ok(NodeDocument::new(nodes))
    }

    /// Transform a single record; `row` is the 1-based data row used in errors
    pub fn transform_record(&self, record: &Record, row: usize) -> Result<Node, TransformationError> {
        let external_id = record
            .get(&self.identifier_field)
            .and_then(Option::as_ref)
            .ok_or_else(|| TransformationError::MissingIdentifierField {
                field: self.identifier_field.clone(),
                row,
            })?;

        if external_id.is_empty() {
            tracing::warn!(row, field = %self.identifier_field, "empty external id");
        }

        let properties = record
            .iter()
            .filter(|(name, _)| **name != self.identifier_field)
            .map(|(name, value)| match value {
                Some(value) => Property::new(name.as_str(), value.as_str()),
                None => Property::missing(name.as_str()),
            })
            .collect();

        tracing::debug!(row, external_id = %external_id, "built node");

        Ok(Node {
            external_id: external_id.clone(),
            node_type: self.type_label.clone(),
            is_identity: self.is_identity,
            properties,
        })
    }
}
