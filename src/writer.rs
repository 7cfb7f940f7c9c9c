use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::node::NodeDocument;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to serialize node document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pretty JSON with two-space indentation
pub fn render_document(document: &NodeDocument) -> Result<String, WriteError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Render the whole document first, then write it in a single call
pub fn write_document(path: &Path, document: &NodeDocument) -> Result<(), WriteError> {
    let rendered = render_document(document)?;

    fs::write(path, rendered.as_bytes()).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), nodes = document.len(), "wrote node document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, Property};

    #[test]
    fn test_render_document_two_space_indent() {
        let doc = NodeDocument::new(vec![Node {
            external_id: "E1".to_string(),
            node_type: "Employee".to_string(),
            is_identity: false,
            properties: vec![Property::new("name", "Zoë")],
        }]);

        let expected = r#"{
  "nodes": [
    {
      "external_id": "E1",
      "type": "Employee",
      "is_identity": false,
      "properties": [
        {
          "type": "name",
          "value": "Zoë"
        }
      ]
    }
  ]
}"#;
        assert_eq!(render_document(&doc).unwrap(), expected);
    }

    #[test]
    fn test_write_document_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_document(&path, &NodeDocument::default()).unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
        assert!(!path.exists());
    }
}
