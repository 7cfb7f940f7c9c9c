use serde::Serialize;

/// A single named text attribute of a node
///
/// `value` is `None` when the input row ended before this field and
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub property_type: String,
    pub value: Option<String>,
}

impl Property {
    pub fn new(property_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_type: property_type.into(),
            value: Some(value.into()),
        }
    }

    pub fn missing(property_type: impl Into<String>) -> Self {
        Self {
            property_type: property_type.into(),
            value: None,
        }
    }
}

/// One output node, derived from exactly one input record
///
/// Field declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub external_id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub is_identity: bool,
    pub properties: Vec<Property>,
}

/// The document handed to the graph platform importer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeDocument {
    pub nodes: Vec<Node>,
}

impl NodeDocument {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_serializes_with_platform_keys() {
        let node = Node {
            external_id: "E1".to_string(),
            node_type: "Employee".to_string(),
            is_identity: true,
            properties: vec![Property::new("name", "Alice")],
        };

        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"external_id":"E1","type":"Employee","is_identity":true,"properties":[{"type":"name","value":"Alice"}]}"#
        );
    }

    #[test]
    fn test_missing_property_value_serializes_as_null() {
        let property = Property::missing("dept");
        assert_eq!(serde_json::to_string(&property).unwrap(), r#"{"type":"dept","value":null}"#);
    }

    #[test]
    fn test_empty_document() {
        let doc = NodeDocument::default();
        assert!(doc.is_empty());
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"nodes":[]}"#);
    }
}
