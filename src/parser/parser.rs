use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};
use crate::parser::types::*;

// Parser for converting raw JSON nodes to the typed document tree
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Read a JSON document: `null`, a single node object, or an array of nodes and nulls
    pub fn parse_str(&self, json: &str) -> Result<ParsedInput> {
        let value: Value =
            serde_json::from_str(json).context("Failed to parse JSON document tree")?;

        match value {
            Value::Null => Ok(ParsedInput::Single(None)),
            Value::Array(elements) => {
                debug!(count = elements.len(), "parsing batch input");
                let mut roots = Vec::with_capacity(elements.len());
                for (index, element) in elements.into_iter().enumerate() {
                    let root = self
                        .parse_root(element)
                        .with_context(|| format!("Invalid batch element at index {}", index))?;
                    roots.push(root);
                }
                Ok(ParsedInput::Batch(roots))
            }
            other => Ok(ParsedInput::Single(self.parse_root(other)?)),
        }
    }

    fn parse_root(&self, value: Value) -> Result<Option<Node>> {
        match value {
            Value::Null => Ok(None),
            Value::Object(_) => {
                let raw: RawNode =
                    serde_json::from_value(value).context("Malformed document node")?;
                Ok(Some(self.parse_node(&raw)?))
            }
            other => Err(anyhow::anyhow!(
                "Expected a node object or null, found {}",
                json_type_name(&other)
            )),
        }
    }

    pub fn parse_node(&self, raw: &RawNode) -> Result<Node> {
        let kind = normalize_kind(&raw.kind);

        if kind == "text" {
            let text = raw
                .text
                .clone()
                .ok_or_else(|| anyhow::anyhow!("Text node missing text"))?;
            if !raw.children.is_empty() {
                warn!("text node has {} children; they are ignored", raw.children.len());
            }
            return Ok(Node::text(text));
        }

        let children = self.parse_children(raw)?;

        if let Some(category) = DocumentCategory::from_kind(&kind) {
            return Ok(Node::Document(DocumentElement {
                category,
                title: raw.title.clone(),
                realisation: raw.text.clone(),
                children,
            }));
        }

        let group_kind = match kind.as_str() {
            "coordination" | "coordinated_phrase" => Some(GroupKind::Coordination),
            "group" | "list_element" => Some(GroupKind::List),
            _ => None,
        };

        match group_kind {
            Some(kind) => Ok(Node::Group(GroupElement { kind, children })),
            None => {
                warn!(kind = %raw.kind, "unrecognised node kind; it will render as empty text");
                Ok(Node::Other(OtherElement {
                    kind: raw.kind.clone(),
                    children,
                }))
            }
        }
    }

    fn parse_children(&self, raw: &RawNode) -> Result<Children> {
        let mut children = Children::new();
        for (index, child) in raw.children.iter().enumerate() {
            let node = self
                .parse_node(child)
                .with_context(|| format!("Invalid child {} of '{}' node", index, raw.kind))?;
            children.push(node);
        }
        Ok(children)
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_kind(kind: &str) -> String {
    kind.trim().to_ascii_lowercase().replace('-', "_")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
