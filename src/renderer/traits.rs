use crate::parser::{Node, TextLeaf};

/// Output format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Realised text, written as-is
    #[default]
    Text,
    /// A JSON string, or an array of strings for batch input
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow::anyhow!("Unknown output format: {}", other)),
        }
    }
}

/// Core realisation trait: flattens a document tree into a literal text leaf.
///
/// Realisation is total. An absent node, or one the realiser does not
/// recognise, produces an empty leaf rather than an error.
pub trait Realise {
    fn realise(&self, node: Option<&Node>) -> TextLeaf;

    /// Realise each root independently, keeping order and length
    fn realise_all(&self, nodes: &[Option<Node>]) -> Vec<TextLeaf> {
        nodes.iter().map(|node| self.realise(node.as_ref())).collect()
    }
}
