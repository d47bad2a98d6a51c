use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Structural category of a document element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentCategory {
    Document,
    Section,
    Paragraph,
    Sentence,
    List,
    ListItem,
}

impl DocumentCategory {
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "document" => Some(DocumentCategory::Document),
            "section" => Some(DocumentCategory::Section),
            "paragraph" => Some(DocumentCategory::Paragraph),
            "sentence" => Some(DocumentCategory::Sentence),
            "list" => Some(DocumentCategory::List),
            "list_item" => Some(DocumentCategory::ListItem),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentCategory::Document => "DOCUMENT",
            DocumentCategory::Section => "SECTION",
            DocumentCategory::Paragraph => "PARAGRAPH",
            DocumentCategory::Sentence => "SENTENCE",
            DocumentCategory::List => "LIST",
            DocumentCategory::ListItem => "LIST_ITEM",
        };
        write!(f, "{}", name)
    }
}

/// Kind of an uncategorized grouping. Both kinds format the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Coordination,
    List,
}

/// Already-final text. Realising one returns it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextLeaf(String);

impl TextLeaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TextLeaf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TextLeaf {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for TextLeaf {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Ordered children of a node.
///
/// Dropping is done with a work list instead of per-level recursion, so a
/// very deep tree can be released without exhausting the stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Children(Vec<Node>);

impl Children {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    fn take_all(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.0)
    }
}

impl Deref for Children {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.0
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl FromIterator<Node> for Children {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Drop for Children {
    fn drop(&mut self) {
        let mut pending = self.take_all();
        while let Some(mut node) = pending.pop() {
            if let Some(children) = node.children_mut() {
                pending.append(&mut children.take_all());
            }
        }
    }
}

/// A categorized element: document, section, paragraph, sentence, list or list item
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentElement {
    pub category: DocumentCategory,
    pub title: Option<String>,
    pub realisation: Option<String>,
    pub children: Children,
}

impl DocumentElement {
    pub fn new(category: DocumentCategory) -> Self {
        Self {
            category,
            title: None,
            realisation: None,
            children: Children::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_realisation(mut self, text: impl Into<String>) -> Self {
        self.realisation = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I: IntoIterator<Item = Node>>(mut self, children: I) -> Self {
        for child in children {
            self.children.push(child);
        }
        self
    }
}

/// A coordinated phrase or plain list grouping with no document category
#[derive(Debug, Clone, PartialEq)]
pub struct GroupElement {
    pub kind: GroupKind,
    pub children: Children,
}

/// A node of a kind the formatter does not recognise
#[derive(Debug, Clone, PartialEq)]
pub struct OtherElement {
    pub kind: String,
    pub children: Children,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextLeaf),
    Document(DocumentElement),
    Group(GroupElement),
    Other(OtherElement),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextLeaf::new(text))
    }

    pub fn document<I: IntoIterator<Item = Node>>(title: Option<&str>, children: I) -> Self {
        Self::titled(DocumentCategory::Document, title, children)
    }

    pub fn section<I: IntoIterator<Item = Node>>(title: Option<&str>, children: I) -> Self {
        Self::titled(DocumentCategory::Section, title, children)
    }

    pub fn list<I: IntoIterator<Item = Node>>(title: Option<&str>, children: I) -> Self {
        Self::titled(DocumentCategory::List, title, children)
    }

    pub fn paragraph<I: IntoIterator<Item = Node>>(children: I) -> Self {
        Node::Document(DocumentElement::new(DocumentCategory::Paragraph).with_children(children))
    }

    pub fn sentence(text: impl Into<String>) -> Self {
        Node::Document(DocumentElement::new(DocumentCategory::Sentence).with_realisation(text))
    }

    pub fn list_item<I: IntoIterator<Item = Node>>(children: I) -> Self {
        Node::Document(DocumentElement::new(DocumentCategory::ListItem).with_children(children))
    }

    pub fn coordination<I: IntoIterator<Item = Node>>(children: I) -> Self {
        Node::Group(GroupElement {
            kind: GroupKind::Coordination,
            children: children.into_iter().collect(),
        })
    }

    pub fn group<I: IntoIterator<Item = Node>>(children: I) -> Self {
        Node::Group(GroupElement {
            kind: GroupKind::List,
            children: children.into_iter().collect(),
        })
    }

    fn titled<I: IntoIterator<Item = Node>>(
        category: DocumentCategory,
        title: Option<&str>,
        children: I,
    ) -> Self {
        let mut element = DocumentElement::new(category).with_children(children);
        element.title = title.map(str::to_string);
        Node::Document(element)
    }

    pub fn category(&self) -> Option<DocumentCategory> {
        match self {
            Node::Document(element) => Some(element.category),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Node::Document(element) => element.title.as_deref(),
            _ => None,
        }
    }

    /// Text attached directly to this node, as opposed to text reached through its children
    pub fn realisation(&self) -> Option<&str> {
        match self {
            Node::Text(leaf) => Some(leaf.text()),
            Node::Document(element) => element.realisation.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Document(element) => &element.children,
            Node::Group(group) => &group.children,
            Node::Other(other) => &other.children,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Children> {
        match self {
            Node::Text(_) => None,
            Node::Document(element) => Some(&mut element.children),
            Node::Group(group) => Some(&mut group.children),
            Node::Other(other) => Some(&mut other.children),
        }
    }
}

impl From<TextLeaf> for Node {
    fn from(leaf: TextLeaf) -> Self {
        Node::Text(leaf)
    }
}

/// One node as it appears in JSON input
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

/// Input read from JSON: one root or a batch of roots
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedInput {
    Single(Option<Node>),
    Batch(Vec<Option<Node>>),
}
