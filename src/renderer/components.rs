use crate::parser::*;
use tracing::trace;

/// How realised children are joined inside their parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSpacing {
    /// Appended back to back
    Adjacent,
    /// Separator between consecutive children, nothing after the last
    Between(&'static str),
    /// Separator after every child, the last one included
    After(&'static str),
}

/// Formatting rule for a node whose text comes from its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'a> {
    /// Written first, followed by a newline
    pub title: Option<&'a str>,
    pub prefix: &'static str,
    pub spacing: ChildSpacing,
    pub terminator: &'static str,
}

/// What a node contributes before any child is visited
#[derive(Debug)]
pub enum Opened<'a> {
    /// Final text, no children to visit
    Text(&'a str),
    /// Children must be realised and combined under this layout
    Container(Frame<'a>),
}

/// Pick the formatting rule for a single node
pub fn open(node: &Node) -> Opened<'_> {
    match node {
        Node::Text(leaf) => Opened::Text(leaf.text()),
        Node::Document(element) => open_element(element),
        Node::Group(group) => Opened::Container(Frame::new(
            Layout {
                title: None,
                prefix: "",
                spacing: ChildSpacing::After(" "),
                terminator: "",
            },
            &group.children,
        )),
        Node::Other(other) => {
            trace!(kind = %other.kind, "no formatting rule; realising as empty text");
            Opened::Text("")
        }
    }
}

fn open_element(element: &DocumentElement) -> Opened<'_> {
    let layout = match element.category {
        DocumentCategory::Document | DocumentCategory::Section | DocumentCategory::List => Layout {
            title: element.title.as_deref(),
            prefix: "",
            spacing: ChildSpacing::Adjacent,
            terminator: "",
        },
        DocumentCategory::Paragraph => Layout {
            title: None,
            prefix: "",
            spacing: ChildSpacing::Between(" "),
            terminator: "\n\n",
        },
        DocumentCategory::Sentence => {
            return Opened::Text(element.realisation.as_deref().unwrap_or(""));
        }
        DocumentCategory::ListItem => Layout {
            title: None,
            prefix: " * ",
            spacing: ChildSpacing::Between(" "),
            terminator: "\n",
        },
    };

    Opened::Container(Frame::new(layout, &element.children))
}

/// One container being realised: its own accumulator and a cursor over its children
#[derive(Debug)]
pub struct Frame<'a> {
    layout: Layout<'a>,
    children: &'a [Node],
    next: usize,
    output: String,
}

impl<'a> Frame<'a> {
    fn new(layout: Layout<'a>, children: &'a [Node]) -> Self {
        let mut output = String::new();
        if let Some(title) = layout.title {
            output.push_str(title);
            output.push('\n');
        }
        output.push_str(layout.prefix);
        Self {
            layout,
            children,
            next: 0,
            output,
        }
    }

    /// Move to the next child, writing any separator that precedes it
    pub fn next_child(&mut self) -> Option<&'a Node> {
        let child = self.children.get(self.next)?;
        if let ChildSpacing::Between(separator) = self.layout.spacing {
            if self.next > 0 {
                self.output.push_str(separator);
            }
        }
        self.next += 1;
        Some(child)
    }

    /// Append the realised text of the child last returned by `next_child`
    pub fn push_child(&mut self, text: &str) {
        self.output.push_str(text);
        if let ChildSpacing::After(separator) = self.layout.spacing {
            self.output.push_str(separator);
        }
    }

    pub fn finish(mut self) -> String {
        self.output.push_str(self.layout.terminator);
        self.output
    }
}
