use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

/// Plain text formatter.
///
/// Adds titles to documents, sections and lists, separates paragraphs with
/// a blank line, bullets list items with `" * "` and joins coordinated
/// phrases with spaces. Sentence and literal text is taken as already final.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Flatten a tree into a string.
    ///
    /// The walk keeps its own stack of open containers, so tree depth is
    /// bounded by memory rather than by the call stack.
    pub fn realise_text(&self, root: &Node) -> String {
        let mut stack = match open(root) {
            Opened::Text(text) => return text.to_string(),
            Opened::Container(frame) => vec![frame],
        };

        while let Some(frame) = stack.last_mut() {
            match frame.next_child() {
                Some(child) => match open(child) {
                    Opened::Text(text) => frame.push_child(text),
                    Opened::Container(inner) => stack.push(inner),
                },
                None => {
                    let Some(done) = stack.pop() else { break };
                    let text = done.finish();
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(&text),
                        None => return text,
                    }
                }
            }
        }

        String::new()
    }
}

impl Realise for TextFormatter {
    fn realise(&self, node: Option<&Node>) -> TextLeaf {
        match node {
            Some(node) => TextLeaf::new(self.realise_text(node)),
            None => TextLeaf::empty(),
        }
    }
}
