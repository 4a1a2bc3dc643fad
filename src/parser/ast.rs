use serde::{Deserialize, Serialize};

/// A generic parse tree node.
///
/// Nodes carry a grammar *tag* (`"number"`, `"symbol"`, `"sexpr"`, `"qexpr"`,
/// `"char"` for bracket punctuation, or `">"` for the root wrapper), the
/// literal *contents* for leaves, and an ordered list of children for
/// branches. Bracket tokens appear as ordinary `"char"` children; consumers
/// are expected to skip them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseNode {
    /// Grammar category of this node
    pub tag: String,
    /// Literal source text (empty for branch nodes)
    pub contents: String,
    /// Ordered child nodes (empty for leaves)
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Creates a leaf node with literal contents and no children
    pub fn leaf(tag: &str, contents: impl Into<String>) -> Self {
        ParseNode {
            tag: tag.to_string(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Creates a branch node with children and no contents
    pub fn branch(tag: &str, children: Vec<ParseNode>) -> Self {
        ParseNode {
            tag: tag.to_string(),
            contents: String::new(),
            children,
        }
    }
}
