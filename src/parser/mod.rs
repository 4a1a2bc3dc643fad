//! lispel parser module
//!
//! Parses tokens into a generic parse tree. The tree deliberately stays
//! "dumb": every node is a tag, its literal text, and its children — bracket
//! punctuation included — so the runtime's tree reader owns all decisions
//! about what the text means.

mod ast;
mod sexpr_parser;

pub use ast::ParseNode;
pub use sexpr_parser::Parser;
