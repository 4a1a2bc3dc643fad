//! # lispel — a tiny interactive LISP
//!
//! A tree-walking interpreter for a small expression language with two
//! expression kinds: evaluable **S-expressions** `(+ 1 2)` and quoted
//! **Q-expressions** `{+ 1 2}` whose contents are literal data. A single
//! flat global environment binds symbols to values, and a fixed library of
//! builtins covers arithmetic (`+ - * /`) and list manipulation
//! (`list head tail eval join`).
//!
//! ## Quick Start
//!
//! ```rust
//! use lispel::{Evaluator, Parser, Scanner, Value};
//!
//! # fn main() -> lispel::Result<()> {
//! let mut scanner = Scanner::new("(+ 1 (* 2 3))");
//! let tokens = scanner.scan_tokens()?;
//!
//! let mut parser = Parser::new(tokens);
//! let tree = parser.parse()?;
//!
//! let mut evaluator = Evaluator::new();
//! assert_eq!(evaluator.run(&tree), Value::Num(7));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source → Scanner → Tokens → Parser → ParseNode → read → Value → eval → Value
//! ```
//!
//! - [`Scanner`] — tokenizes source text
//! - [`Parser`] — builds a generic parse tree ([`ParseNode`])
//! - [`read`] — converts the parse tree into a [`Value`]
//! - [`eval`] / [`Evaluator`] — reduces a value against an [`Environment`]
//! - [`Builtin`] — the capability implemented by every native operation
//!
//! ## Error Handling
//!
//! Only the scanner and parser return Rust errors ([`Error`]). Everything
//! after that — unbound symbols, wrong argument types, division by zero —
//! is an ordinary error *value* that renders as `Error: <message>`:
//!
//! ```rust
//! use lispel::{Evaluator, Parser, Scanner};
//!
//! # fn main() -> lispel::Result<()> {
//! let mut scanner = Scanner::new("(/ 10 0)");
//! let tokens = scanner.scan_tokens()?;
//! let tree = Parser::new(tokens).parse()?;
//!
//! let result = Evaluator::new().run(&tree);
//! assert_eq!(result.to_string(), "Error: Division by zero!");
//! # Ok(())
//! # }
//! ```

/// Version of the lispel interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod builtins;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use builtins::Builtin;
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{ParseNode, Parser};
pub use runtime::{eval, read, Environment, Evaluator, Value};
