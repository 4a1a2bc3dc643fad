//! Lexical analysis for lispel
//!
//! Converts source text into a stream of tokens. The scanner keeps number
//! tokens as raw text; parsing the digits (and deciding what an out-of-range
//! literal means) is the tree reader's job, not the lexer's.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
