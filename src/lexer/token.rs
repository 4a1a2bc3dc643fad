use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where the token appears (1-indexed)
    pub line: usize,
    /// Column number where the token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

/// All possible token types in lispel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// `(` — opens an S-expression
    LeftParen,
    /// `)` — closes an S-expression
    RightParen,
    /// `{` — opens a Q-expression
    LeftBrace,
    /// `}` — closes a Q-expression
    RightBrace,
    /// Integer literal; the digits live in the token's lexeme
    Number,
    /// Symbol name (operators included); the name lives in the lexeme
    Symbol,
    /// End of input marker
    Eof,
}
