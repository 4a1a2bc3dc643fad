use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for lispel source text
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    ///
    /// The returned stream always ends with an [`TokenKind::Eof`] token.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            String::new(),
            self.line,
            self.column,
        ));

        Ok(self.tokens.clone())
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
                self.column = 1;
            }

            // LISP line comments
            ';' => self.skip_line_comment(),

            // Expression delimiters
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),

            // `-` starts a negative number only when digits follow;
            // otherwise it is the subtraction symbol
            '-' if self.peek().is_ascii_digit() => self.scan_number(),
            c if c.is_ascii_digit() => self.scan_number(),

            c if is_symbol_char(c) => self.scan_symbol(),

            other => {
                return Err(Error::SyntaxError {
                    line: self.line,
                    col: self.column.saturating_sub(1),
                    message: format!("Unexpected character '{}'", other),
                })
            }
        }

        Ok(())
    }

    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        self.add_token(TokenKind::Number);
    }

    fn scan_symbol(&mut self) {
        while is_symbol_char(self.peek()) {
            self.advance();
        }
        self.add_token(TokenKind::Symbol);
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let width = self.current - self.start;
        self.tokens.push(Token::new(
            kind,
            lexeme,
            self.line,
            self.column - width,
        ));
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Symbol characters: alphanumerics plus the operator set
fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '*' | '/' | '\\' | '=' | '<' | '>' | '!' | '&')
}
