use super::ast::ParseNode;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser from tokens to a generic parse tree
///
/// Expects a token stream produced by [`Scanner`](crate::lexer::Scanner),
/// i.e. one that ends with an [`TokenKind::Eof`] token.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Creates a new parser over a token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parses the whole input into a root node wrapping one child per
    /// top-level expression
    pub fn parse(&mut self) -> Result<ParseNode> {
        let mut children = Vec::new();

        while !self.is_at_end() {
            children.push(self.parse_expr()?);
        }

        Ok(ParseNode::branch(">", children))
    }

    /// Parse a single expression: a number, a symbol, or a bracketed list
    fn parse_expr(&mut self) -> Result<ParseNode> {
        match self.peek().kind {
            TokenKind::Number => {
                let token = self.advance();
                Ok(ParseNode::leaf("number", token.lexeme))
            }
            TokenKind::Symbol => {
                let token = self.advance();
                Ok(ParseNode::leaf("symbol", token.lexeme))
            }
            TokenKind::LeftParen => self.parse_list(TokenKind::RightParen, "sexpr"),
            TokenKind::LeftBrace => self.parse_list(TokenKind::RightBrace, "qexpr"),
            TokenKind::Eof => Err(Error::UnexpectedEof),
            _ => Err(Error::UnexpectedToken {
                expected: "an expression".to_string(),
                got: Self::describe(self.peek()),
            }),
        }
    }

    /// Parse a bracketed list; both brackets land in the tree as `"char"`
    /// children so the node mirrors the source exactly
    fn parse_list(&mut self, close: TokenKind, tag: &str) -> Result<ParseNode> {
        let open = self.advance();
        let mut children = vec![ParseNode::leaf("char", open.lexeme)];

        loop {
            if self.is_at_end() {
                return Err(Error::UnexpectedEof);
            }
            if self.peek().kind == close {
                let token = self.advance();
                children.push(ParseNode::leaf("char", token.lexeme));
                break;
            }
            children.push(self.parse_expr()?);
        }

        Ok(ParseNode::branch(tag, children))
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if token.kind != TokenKind::Eof {
            self.current += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn describe(token: &Token) -> String {
        match token.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", token.lexeme),
        }
    }
}
