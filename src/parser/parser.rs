//! Parser state and entry point.
//!
//! The `Parser` struct owns the token stream and a cursor into it. The
//! productions in `expr` move the cursor forward; nothing moves it back.

use crate::{
    ast::ast::Node,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::expr::parse_expression;

/// Deepest tree the parser will build. Groups, unary minus, calls, the
/// right side of `^` and each link of a `+ -` or `* /` chain count one level.
pub const MAX_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Levels entered and not yet left
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance positioned at the first token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing, or `None` once the
    /// stream is exhausted.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token. An exhausted stream reads as
    /// `EOF` so a missing terminator behaves like a present one.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token()
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the one just consumed.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind != TokenKind::EOF => {
                self.pos += 1;
                Ok(token.clone())
            }
            _ => Err(ParseError::UnexpectedEnd {
                position: self.get_position(),
            }),
        }
    }

    /// Expects a token of the specified kind and consumes it.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected());
        }

        self.advance()
    }

    /// Returns the current operator if it is one of `operators`.
    pub fn current_operator(&self, operators: &[&str]) -> Option<String> {
        self.current_token()
            .filter(|token| operators.iter().any(|operator| token.is_operator(operator)))
            .map(|token| token.value.clone())
    }

    /// Goes one level deeper, failing at the current token once the tree
    /// would exceed `MAX_DEPTH`.
    pub fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_DEPTH,
                position: self.get_position(),
            });
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Runs `production` one level deeper.
    pub fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.enter()?;
        let result = production(self);
        self.leave(1);

        result
    }

    /// The error for finding the current token where something else was
    /// required.
    pub fn unexpected(&self) -> ParseError {
        match self.current_token() {
            Some(token) if token.kind != TokenKind::EOF => ParseError::UnexpectedToken {
                found: token.kind,
                lexeme: token.value.clone(),
                position: token.span.start,
            },
            _ => ParseError::UnexpectedEnd {
                position: self.get_position(),
            },
        }
    }

    /// Returns the source position of the current token, or the end of the
    /// last token once the stream is exhausted.
    pub fn get_position(&self) -> Position {
        match self.current_token() {
            Some(token) => token.span.start,
            None => self
                .tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or(Position(0)),
        }
    }
}

/// Parses a token stream into a single expression tree.
///
/// The whole stream must form one expression: anything left before `EOF`
/// is a `TrailingInput` error.
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens);
    let root = parse_expression(&mut parser)?;

    if let Some(token) = parser.current_token().filter(|token| token.kind != TokenKind::EOF) {
        return Err(ParseError::TrailingInput {
            found: token.kind,
            lexeme: token.value.clone(),
            position: token.span.start,
        });
    }

    Ok(root)
}
