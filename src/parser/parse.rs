//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent parser with one token of lookahead:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: statement dispatch, control flow, blocks, assignments
//! - `declarations`: variable declarations, `main`, `#include`, `using`
//! - `expressions`: expression / term / factor and call arguments
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state. The mutable state is the
//! current token index and the nesting depth. The index only moves forward,
//! except for the single retreat used after `int` to tell `int main()` from a
//! declaration. Statements and parenthesized groups go through
//! `Parser::nested`, which fails with [`ParseError::TooDeep`] instead of
//! recursing past [`MAX_NESTING_DEPTH`].

use crate::parser::comments::strip_comments;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::parser::tree::ParseTreeNode;
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parse error at token {position}: expected {expected}, found {found}")]
    Unexpected {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("Parse error: expected {expected}, found end of input")]
    UnexpectedEnd { expected: String },

    #[error("Parse error at token {position}: unexpected tokens at the end, starting with {found}")]
    TrailingTokens { found: String, position: usize },

    #[error("Parse error at token {position}: nesting exceeds {limit} levels")]
    TooDeep { limit: usize, position: usize },
}

/// Deepest combined nesting of statements and parenthesized expressions.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive descent parser over a classified token sequence
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Statements and parenthesized groups currently open
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Strip comments from raw source, tokenize it, and build a parser.
    pub fn from_source(source: &str) -> Self {
        let cleaned = strip_comments(source);
        Self::new(Lexer::new().tokenize(&cleaned))
    }

    /// Parse the entire program: statements until the input is exhausted.
    pub fn parse_program(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut root = ParseTreeNode::root();

        while !self.is_at_end() {
            let start = self.position;
            root.push(self.parse_statement()?);
            if self.position == start {
                // A rule claimed a statement without consuming anything
                break;
            }
        }

        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingTokens {
                found: token.to_string(),
                position: self.position,
            });
        }

        log::debug!(
            "parsed {} top-level statements from {} tokens",
            root.children.len(),
            self.tokens.len()
        );
        Ok(root)
    }

    // ===== Helper methods =====

    /// Run `parse` one nesting level deeper. Fails instead of recursing past
    /// [`MAX_NESTING_DEPTH`].
    pub(crate) fn nested<R>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<R, ParseError>,
    ) -> Result<R, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                position: self.position,
            });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Step back one token. Only used by the `int` dispatch.
    pub(crate) fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub(crate) fn check(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is_some_and(|token| token.is(kind, text))
    }

    pub(crate) fn check_symbol(&self, text: &str) -> bool {
        self.check(TokenKind::Symbol, text)
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind() == kind)
    }

    /// Build an error describing what was expected at the current position.
    pub(crate) fn error(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        match self.peek() {
            Some(token) => ParseError::Unexpected {
                expected,
                found: token.to_string(),
                position: self.position,
            },
            None => ParseError::UnexpectedEnd { expected },
        }
    }

    /// Consume the current token, whatever it is, as a terminal node.
    pub(crate) fn bump(&mut self, expected: &str) -> Result<ParseTreeNode, ParseError> {
        match self.advance() {
            Some(token) => Ok(ParseTreeNode::terminal(token.text())),
            None => Err(ParseError::UnexpectedEnd {
                expected: expected.to_string(),
            }),
        }
    }

    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        text: &str,
        ctx: &str,
    ) -> Result<ParseTreeNode, ParseError> {
        if self.check(kind, text) {
            self.bump(text)
        } else {
            Err(self.error(format!("'{text}' {ctx}")))
        }
    }

    pub(crate) fn expect_symbol(
        &mut self,
        text: &str,
        ctx: &str,
    ) -> Result<ParseTreeNode, ParseError> {
        self.expect(TokenKind::Symbol, text, ctx)
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<ParseTreeNode, ParseError> {
        self.expect_symbol(";", ctx)
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<ParseTreeNode, ParseError> {
        if self.check_kind(TokenKind::Identifier) {
            self.bump("identifier")
        } else {
            Err(self.error(format!("identifier {ctx}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tree::NodeKind;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    #[test]
    fn test_parse_hand_built_tokens() {
        let tokens = vec![
            tok(TokenKind::ReservedWord, "int"),
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Symbol, ";"),
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Symbol, "="),
            tok(TokenKind::Number, "3"),
            tok(TokenKind::Symbol, "+"),
            tok(TokenKind::Number, "4"),
            tok(TokenKind::Symbol, ";"),
        ];
        let mut parser = Parser::new(tokens);
        let tree = parser.parse_program().unwrap();

        assert_eq!(tree.kind, NodeKind::Root);
        assert_eq!(tree.children.len(), 2);
        assert!(tree.children.iter().all(|c| c.kind == NodeKind::Statement));
    }

    #[test]
    fn test_empty_program() {
        let tree = Parser::new(Vec::new()).parse_program().unwrap();
        assert!(tree.children.is_empty());
    }

    #[test]
    fn test_missing_semicolon_is_fatal() {
        let mut parser = Parser::from_source("int x; x = 3 + 4");
        let err = parser.parse_program().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEnd {
                expected: "';' after assignment".to_string()
            }
        );
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |levels: usize| {
            format!("x = {}a{};", "( ".repeat(levels), " )".repeat(levels))
        };

        // Each group opens one level on top of the assignment statement
        assert!(Parser::from_source(&nested(MAX_NESTING_DEPTH - 1))
            .parse_program()
            .is_ok());

        let err = Parser::from_source(&nested(10_000)).parse_program().unwrap_err();
        assert_eq!(
            err,
            ParseError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                position: 2 + MAX_NESTING_DEPTH,
            }
        );
    }

    #[test]
    fn test_error_message_names_token() {
        let mut parser = Parser::from_source("int = 5;");
        let err = parser.parse_program().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error at token 1: expected identifier after type, found SYMBOL (=)"
        );
    }

    #[test]
    fn test_retreat_stays_at_zero() {
        let mut parser = Parser::new(Vec::new());
        parser.retreat();
        assert_eq!(parser.position, 0);
    }
}
