//! Expression parsing implementation
//!
//! Expressions are the classic two-level arithmetic grammar. Each level is a
//! flat node holding its operands and operators in source order, so
//! `a + b - c` becomes one `expression` node with five children.
//!
//! ```text
//! expression    ::= term (("+" | "-") term)*
//! term          ::= factor (("*" | "/") factor)*
//! factor        ::= NUMBER | IDENTIFIER | STRING | "(" expression ")"
//! function_call ::= "(" (expression ("," expression)*)? ")"
//! ```

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::tree::{NodeKind, ParseTreeNode};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::Expression);
        node.push(self.parse_term()?);

        while self.check_symbol("+") || self.check_symbol("-") {
            node.push(self.bump("operator")?);
            node.push(self.parse_term()?);
        }

        Ok(node)
    }

    fn parse_term(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::Term);
        node.push(self.parse_factor()?);

        while self.check_symbol("*") || self.check_symbol("/") {
            node.push(self.bump("operator")?);
            node.push(self.parse_factor()?);
        }

        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::Factor);

        if self.check_kind(TokenKind::Number)
            || self.check_kind(TokenKind::Identifier)
            || self.check_kind(TokenKind::String)
        {
            node.push(self.bump("operand")?);
        } else if self.check_symbol("(") {
            node.push(self.bump("'('")?);
            node.push(self.nested(Parser::parse_expression)?);
            node.push(self.expect_symbol(")", "after expression")?);
        } else {
            return Err(self.error("number, identifier, string or '('"));
        }

        Ok(node)
    }

    /// Parse a parenthesized, comma separated argument list
    pub(crate) fn parse_function_call(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::FunctionCall);
        node.push(self.expect_symbol("(", "in function call")?);

        if !self.check_symbol(")") {
            node.push(self.parse_expression()?);
            while self.check_symbol(",") {
                node.push(self.bump("','")?);
                node.push(self.parse_expression()?);
            }
        }

        node.push(self.expect_symbol(")", "after function arguments")?);
        Ok(node)
    }
}
