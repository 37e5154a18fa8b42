//! Statement parsing implementation
//!
//! This module handles statement dispatch and every statement form that is
//! not a declaration:
//!
//! - Assignments and call statements: `x = a + 1;`, `f(a, b);`
//! - Control flow: `if`, `while`, `for`
//! - Stream I/O: `cin >> a >> b;`, `cout << a << "text";`
//! - Jumps: `return`, `break`, `continue`
//! - Blocks: `{ ... }`
//!
//! # Grammar
//!
//! ```text
//! statement    ::= assignment_or_call | reserved_stmt | block
//! if_stmt      ::= "if" "(" expression ")" statement
//! while_stmt   ::= "while" "(" expression ")" statement
//! for_stmt     ::= "for" "(" statement ";" expression ";" expression ")" statement
//! input_stmt   ::= "cin" (">>" IDENTIFIER)* ";"
//! output_stmt  ::= "cout" ("<<" expression)* ";"
//! block        ::= "{" statement* "}"
//! ```
//!
//! The `for` header takes a full statement as its initializer, so that
//! statement's own `;` is followed by the header's `;`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::tree::{NodeKind, ParseTreeNode};

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<ParseTreeNode, ParseError> {
        let (kind, text) = match self.peek() {
            Some(token) => (token.kind(), token.text().to_string()),
            None => return Err(self.error("statement")),
        };

        let production = self.nested(|parser| match kind {
            TokenKind::Identifier => parser.parse_assignment_or_call(),
            TokenKind::ReservedWord => parser.parse_reserved_statement(&text),
            TokenKind::Symbol if text == "{" => parser.parse_block(),
            _ => Err(parser.error("statement")),
        })?;

        let mut node = ParseTreeNode::new(NodeKind::Statement);
        node.push(production);
        Ok(node)
    }

    /// Dispatch on the reserved word that starts a statement
    fn parse_reserved_statement(&mut self, word: &str) -> Result<ParseTreeNode, ParseError> {
        match word {
            "int" => {
                let keyword = self.bump("'int'")?;
                if self.check(TokenKind::ReservedWord, "main") {
                    self.parse_main_statement(Some(keyword))
                } else {
                    self.retreat();
                    self.parse_variable_declaration()
                }
            }
            "float" | "void" => self.parse_variable_declaration(),
            "return" => self.parse_return_statement(),
            "if" => self.parse_conditional(NodeKind::IfStatement, "if"),
            "while" => self.parse_conditional(NodeKind::WhileStatement, "while"),
            "for" => self.parse_for_statement(),
            "cin" => self.parse_input_statement(),
            "cout" => self.parse_output_statement(),
            "continue" => self.parse_jump(NodeKind::ContinueStatement, "continue"),
            "break" => self.parse_jump(NodeKind::BreakStatement, "break"),
            "#include" => self.parse_include(),
            "using" => self.parse_using_namespace(),
            // Stray pieces of `using namespace std` are accepted and dropped
            "namespace" | "std" => self.bump(word),
            "main" => self.parse_main_statement(None),
            _ => Err(self.error("statement")),
        }
    }

    /// Parse `IDENTIFIER "=" expression ";"` or `IDENTIFIER function_call ";"`
    fn parse_assignment_or_call(&mut self) -> Result<ParseTreeNode, ParseError> {
        let name = self.expect_identifier("at start of statement")?;

        if self.check_symbol("=") {
            let mut node = ParseTreeNode::new(NodeKind::Assignment);
            node.push(name);
            node.push(self.bump("'='")?);
            node.push(self.parse_expression()?);
            node.push(self.expect_semicolon("after assignment")?);
            Ok(node)
        } else if self.check_symbol("(") {
            let mut node = ParseTreeNode::new(NodeKind::CallStatement);
            node.push(name);
            node.push(self.parse_function_call()?);
            node.push(self.expect_semicolon("after function call")?);
            Ok(node)
        } else {
            Err(self.error("assignment or function call"))
        }
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::ReturnStatement);
        node.push(self.bump("'return'")?);
        node.push(self.parse_expression()?);
        node.push(self.expect_semicolon("after return statement")?);
        Ok(node)
    }

    /// Parse `if` or `while`: keyword, parenthesized condition, body
    fn parse_conditional(
        &mut self,
        kind: NodeKind,
        keyword: &str,
    ) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(kind);
        node.push(self.bump(keyword)?);
        node.push(self.expect_symbol("(", &format!("after '{keyword}'"))?);
        node.push(self.parse_expression()?);
        node.push(self.expect_symbol(")", &format!("after condition in '{keyword}' statement"))?);
        node.push(self.parse_statement()?);
        Ok(node)
    }

    /// Parse for statement
    fn parse_for_statement(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::ForStatement);
        node.push(self.bump("'for'")?);
        node.push(self.expect_symbol("(", "after 'for'")?);
        node.push(self.parse_statement()?);
        node.push(self.expect_semicolon("in 'for' statement")?);
        node.push(self.parse_expression()?);
        node.push(self.expect_semicolon("in 'for' statement")?);
        node.push(self.parse_expression()?);
        node.push(self.expect_symbol(")", "after 'for' conditions")?);
        node.push(self.parse_statement()?);
        Ok(node)
    }

    /// Parse `cin (>> IDENTIFIER)* ;`
    fn parse_input_statement(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::InputStatement);
        node.push(self.bump("'cin'")?);
        while self.check(TokenKind::ReservedWord, ">>") {
            node.push(self.bump("'>>'")?);
            node.push(self.expect_identifier("after '>>' in 'cin' statement")?);
        }
        node.push(self.expect_semicolon("after 'cin' statement")?);
        Ok(node)
    }

    /// Parse `cout (<< expression)* ;`
    fn parse_output_statement(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::OutputStatement);
        node.push(self.bump("'cout'")?);
        while self.check(TokenKind::ReservedWord, "<<") {
            node.push(self.bump("'<<'")?);
            node.push(self.parse_expression()?);
        }
        node.push(self.expect_semicolon("after 'cout' statement")?);
        Ok(node)
    }

    /// Parse `continue ;` or `break ;`
    fn parse_jump(&mut self, kind: NodeKind, keyword: &str) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(kind);
        node.push(self.bump(keyword)?);
        node.push(self.expect_semicolon(&format!("after '{keyword}' statement"))?);
        Ok(node)
    }

    /// Parse a braced block
    pub(crate) fn parse_block(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::Block);
        node.push(self.expect_symbol("{", "to open block")?);
        self.parse_statements_until_brace(&mut node, "to close block")?;
        Ok(node)
    }

    /// Parse statements into `node` up to and including the closing `}`
    pub(crate) fn parse_statements_until_brace(
        &mut self,
        node: &mut ParseTreeNode,
        ctx: &str,
    ) -> Result<(), ParseError> {
        while !self.check_symbol("}") {
            if self.is_at_end() {
                return Err(self.error(format!("'}}' {ctx}")));
            }
            node.push(self.parse_statement()?);
        }
        node.push(self.bump("'}'")?);
        Ok(())
    }
}
