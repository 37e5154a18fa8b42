//! Declaration parsing implementation
//!
//! This module handles the declaration-like statements:
//!
//! - Variable declarations: `int x = 1, y;`, `float f;`
//! - The entry point: `int main() { ... }` (or bare `main() { ... }`)
//! - Header includes: `#include <iostream>`
//! - Namespace import: `using namespace std;`
//!
//! # Grammar
//!
//! ```text
//! variable_decl  ::= type IDENTIFIER ("=" expression)? ("," IDENTIFIER ("=" expression)?)* ";"
//! main_statement ::= "int"? "main" "(" ")" "{" statement* "}"
//! include        ::= "#include" "<" IDENTIFIER ">"
//! using          ::= "using" "namespace" "std" ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::tree::{NodeKind, ParseTreeNode};

impl Parser {
    /// Parse a variable declaration, starting at the type keyword
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::VariableDeclaration);
        node.push(self.bump("type")?);

        self.parse_declarator(&mut node, "after type")?;
        while self.check_symbol(",") {
            node.push(self.bump("','")?);
            self.parse_declarator(&mut node, "after ','")?;
        }

        node.push(self.expect_semicolon("after variable declaration")?);
        Ok(node)
    }

    /// Parse `IDENTIFIER ("=" expression)?` into the declaration node
    fn parse_declarator(&mut self, node: &mut ParseTreeNode, ctx: &str) -> Result<(), ParseError> {
        node.push(self.expect_identifier(ctx)?);
        if self.check_symbol("=") {
            node.push(self.bump("'='")?);
            node.push(self.parse_expression()?);
        }
        Ok(())
    }

    /// Parse `main() { ... }`. `return_type` is the already consumed `int`, if any.
    pub(crate) fn parse_main_statement(
        &mut self,
        return_type: Option<ParseTreeNode>,
    ) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::MainStatement);
        if let Some(keyword) = return_type {
            node.push(keyword);
        }

        node.push(self.expect(TokenKind::ReservedWord, "main", "as entry point")?);
        node.push(self.expect_symbol("(", "after 'main'")?);
        node.push(self.expect_symbol(")", "after 'main('")?);
        node.push(self.expect_symbol("{", "after 'main()'")?);
        self.parse_statements_until_brace(&mut node, "to close 'main'")?;
        Ok(node)
    }

    /// Parse `#include <header>`
    pub(crate) fn parse_include(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::IncludeStatement);
        node.push(self.bump("'#include'")?);
        node.push(self.expect_symbol("<", "after '#include'")?);
        node.push(self.expect_identifier("as header name")?);
        node.push(self.expect_symbol(">", "after header name")?);
        Ok(node)
    }

    /// Parse `using namespace std;`
    pub(crate) fn parse_using_namespace(&mut self) -> Result<ParseTreeNode, ParseError> {
        let mut node = ParseTreeNode::new(NodeKind::UsingNamespaceStatement);
        node.push(self.bump("'using'")?);
        node.push(self.expect(TokenKind::ReservedWord, "namespace", "after 'using'")?);
        node.push(self.expect(TokenKind::ReservedWord, "std", "after 'namespace'")?);
        node.push(self.expect_semicolon("after 'using namespace std'")?);
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse::{ParseError, Parser};
    use crate::parser::tree::{NodeKind, ParseTreeNode};

    fn parse(source: &str) -> Result<ParseTreeNode, ParseError> {
        Parser::from_source(source).parse_program()
    }

    fn labels(node: &ParseTreeNode) -> Vec<&str> {
        node.children.iter().map(|c| c.label()).collect()
    }

    #[test]
    fn test_parse_declarations() {
        let tree = parse("int x = 1, y; float z; void v;").unwrap();

        let int_decl = &tree.children[0].children[0];
        assert_eq!(int_decl.kind, NodeKind::VariableDeclaration);
        assert_eq!(labels(int_decl), vec!["int", "x", "=", "expression", ",", "y", ";"]);
        assert_eq!(labels(&tree.children[1].children[0]), vec!["float", "z", ";"]);
        assert_eq!(labels(&tree.children[2].children[0]), vec!["void", "v", ";"]);
    }

    #[test]
    fn test_declaration_needs_identifier_after_comma() {
        let err = parse("int x, ;").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error at token 3: expected identifier after ',', found SYMBOL (;)"
        );
    }

    #[test]
    fn test_parse_int_main() {
        let tree = parse("int main() { int x; return 0; }").unwrap();
        let main = &tree.children[0].children[0];

        assert_eq!(main.kind, NodeKind::MainStatement);
        assert_eq!(
            labels(main),
            vec!["int", "main", "(", ")", "{", "statement", "statement", "}"]
        );
    }

    #[test]
    fn test_parse_bare_main() {
        let tree = parse("main() { }").unwrap();
        assert_eq!(
            labels(&tree.children[0].children[0]),
            vec!["main", "(", ")", "{", "}"]
        );
    }

    #[test]
    fn test_main_rejects_parameters() {
        let err = parse("int main(x) { }").unwrap_err();
        assert!(matches!(err, ParseError::Unexpected { position: 3, .. }));
    }

    #[test]
    fn test_parse_preamble() {
        let tree = parse("#include <iostream>\nusing namespace std;").unwrap();

        assert_eq!(
            labels(&tree.children[0].children[0]),
            vec!["#include", "<", "iostream", ">"]
        );
        assert_eq!(
            labels(&tree.children[1].children[0]),
            vec!["using", "namespace", "std", ";"]
        );
    }

    #[test]
    fn test_using_requires_std() {
        assert!(parse("using namespace foo;").is_err());
    }
}
