//! Statement-level lowering of parsed programs
//!
//! Only value-producing statements generate code: assignments, and
//! declarators that carry an initializer. Control flow has no jump
//! instructions to lower into, so `if` / `while` / `for` contribute just the
//! statements nested in them, in source order.

use super::generator::TacGenerator;
use super::{Instruction, TacError};
use crate::parser::tree::{NodeKind, ParseTreeNode};

/// Lower every assignment and initialized declaration in a parsed program.
pub fn lower_program(root: &ParseTreeNode) -> Result<Vec<Instruction>, TacError> {
    let mut generator = TacGenerator::new();
    generator.lower_statement(root)?;
    Ok(generator.finish())
}

impl TacGenerator {
    fn lower_statement(&mut self, node: &ParseTreeNode) -> Result<(), TacError> {
        match &node.kind {
            NodeKind::Root
            | NodeKind::Statement
            | NodeKind::Block
            | NodeKind::MainStatement
            | NodeKind::IfStatement
            | NodeKind::WhileStatement
            | NodeKind::ForStatement => {
                for child in &node.children {
                    self.lower_statement(child)?;
                }
                Ok(())
            }
            NodeKind::Assignment => match node.children.as_slice() {
                [name, _, value, _] => self.lower_initializer(name, value),
                _ => Err(malformed_statement(node)),
            },
            NodeKind::VariableDeclaration => {
                for (i, child) in node.children.iter().enumerate() {
                    if !matches!(&child.kind, NodeKind::Terminal(text) if text == "=") {
                        continue;
                    }
                    let name = i.checked_sub(1).and_then(|j| node.children.get(j));
                    match (name, node.children.get(i + 1)) {
                        (Some(name), Some(value)) => self.lower_initializer(name, value)?,
                        _ => return Err(malformed_statement(node)),
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Emit `name = <value>` after the instructions computing `value`.
    fn lower_initializer(
        &mut self,
        name: &ParseTreeNode,
        value: &ParseTreeNode,
    ) -> Result<(), TacError> {
        let src = self.lower(value)?;
        self.emit_copy(name.label(), src);
        Ok(())
    }
}

fn malformed_statement(node: &ParseTreeNode) -> TacError {
    TacError::MalformedNode {
        value: node.label().to_string(),
        children: node.children.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::Parser;
    use crate::tac::to_lines;

    fn lower(source: &str) -> Vec<String> {
        let tree = Parser::from_source(source).parse_program().unwrap();
        to_lines(&lower_program(&tree).unwrap())
    }

    #[test]
    fn test_lower_assignment_chain() {
        assert_eq!(
            lower("int x; x = 3 + 4;"),
            vec!["t0 = 3 + 4", "x = t0"]
        );
    }

    #[test]
    fn test_lower_mixed_precedence() {
        assert_eq!(
            lower("x = a * b + 3;"),
            vec!["t0 = a * b", "t1 = t0 + 3", "x = t1"]
        );
    }

    #[test]
    fn test_lower_left_to_right_chain() {
        assert_eq!(
            lower("x = a - b + c;"),
            vec!["t0 = a - b", "t1 = t0 + c", "x = t1"]
        );
    }

    #[test]
    fn test_lower_parenthesized_group() {
        assert_eq!(
            lower("y = ( a + b ) * c;"),
            vec!["t0 = a + b", "t1 = t0 * c", "y = t1"]
        );
    }

    #[test]
    fn test_lower_declaration_initializers() {
        assert_eq!(
            lower("int a = 1, b, c = a * 2;"),
            vec!["a = 1", "t0 = a * 2", "c = t0"]
        );
    }

    #[test]
    fn test_lower_nested_statements() {
        let source = "int main() { int n = 3; while (n) { n = n - 1; } if (n) x = 0; return n; }";
        assert_eq!(
            lower(source),
            vec!["n = 3", "t0 = n - 1", "n = t0", "x = 0"]
        );
    }

    #[test]
    fn test_statements_without_values_emit_nothing() {
        assert!(lower("#include <iostream>\nusing namespace std; cout << a; f(b);").is_empty());
    }
}
