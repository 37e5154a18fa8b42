//! Post-order TAC walk over equation trees and parse trees

use super::{Instruction, TacError};
use crate::equation::{Operator, SyntaxTreeNode};
use crate::parser::tree::ParseTreeNode;

/// A tree the generator can walk: a value per node and ordered children.
pub trait TacTree: Sized {
    fn value(&self) -> &str;
    fn children(&self) -> &[Self];

    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

impl TacTree for SyntaxTreeNode {
    fn value(&self) -> &str {
        &self.value
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl TacTree for ParseTreeNode {
    fn value(&self) -> &str {
        self.label()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Accumulates instructions and hands out temporaries for one run.
#[derive(Debug, Default)]
pub struct TacGenerator {
    instructions: Vec<Instruction>,
    next_temp: usize,
}

impl TacGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower a whole tree with a fresh generator.
    pub fn generate<T: TacTree>(root: &T) -> Result<Vec<Instruction>, TacError> {
        let mut generator = Self::new();
        generator.lower(root)?;
        Ok(generator.finish())
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn finish(self) -> Vec<Instruction> {
        log::debug!(
            "generated {} instructions using {} temporaries",
            self.instructions.len(),
            self.next_temp
        );
        self.instructions
    }

    /// Lower `node`, emitting instructions for its subtree, and return the
    /// name that holds its value (a variable, a literal, or a temporary).
    ///
    /// - leaf: its own value
    /// - `=` with two children: emits `left = right`, yields `left`
    /// - `+ - * /` with two children: emits `tN = left op right`, yields `tN`
    /// - one child: yields the child unchanged
    /// - `( inner )`: yields `inner`
    /// - `operand (op operand)+`: folded left to right into temporaries
    ///
    /// The walk keeps its own stack of frames, so tree depth is bounded by
    /// memory rather than by the thread stack.
    pub fn lower<T: TacTree>(&mut self, root: &T) -> Result<String, TacError> {
        let mut frames: Vec<Frame<'_, T>> = Vec::new();
        let mut node = root;

        loop {
            while !node.is_leaf() {
                let frame = Frame::enter(node)?;
                node = frame.pending_child();
                frames.push(frame);
            }
            let mut value = node.value().to_string();

            // Hand values upward until some frame needs another child
            loop {
                let Some(frame) = frames.last_mut() else {
                    return Ok(value);
                };
                match frame.accept(self, value)? {
                    Step::Descend(child) => {
                        node = child;
                        break;
                    }
                    Step::Done(result) => {
                        frames.pop();
                        value = result;
                    }
                }
            }
        }
    }

    /// Emit the instruction for `left op right` and return the name holding it.
    fn combine(&mut self, op: Operator, left: String, right: String) -> String {
        if op.is_arithmetic() {
            self.emit_binary(op, left, right)
        } else {
            self.emit_copy(left.clone(), right);
            left
        }
    }

    /// Emit `dest = src`.
    pub fn emit_copy(&mut self, dest: impl Into<String>, src: impl Into<String>) {
        self.instructions.push(Instruction::Copy {
            dest: dest.into(),
            src: src.into(),
        });
    }

    /// Emit `tN = left op right` into a fresh temporary and return its name.
    fn emit_binary(&mut self, op: Operator, left: String, right: String) -> String {
        let dest = self.new_temp();
        self.instructions.push(Instruction::Binary {
            dest: dest.clone(),
            left,
            op,
            right,
        });
        dest
    }

    fn new_temp(&mut self) -> String {
        let name = format!("t{}", self.next_temp);
        self.next_temp += 1;
        log::trace!("allocated temporary {}", name);
        name
    }
}

/// How an interior node combines the values of its children
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// Binary operator node: both children, then one instruction
    Operator(Operator),
    /// Wrapper or `( inner )` group: the value of one child
    Forward,
    /// `operand (op operand)+`: one instruction per operator, left to right
    Chain,
}

/// An interior node whose children are still being lowered
struct Frame<'t, T> {
    node: &'t T,
    shape: Shape,
    /// Index of the child whose value arrives next
    child: usize,
    /// Left-hand value waiting for the next operand
    held: Option<String>,
}

enum Step<'t, T> {
    Descend(&'t T),
    Done(String),
}

impl<'t, T: TacTree> Frame<'t, T> {
    fn enter(node: &'t T) -> Result<Self, TacError> {
        let children = node.children();

        let (shape, child) = match Operator::from_symbol(node.value()) {
            Some(op) if children.len() == 2 => (Shape::Operator(op), 0),
            Some(_) => return Err(malformed(node)),
            None => match children {
                [_] => (Shape::Forward, 0),
                [open, _, close] if is_group(open, close) => (Shape::Forward, 1),
                [_, rest @ ..] if is_operator_chain(rest) => (Shape::Chain, 0),
                _ => return Err(malformed(node)),
            },
        };

        Ok(Self {
            node,
            shape,
            child,
            held: None,
        })
    }

    fn pending_child(&self) -> &'t T {
        &self.node.children()[self.child]
    }

    /// Take the value of the pending child and decide what happens next.
    fn accept(
        &mut self,
        generator: &mut TacGenerator,
        value: String,
    ) -> Result<Step<'t, T>, TacError> {
        match self.shape {
            Shape::Forward => Ok(Step::Done(value)),
            Shape::Operator(op) => match self.held.take() {
                None => {
                    self.held = Some(value);
                    self.child = 1;
                    Ok(Step::Descend(self.pending_child()))
                }
                Some(left) => Ok(Step::Done(generator.combine(op, left, value))),
            },
            Shape::Chain => {
                let acc = match self.held.take() {
                    None => value,
                    Some(left) => {
                        let op = self.node.children()[self.child - 1].value();
                        let op = Operator::from_symbol(op).ok_or_else(|| malformed(self.node))?;
                        generator.emit_binary(op, left, value)
                    }
                };

                self.child += 2;
                if self.child < self.node.children().len() {
                    self.held = Some(acc);
                    Ok(Step::Descend(self.pending_child()))
                } else {
                    Ok(Step::Done(acc))
                }
            }
        }
    }
}

fn is_group<T: TacTree>(open: &T, close: &T) -> bool {
    open.is_leaf() && open.value() == "(" && close.is_leaf() && close.value() == ")"
}

/// `op operand op operand ...` where every `op` is an arithmetic operator leaf
fn is_operator_chain<T: TacTree>(rest: &[T]) -> bool {
    !rest.is_empty()
        && rest.len() % 2 == 0
        && rest.chunks(2).all(|pair| {
            pair[0].is_leaf()
                && Operator::from_symbol(pair[0].value()).is_some_and(Operator::is_arithmetic)
        })
}

fn malformed<T: TacTree>(node: &T) -> TacError {
    TacError::MalformedNode {
        value: node.value().to_string(),
        children: node.children().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::ExpressionTreeBuilder;
    use crate::tac::to_lines;

    fn leaf(value: &str) -> SyntaxTreeNode {
        SyntaxTreeNode::leaf(value)
    }

    fn tac(equation: &str) -> Vec<String> {
        let tree = ExpressionTreeBuilder::build(equation).unwrap();
        to_lines(&TacGenerator::generate(&tree).unwrap())
    }

    #[test]
    fn test_generate_from_equation() {
        assert_eq!(tac("x=a*b+3"), vec!["t0 = a * b", "t1 = t0 + 3", "x = t1"]);
    }

    #[test]
    fn test_right_operand_evaluated_after_left() {
        assert_eq!(
            tac("x = a + b * c"),
            vec!["t0 = b * c", "t1 = a + t0", "x = t1"]
        );
        assert_eq!(
            tac("y = a * b - c / d"),
            vec!["t0 = a * b", "t1 = c / d", "t2 = t0 - t1", "y = t2"]
        );
    }

    #[test]
    fn test_plain_copy_and_leaf() {
        assert_eq!(tac("x = y"), vec!["x = y"]);
        assert!(tac("x").is_empty());
    }

    #[test]
    fn test_expression_without_assignment() {
        assert_eq!(tac("a + 1"), vec!["t0 = a + 1"]);
    }

    #[test]
    fn test_temporaries_restart_per_run() {
        assert_eq!(tac("a = b + c"), tac("a = b + c"));
    }

    #[test]
    fn test_single_child_passes_through() {
        let mut wrapper = leaf("factor");
        wrapper.children.push(SyntaxTreeNode::binary("*", leaf("a"), leaf("2")));

        let mut generator = TacGenerator::new();
        let repr = generator.lower(&wrapper).unwrap();
        assert_eq!(repr, "t0");
        assert_eq!(to_lines(generator.instructions()), vec!["t0 = a * 2"]);
    }

    #[test]
    fn test_operator_with_one_child_is_malformed() {
        let mut node = leaf("+");
        node.children.push(leaf("a"));

        assert_eq!(
            TacGenerator::generate(&node),
            Err(TacError::MalformedNode {
                value: "+".to_string(),
                children: 1
            })
        );
    }

    #[test]
    fn test_long_flat_equation_lowers_without_recursion() {
        let terms = 10_000;
        let equation = format!("x={}", vec!["a"; terms].join("+"));
        let tree = ExpressionTreeBuilder::build(&equation).unwrap();
        assert_eq!(tree.depth(), terms + 1);

        let lines = to_lines(&TacGenerator::generate(&tree).unwrap());
        assert_eq!(lines.len(), terms);
        assert_eq!(lines[0], "t0 = a + a");
        assert_eq!(lines[1], "t1 = t0 + a");
        assert_eq!(lines[terms - 1], format!("x = t{}", terms - 2));
    }

    #[test]
    fn test_unknown_multi_child_node_is_malformed() {
        let mut node = leaf("call");
        node.children.push(leaf("f"));
        node.children.push(leaf("x"));

        assert!(TacGenerator::generate(&node).is_err());
    }
}
