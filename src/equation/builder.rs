//! Operator-precedence construction of equation trees
//!
//! The equation text goes through its own tokenizer: runs of letters, digits
//! and `.` are operands, `+ - * / =` are operators, and every other character
//! only separates. Parentheses are separators too, so they do not group.
//!
//! The tree is built with an operand stack and an operator stack. Before an
//! operator is pushed, every stacked operator of equal or higher precedence is
//! reduced, which makes all operators (including `=`) left-associative.

use super::syntax_tree::SyntaxTreeNode;
use std::fmt;
use thiserror::Error;

/// Errors raised while building an equation tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquationError {
    #[error("Equation error: no operands or operators found")]
    Empty,

    #[error("Equation error: operator '{operator}' is missing an operand")]
    MissingOperand { operator: Operator },

    #[error("Equation error: {count} operands are not joined by operators")]
    DanglingOperands { count: usize },
}

/// Equation operators, by increasing precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Operator::Assign),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn is_arithmetic(self) -> bool {
        self != Operator::Assign
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Assign => 0,
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationToken {
    Operand(String),
    Operator(Operator),
}

/// Split equation text into operands and operators.
pub fn tokenize_equation(text: &str) -> Vec<EquationToken> {
    let mut tokens = Vec::new();
    let mut operand = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() || c == '.' {
            operand.push(c);
            continue;
        }

        if !operand.is_empty() {
            tokens.push(EquationToken::Operand(std::mem::take(&mut operand)));
        }
        if let Some(op) = Operator::from_char(c) {
            tokens.push(EquationToken::Operator(op));
        }
    }

    if !operand.is_empty() {
        tokens.push(EquationToken::Operand(operand));
    }

    tokens
}

/// Two-stack builder for a single equation
#[derive(Debug, Default)]
pub struct ExpressionTreeBuilder {
    operands: Vec<SyntaxTreeNode>,
    operators: Vec<Operator>,
}

impl ExpressionTreeBuilder {
    /// Build the binary tree for one flat equation such as `x = a * b + 3`.
    pub fn build(text: &str) -> Result<SyntaxTreeNode, EquationError> {
        let tokens = tokenize_equation(text);
        log::debug!("equation tokenized into {} tokens", tokens.len());

        let mut builder = Self::default();
        for token in tokens {
            match token {
                EquationToken::Operand(value) => builder.operands.push(SyntaxTreeNode::leaf(value)),
                EquationToken::Operator(op) => builder.push_operator(op)?,
            }
        }
        builder.finish()
    }

    fn push_operator(&mut self, incoming: Operator) -> Result<(), EquationError> {
        while self
            .operators
            .last()
            .is_some_and(|top| top.precedence() >= incoming.precedence())
        {
            self.reduce()?;
        }
        self.operators.push(incoming);
        Ok(())
    }

    /// Pop one operator and its two operands, push the combined node.
    fn reduce(&mut self) -> Result<(), EquationError> {
        let Some(operator) = self.operators.pop() else {
            return Ok(());
        };
        let missing = EquationError::MissingOperand { operator };

        // Popped right operand first, so the left one keeps its position
        let right = self.operands.pop().ok_or_else(|| missing.clone())?;
        let left = self.operands.pop().ok_or(missing)?;

        log::trace!("reduce {} {} {}", left.value, operator, right.value);
        self.operands
            .push(SyntaxTreeNode::binary(operator.symbol(), left, right));
        Ok(())
    }

    fn finish(mut self) -> Result<SyntaxTreeNode, EquationError> {
        while !self.operators.is_empty() {
            self.reduce()?;
        }

        match self.operands.len() {
            0 => Err(EquationError::Empty),
            1 => self.operands.pop().ok_or(EquationError::Empty),
            count => Err(EquationError::DanglingOperands { count }),
        }
    }
}
