//! Flat equation trees
//!
//! A narrower pipeline that stands apart from the [`parser`](crate::parser):
//! it takes one assignment or arithmetic line as raw text, such as
//! `x = a * b + 3`, and builds a binary [`SyntaxTreeNode`] honoring operator
//! precedence. The resulting tree is what [`tac`](crate::tac) lowers most
//! directly.

pub mod builder;
pub mod syntax_tree;

pub use builder::{tokenize_equation, EquationError, ExpressionTreeBuilder, Operator};
pub use syntax_tree::SyntaxTreeNode;
