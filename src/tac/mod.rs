//! Three-address code generation
//!
//! Lowers a tree to a flat list of [`Instruction`]s, each with at most one
//! operator:
//!
//! ```text
//! x = a * b + 3      →      t0 = a * b
//!                           t1 = t0 + 3
//!                           x = t1
//! ```
//!
//! - [`generator`]: the post-order walk over any [`TacTree`], temporary
//!   allocation, and the tree adapters for both tree types
//! - [`lower`]: statement-level lowering of a whole parsed program
//!
//! Temporaries are named `t0, t1, ...` by a counter owned by one
//! [`TacGenerator`]; every generation run starts again from `t0`.

pub mod generator;
pub mod lower;

pub use generator::{TacGenerator, TacTree};
pub use lower::lower_program;

use crate::equation::Operator;
use std::fmt;
use thiserror::Error;

/// Errors raised while lowering a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TacError {
    #[error("TAC error: node '{value}' with {children} children cannot be lowered")]
    MalformedNode { value: String, children: usize },
}

/// One three-address instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `dest = src`
    Copy { dest: String, src: String },
    /// `dest = left op right`
    Binary {
        dest: String,
        left: String,
        op: Operator,
        right: String,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Copy { dest, src } => write!(f, "{} = {}", dest, src),
            Instruction::Binary {
                dest,
                left,
                op,
                right,
            } => write!(f, "{} = {} {} {}", dest, left, op, right),
        }
    }
}

/// Render instructions in their textual form, one string each.
pub fn to_lines(instructions: &[Instruction]) -> Vec<String> {
    instructions.iter().map(ToString::to_string).collect()
}
