//! # Introduction
//!
//! tacfront is a teaching-scale compiler front end for a small C-family
//! language. It strips comments, splits and classifies tokens, parses the
//! program with a recursive-descent parser into a concrete parse tree, and
//! lowers assignments to three-address code. A second entry point builds a
//! binary syntax tree straight from an arithmetic equation such as
//! `x=a*b+3` and lowers that instead.
//!
//! ## Pipeline
//!
//! ```text
//! Source → strip_comments → Lexer → Parser → parse tree → TAC
//! Equation → ExpressionTreeBuilder → syntax tree → TAC
//! ```
//!
//! 1. [`parser`]: comment removal, lexical analysis and the parse tree.
//! 2. [`equation`]: operator-precedence construction of equation trees.
//! 3. [`tac`]: three-address code over either tree shape.
//! 4. [`pipeline`]: runs the stages in order and keeps every artifact.
//! 5. [`cli`] and [`ui`]: the command line and the ratatui viewer; not part
//!    of the stable library API.
//!
//! ## Example
//!
//! ```
//! use tacfront::pipeline::Compilation;
//!
//! let run = Compilation::run("int x; x = 3 + 4;", None).unwrap();
//! assert_eq!(run.tac_lines(), vec!["t0 = 3 + 4", "x = t0"]);
//! ```

pub mod cli;
pub mod equation;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod tac;
pub mod ui;

pub use error::Error;
