//! Runs the stages in order and keeps every intermediate artifact
//!
//! ```text
//! source → strip_comments → Lexer → Parser → parse tree ─┐
//!                                                        ├→ TAC
//! equation text → ExpressionTreeBuilder → equation tree ─┘
//! ```
//!
//! With an equation, the TAC listing comes from the equation tree; without
//! one, it comes from the assignments of the parsed program.

use crate::equation::{ExpressionTreeBuilder, SyntaxTreeNode};
use crate::error::Error;
use crate::parser::comments::strip_comments;
use crate::parser::lexer::{Lexer, Token};
use crate::parser::parse::Parser;
use crate::parser::tree::ParseTreeNode;
use crate::tac::{self, Instruction, TacGenerator};
use std::fs;
use std::path::Path;

/// Everything one run of the front end produced
#[derive(Debug, Clone)]
pub struct Compilation {
    pub source: String,
    pub cleaned: String,
    pub tokens: Vec<Token>,
    pub tree: ParseTreeNode,
    pub equation: Option<SyntaxTreeNode>,
    pub instructions: Vec<Instruction>,
}

impl Compilation {
    /// Run the full pipeline. The first failing stage aborts the run.
    pub fn run(source: &str, equation: Option<&str>) -> Result<Self, Error> {
        let cleaned = strip_comments(source);
        let tokens = Lexer::new().tokenize(&cleaned);
        let tree = Parser::new(tokens.clone()).parse_program()?;

        let (equation, instructions) = match equation {
            Some(text) => {
                let root = ExpressionTreeBuilder::build(text)?;
                let instructions = TacGenerator::generate(&root)?;
                (Some(root), instructions)
            }
            None => (None, tac::lower_program(&tree)?),
        };

        log::debug!(
            "pipeline finished: {} tokens, {} tree nodes, {} instructions",
            tokens.len(),
            tree.node_count(),
            instructions.len()
        );

        Ok(Self {
            source: source.to_string(),
            cleaned,
            tokens,
            tree,
            equation,
            instructions,
        })
    }

    /// Read `path` and run the pipeline over its contents.
    pub fn from_file(path: impl AsRef<Path>, equation: Option<&str>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::info!("compiling {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::run(&source, equation)
    }

    /// The TAC listing as text, one instruction per entry.
    pub fn tac_lines(&self) -> Vec<String> {
        tac::to_lines(&self.instructions)
    }
}
