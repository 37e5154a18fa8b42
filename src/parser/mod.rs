//! Source front end: comments, tokens, parse tree
//!
//! This module transforms source text into a labeled parse tree:
//! - [`comments`]: comment removal (raw text → cleaned text)
//! - [`lexer`]: tokenization and classification (cleaned text → tokens)
//! - [`parse`]: the [`Parser`](parse::Parser) and its error type (tokens → tree)
//! - [`tree`]: parse tree node definitions
//!
//! # Supported Subset
//!
//! - Types: `int`, `float`, `void` in variable declarations
//! - Statements: declarations, assignments, calls, `if`, `while`, `for`,
//!   `return`, `break`, `continue`, blocks, `int main() { ... }`
//! - Stream I/O: `cin >> x;`, `cout << expr;`
//! - Preamble: `#include <header>`, `using namespace std;`
//! - Expressions: `+ - * /` over numbers, identifiers, strings, parentheses
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. No external parser generator
//! dependencies. The first syntax error aborts the parse.

pub mod comments;
pub mod lexer;
pub mod parse;
pub mod tree;

mod declarations;
mod expressions;
mod statements;
