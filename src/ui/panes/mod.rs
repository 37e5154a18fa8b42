//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: cleaned source with syntax highlighting and line numbers
//! - [`tokens`]: classified token list
//! - [`tree`]: parse tree outline
//! - [`tac`]: three-address code listing (plus equation tree edges)
//! - [`status`]: status bar with counters and keybindings
//! - `utils`: shared block and scrolling helpers
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! pipeline data and a mutable scroll offset owned by the [`App`](super::App).

mod utils;

pub mod source;
pub mod status;
pub mod tac;
pub mod tokens;
pub mod tree;

// Re-export render functions for convenience
pub use source::render_source_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tac::render_tac_pane;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;
