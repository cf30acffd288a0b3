//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code with syntax highlighting and diagnostic markers
//! - [`symbols`]: The final symbol table
//! - [`tree`]: Indented outline of the syntax tree
//! - [`diagnostics`]: Errors and warnings in report order
//! - [`status`]: Status bar with counters and keybindings
//! - `utils`: Shared block styling and scroll clamping
//!
//! Each pane exports a `render_*_pane()` function taking the frame, its area,
//! the data to show, whether it has focus and its scroll offset.

mod utils;

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod symbols;
pub mod tree;

pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use symbols::render_symbols_pane;
pub use tree::{render_tree_pane, OutlineRow};
