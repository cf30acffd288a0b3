//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The viewer is organized into three layers:
//!
//! - **[`app`]**: viewer state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   symbols, tree, diagnostics, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with the source and a finished
//! [`Analysis`] and call [`App::run`] to start the event loop.
//!
//! [`Analysis`]: crate::semantic::Analysis
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
