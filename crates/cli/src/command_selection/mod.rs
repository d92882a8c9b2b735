//! Command selection and user input handling.
//!
//! This module provides the two ways of picking a command out of a cheat
//! sheet, plus the confirmation step both of them end with.
//!
//! # User Interface
//!
//! - **Pagination**: numbered pages read line by line, `n`/`p` to move,
//!   a number to pick, `q` to quit
//! - **Interactive search**: raw terminal mode, typing filters the list,
//!   arrow keys move the highlight, Enter picks, Esc or Ctrl-C aborts
//! - **Confirmation**: `y` runs, `e` edits the command line first, anything
//!   else cancels

pub mod input;
pub mod pagination;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::confirm_command;
pub use pagination::{apply_search, select_command, PagingOptions};
pub use types::{RunChoice, SearchAction, SearchKey, SearchState, SelectionOutcome};
pub use ui::{search_commands, RawModeGuard};
