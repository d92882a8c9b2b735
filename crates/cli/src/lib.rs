//! Chta CLI Library
//!
//! This crate provides the command-line interface for chta, a cheat sheet
//! viewer that can also run the commands its sheets contain. It handles
//! argument parsing, markdown rendering, section navigation, command
//! selection and confirmation.
//!
//! # Key Features
//!
//! - **Section Viewer**: Table of contents beside the rendered current section
//! - **Command Paging**: Numbered pages of extracted commands, picked by number
//! - **Interactive Search**: Raw terminal filtering as you type
//! - **Command Confirmation**: Confirm or edit a command before it runs
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`command_selection`]: Paging, interactive search and confirmation
//! - [`completions`]: Shell completion scripts
//! - [`viewer`]: Section viewer
//! - [`rendering`]: Markdown to ANSI rendering
//! - [`screens`]: Welcome, listing and `init` output
//!
//! # Examples
//!
//! ```bash
//! # Welcome screen with the available sheets
//! chta
//!
//! # View the Git cheat sheet, or open it at section 3
//! chta git
//! chta git 3
//!
//! # Pick a Git command to run, optionally narrowed down by a keyword
//! chta run git
//! chta run git --search commit
//!
//! # Search as you type
//! chta run git -i
//!
//! # Show the commands without running anything
//! chta run git --dry-run
//!
//! # Load completions into the current bash session
//! source <(chta completion bash)
//! ```

pub mod cli_args;
pub mod command_selection;
pub mod completions;
pub mod rendering;
pub mod screens;
pub mod viewer;
