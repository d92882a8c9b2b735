//! Chta Core Library
//!
//! This crate provides the core functionality for chta, a command-line cheat
//! sheet viewer that reads markdown cheat sheets, pulls the shell commands out
//! of their code blocks and runs a chosen one.
//!
//! # Key Features
//!
//! - **Sheet Resolution**: User sheets override bundled ones, with "did you mean" suggestions
//! - **Command Extraction**: Line-based classification of fenced code block contents
//! - **Sections**: Splitting a sheet into numbered `##` sections for the viewer
//! - **Filtering**: Plain and case-insensitive search over extracted commands
//! - **Settings**: Optional YAML settings file
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! Resolving a sheet and listing its commands:
//!
//! ```no_run
//! use chta_core::config::Settings;
//! use chta_core::extraction::extract_commands;
//! use chta_core::file_handling::SheetStore;
//!
//! let store = SheetStore::from_settings(&Settings::default());
//! let sheet = store.resolve("git")?;
//! for command in extract_commands(&sheet.content) {
//!     println!("{command}");
//! }
//! # Ok::<(), chta_core::error::Error>(())
//! ```

pub mod bundled;
pub mod cheat_sheet;
pub mod config;
pub mod error;
pub mod execution;
pub mod extraction;
pub mod file_handling;
pub mod filtering;
pub mod sections;
