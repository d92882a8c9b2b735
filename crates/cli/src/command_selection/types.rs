//! Type definitions for command selection and search state.
//!
//! This module defines the core types used throughout the command selection
//! interface, including the outcome of a selection, confirmation answers and
//! the state behind the interactive search.

use chta_core::cheat_sheet::Command;
use chta_core::filtering::fuzzy_filter;

/// How a selection session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The user confirmed this command line, possibly edited.
    Run(String),
    Quit,
    Cancelled,
    /// Commands were only listed.
    DryRun,
}

/// Represents the user's choice when confirming a command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunChoice {
    Yes,
    No,
    Edit,
}

impl RunChoice {
    /// Interprets a confirmation answer. Anything unrecognised means no.
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => RunChoice::Yes,
            "e" | "edit" => RunChoice::Edit,
            _ => RunChoice::No,
        }
    }
}

/// A key press that means something to the interactive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Char(char),
    Backspace,
    Up,
    Down,
    Enter,
    Abort,
}

/// What the search loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    Continue,
    Select(Command),
    Abort,
}

/// Query and highlighted row of the interactive search.
///
/// The filtered list is derived from the query on demand, so the selection
/// always refers to a position in [`SearchState::filtered`].
#[derive(Debug, Clone)]
pub struct SearchState<'a> {
    commands: &'a [Command],
    pub query: String,
    pub selected_index: usize,
}

impl<'a> SearchState<'a> {
    #[must_use]
    pub fn new(commands: &'a [Command]) -> Self {
        Self::with_query(commands, "")
    }

    /// Starts the search with `query` already typed.
    #[must_use]
    pub fn with_query(commands: &'a [Command], query: &str) -> Self {
        Self {
            commands,
            query: query.to_string(),
            selected_index: 0,
        }
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&'a Command> {
        fuzzy_filter(self.commands, &self.query)
    }

    pub fn handle_key(&mut self, key: SearchKey) -> SearchAction {
        match key {
            SearchKey::Char(c) => {
                self.query.push(c);
                self.selected_index = 0;
            }
            SearchKey::Backspace => {
                self.query.pop();
                self.selected_index = 0;
            }
            SearchKey::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            SearchKey::Down => {
                if self.selected_index + 1 < self.filtered().len() {
                    self.selected_index += 1;
                }
            }
            SearchKey::Enter => {
                if let Some(command) = self.filtered().get(self.selected_index) {
                    return SearchAction::Select((*command).clone());
                }
            }
            SearchKey::Abort => return SearchAction::Abort,
        }

        SearchAction::Continue
    }
}
