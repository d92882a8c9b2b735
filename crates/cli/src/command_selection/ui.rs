use std::io::{stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::debug;

use chta_core::cheat_sheet::Command;
use chta_core::error::Result;

use super::types::{SearchAction, SearchKey, SearchState};

const RULE_WIDTH: usize = 60;

/// Keeps the terminal in raw mode on the alternate screen while alive.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enables raw mode and switches to the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, Drop puts the terminal back even if the switch fails
        let guard = RawModeGuard { _private: () };
        stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let mut stdout = stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(cursor::Show);
        let _ = disable_raw_mode();
    }
}

/// Maps a terminal key event onto a search key, ignoring everything else.
#[must_use]
pub fn decode_key(key_event: KeyEvent) -> Option<SearchKey> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let control = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') if control => Some(SearchKey::Abort),
        KeyCode::Char(c)
            if c.is_ascii()
                && !c.is_ascii_control()
                && !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(SearchKey::Char(c))
        }
        KeyCode::Backspace | KeyCode::Delete => Some(SearchKey::Backspace),
        KeyCode::Up => Some(SearchKey::Up),
        KeyCode::Down => Some(SearchKey::Down),
        KeyCode::Enter => Some(SearchKey::Enter),
        KeyCode::Esc => Some(SearchKey::Abort),
        _ => None,
    }
}

/// How many of `len` matches fit on screen. The list is drawn from the top.
fn visible_rows(len: usize, rows: usize) -> usize {
    len.min(rows.max(1))
}

fn next_line<W: Write>(output: &mut W) -> Result<()> {
    queue!(output, cursor::MoveToNextLine(1))?;
    Ok(())
}

fn draw<W: Write>(output: &mut W, title: &str, state: &SearchState<'_>, rows: usize) -> Result<()> {
    let filtered = state.filtered();

    queue!(
        output,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(format!("Interactive Search for {title} Commands")),
        SetAttribute(Attribute::Reset),
    )?;
    next_line(output)?;
    queue!(
        output,
        Print("Type to filter, ↑↓ to navigate, Enter to select, Esc to quit")
    )?;
    next_line(output)?;
    queue!(output, Print("─".repeat(RULE_WIDTH)))?;
    next_line(output)?;
    queue!(output, Print(format!("Search: {}_", state.query)))?;
    next_line(output)?;
    next_line(output)?;

    if filtered.is_empty() {
        queue!(
            output,
            SetForegroundColor(Color::Red),
            Print(format!("No commands match '{}'", state.query)),
            SetForegroundColor(Color::Reset),
        )?;
        next_line(output)?;
    } else {
        let shown = visible_rows(filtered.len(), rows);

        for (i, command) in filtered.iter().take(shown).enumerate() {
            if i == state.selected_index {
                queue!(
                    output,
                    SetAttribute(Attribute::Bold),
                    SetForegroundColor(Color::Yellow),
                    Print(format!("▶ {}. {}", i + 1, command.description)),
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(Color::Reset),
                )?;
            } else {
                queue!(output, Print(format!("  {}. {}", i + 1, command.description)))?;
            }
            next_line(output)?;
            queue!(output, Print(format!("    $ {}", command.command)))?;
            next_line(output)?;
        }

        if filtered.len() > shown {
            next_line(output)?;
            queue!(
                output,
                Print(format!("... and {} more commands", filtered.len() - shown))
            )?;
            next_line(output)?;
        }
    }

    output.flush()?;
    Ok(())
}

/// Filters `commands` as the user types and returns the chosen one.
///
/// The terminal is in raw mode for the duration of the search only; it is
/// restored before this returns, whatever the outcome. `None` means the
/// search was aborted.
///
/// # Errors
///
/// Returns an error if the terminal cannot be controlled or read from.
pub fn search_commands(
    title: &str,
    commands: &[Command],
    initial_query: &str,
    rows: usize,
) -> Result<Option<Command>> {
    let guard = RawModeGuard::acquire()?;
    let mut stdout = stdout();
    let mut state = SearchState::with_query(commands, initial_query);

    loop {
        draw(&mut stdout, title, &state, rows)?;

        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        let Some(key) = decode_key(key_event) else {
            continue;
        };

        match state.handle_key(key) {
            SearchAction::Continue => {}
            SearchAction::Select(command) => {
                drop(guard);
                debug!("Search selected `{}`", command.command);
                return Ok(Some(command));
            }
            SearchAction::Abort => {
                drop(guard);
                debug!("Search aborted with query `{}`", state.query);
                return Ok(None);
            }
        }
    }
}
