//! Narrowing an extracted command list down by a search term.

use crate::cheat_sheet::Command;

/// Case-sensitive substring search over the command text and description.
///
/// Used by `chta run --search`, before any paging happens.
#[must_use]
pub fn filter_by_search(commands: &[Command], term: &str) -> Vec<Command> {
    commands
        .iter()
        .filter(|c| c.command.contains(term) || c.description.contains(term))
        .cloned()
        .collect()
}

/// Case-insensitive filter used by the interactive search.
///
/// An empty query keeps every command, in order.
#[must_use]
pub fn fuzzy_filter<'a>(commands: &'a [Command], query: &str) -> Vec<&'a Command> {
    if query.is_empty() {
        return commands.iter().collect();
    }

    let query = query.to_lowercase();

    commands
        .iter()
        .filter(|c| {
            c.command.to_lowercase().contains(&query)
                || c.description.to_lowercase().contains(&query)
        })
        .collect()
}
