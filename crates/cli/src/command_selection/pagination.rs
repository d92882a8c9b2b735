//! Line-oriented paging through extracted commands.

use std::io::{BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use log::debug;

use chta_core::cheat_sheet::Command;
use chta_core::config::DEFAULT_PAGE_SIZE;
use chta_core::error::{Error, Result};
use chta_core::filtering::filter_by_search;

use super::input::{confirm_command, prompt};
use super::types::SelectionOutcome;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingOptions {
    pub page_size: usize,
    pub dry_run: bool,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            dry_run: false,
        }
    }
}

/// Narrows `commands` to those matching `term`, if a term was given.
///
/// # Errors
///
/// Returns [`Error::NoMatchingCommands`] when the term matches nothing.
pub fn apply_search(commands: Vec<Command>, term: Option<&str>, name: &str) -> Result<Vec<Command>> {
    let Some(term) = term else {
        return Ok(commands);
    };

    let filtered = filter_by_search(&commands, term);
    debug!("Search `{term}` kept {} of {} commands", filtered.len(), commands.len());

    if filtered.is_empty() {
        return Err(Error::NoMatchingCommands {
            term: term.to_string(),
            name: name.to_string(),
        });
    }

    Ok(filtered)
}

/// Lets the user page through `commands` and pick one to run.
///
/// Commands are numbered from 1 across all pages. A picked command goes
/// through [`confirm_command`] before it is returned as
/// [`SelectionOutcome::Run`]. With `dry_run` set every command is printed
/// and nothing is read from `input`.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn select_command<R: BufRead, W: Write>(
    title: &str,
    commands: &[Command],
    options: &PagingOptions,
    input: &mut R,
    output: &mut W,
) -> Result<SelectionOutcome> {
    print_title(title, output)?;

    if options.dry_run {
        for (i, command) in commands.iter().enumerate() {
            print_command(i, command, output)?;
        }
        writeln!(output, "Dry run mode - commands shown but not executed")?;
        return Ok(SelectionOutcome::DryRun);
    }

    if commands.is_empty() {
        writeln!(output, "No commands to choose from")?;
        return Ok(SelectionOutcome::Quit);
    }

    let page_size = options.page_size.max(1);
    let total_pages = commands.len().div_ceil(page_size);
    let mut page = 0;

    loop {
        let start = page * page_size;
        let end = (start + page_size).min(commands.len());

        writeln!(
            output,
            "Page {} of {} ({}-{} of {} commands)",
            page + 1,
            total_pages,
            start + 1,
            end,
            commands.len()
        )?;
        writeln!(output)?;

        for (i, command) in commands.iter().enumerate().take(end).skip(start) {
            print_command(i, command, output)?;
        }

        print_navigation(page, total_pages, commands.len(), output)?;

        let Some(answer) = prompt("\nEnter selection: ", input, output)? else {
            return Ok(SelectionOutcome::Quit);
        };

        match answer.to_lowercase().as_str() {
            "q" | "quit" => {
                writeln!(output, "Goodbye!")?;
                return Ok(SelectionOutcome::Quit);
            }
            "n" | "next" => {
                if page + 1 < total_pages {
                    page += 1;
                    clear_screen(output)?;
                    print_title(title, output)?;
                } else {
                    writeln!(output, "Already at last page")?;
                }
            }
            "p" | "prev" => {
                if page > 0 {
                    page -= 1;
                    clear_screen(output)?;
                    print_title(title, output)?;
                } else {
                    writeln!(output, "Already at first page")?;
                }
            }
            "h" | "help" | "?" => print_help(commands.len(), output)?,
            other => match other.parse::<usize>() {
                Ok(number) if (1..=commands.len()).contains(&number) => {
                    return confirm_command(&commands[number - 1].command, input, output);
                }
                _ => writeln!(
                    output,
                    "Invalid selection. Enter 1-{}, n/p for navigation, or q to quit\n",
                    commands.len()
                )?,
            },
        }
    }
}

fn clear_screen<W: Write>(output: &mut W) -> Result<()> {
    queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

fn print_title<W: Write>(title: &str, output: &mut W) -> Result<()> {
    writeln!(output, "{title}")?;
    writeln!(output, "{}", "─".repeat(RULE_WIDTH))?;
    writeln!(output)?;
    Ok(())
}

fn print_command<W: Write>(index: usize, command: &Command, output: &mut W) -> Result<()> {
    writeln!(output, "{:>2}. {}", index + 1, command.description)?;
    writeln!(output, "    $ {}", command.command)?;
    writeln!(output)?;
    Ok(())
}

fn print_navigation<W: Write>(
    page: usize,
    total_pages: usize,
    count: usize,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Navigation:")?;
    if page > 0 {
        writeln!(output, "  p/prev - Previous page")?;
    }
    if page + 1 < total_pages {
        writeln!(output, "  n/next - Next page")?;
    }
    writeln!(output, "  1-{count} - Select command number")?;
    writeln!(output, "  h/help - Show help")?;
    writeln!(output, "  q/quit - Quit")?;
    Ok(())
}

fn print_help<W: Write>(count: usize, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Commands:")?;
    writeln!(output, "  1-{count:<8} Select a command to run")?;
    writeln!(output, "  n, next     Go to the next page")?;
    writeln!(output, "  p, prev     Go to the previous page")?;
    writeln!(output, "  h, help, ?  Show this help")?;
    writeln!(output, "  q, quit     Quit without running anything")?;
    writeln!(output)?;
    writeln!(
        output,
        "A selected command is shown in full before it runs. Answer y to run it, e to edit it first."
    )?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn commands(count: usize) -> Vec<Command> {
        (1..=count)
            .map(|i| Command::new(format!("tool run{i}"), format!("Section: tool command {i}")))
            .collect()
    }

    fn run(commands: &[Command], options: PagingOptions, answers: &str) -> (SelectionOutcome, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = select_command("Test Commands", commands, &options, &mut input, &mut output)
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    fn paged(page_size: usize) -> PagingOptions {
        PagingOptions {
            page_size,
            dry_run: false,
        }
    }

    #[test]
    fn test_select_and_confirm() {
        let (outcome, output) = run(&commands(3), PagingOptions::default(), "2\ny\n");

        assert_eq!(outcome, SelectionOutcome::Run("tool run2".to_string()));
        assert!(output.contains("Page 1 of 1 (1-3 of 3 commands)"));
        assert!(output.contains("About to run: tool run2"));
    }

    #[test]
    fn test_select_edit_and_confirm() {
        let (outcome, _) = run(&commands(3), PagingOptions::default(), "1\ne\ntool other\ny\n");
        assert_eq!(outcome, SelectionOutcome::Run("tool other".to_string()));
    }

    #[test]
    fn test_select_then_decline() {
        let (outcome, _) = run(&commands(3), PagingOptions::default(), "1\nn\n");
        assert_eq!(outcome, SelectionOutcome::Cancelled);
    }

    #[test]
    fn test_numbers_are_global_across_pages() {
        let (outcome, output) = run(&commands(25), paged(10), "n\n12\ny\n");

        assert!(output.contains("Page 2 of 3 (11-20 of 25 commands)"));
        assert_eq!(outcome, SelectionOutcome::Run("tool run12".to_string()));
    }

    #[test]
    fn test_page_boundaries_warn() {
        let (outcome, output) = run(&commands(15), paged(10), "p\nn\nnext\nq\n");

        assert!(output.contains("Already at first page"));
        assert!(output.contains("Already at last page"));
        assert!(output.contains("Page 2 of 2 (11-15 of 15 commands)"));
        assert_eq!(outcome, SelectionOutcome::Quit);
    }

    #[test]
    fn test_invalid_selection_warns_and_continues() {
        let (outcome, output) = run(&commands(3), PagingOptions::default(), "0\n4\nabc\nQUIT\n");

        assert_eq!(
            output.matches("Invalid selection. Enter 1-3").count(),
            3
        );
        assert_eq!(outcome, SelectionOutcome::Quit);
    }

    #[test]
    fn test_help_keeps_the_page() {
        let (outcome, output) = run(&commands(3), PagingOptions::default(), "?\nq\n");

        assert!(output.contains("Show this help"));
        assert_eq!(output.matches("Page 1 of 1").count(), 2);
        assert_eq!(outcome, SelectionOutcome::Quit);
    }

    #[test]
    fn test_eof_quits() {
        let (outcome, _) = run(&commands(3), PagingOptions::default(), "");
        assert_eq!(outcome, SelectionOutcome::Quit);
    }

    #[test]
    fn test_dry_run_lists_everything_without_reading() {
        let options = PagingOptions {
            page_size: 2,
            dry_run: true,
        };
        let (outcome, output) = run(&commands(5), options, "1\ny\n");

        assert_eq!(outcome, SelectionOutcome::DryRun);
        assert!(output.contains(" 5. Section: tool command 5"));
        assert!(output.contains("    $ tool run5"));
        assert!(!output.contains("About to run"));
    }

    #[test]
    fn test_apply_search() {
        let all = vec![
            Command::new("git status", "Basics: Git status"),
            Command::new("git commit -m \"x\"", "Basics: Git commit"),
        ];

        assert_eq!(apply_search(all.clone(), None, "git").unwrap().len(), 2);
        assert_eq!(apply_search(all.clone(), Some("commit"), "git").unwrap().len(), 1);

        // Matching is case-sensitive
        let result = apply_search(all, Some("COMMIT"), "git");
        assert!(matches!(
            result,
            Err(Error::NoMatchingCommands { term, name }) if term == "COMMIT" && name == "git"
        ));
    }
}
