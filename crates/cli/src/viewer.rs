//! Section viewer with a table of contents column.
//!
//! The screen is split in two: a fixed-width table of contents on the left,
//! with `▶` marking the current section, and the rendered section on the
//! right. Navigation is line based, so the viewer works from any input.

use std::io::{BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use itertools::{EitherOrBoth, Itertools};
use log::debug;

use chta_core::cheat_sheet::Section;
use chta_core::error::{Error, Result};

use crate::command_selection::input::{pause, prompt};
use crate::rendering::Renderer;
use crate::screens::sheet_title;

/// Width of the table of contents column
pub const TOC_WIDTH: usize = 30;
const COLUMN_SEPARATOR: &str = " │ ";
const TOC_RULE_WIDTH: usize = 25;
const HEADER_RULE_WIDTH: usize = 70;

/// Parses the optional section argument. Sections start at 1.
///
/// # Errors
///
/// Returns [`Error::InvalidSection`] for anything but a positive integer.
pub fn parse_section_number(argument: Option<&str>) -> Result<usize> {
    let Some(argument) = argument else {
        return Ok(1);
    };

    match argument.trim().parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(Error::InvalidSection(argument.to_string())),
    }
}

/// Columns left for the rendered section next to the table of contents.
#[must_use]
pub fn content_width(columns: usize) -> usize {
    columns.saturating_sub(TOC_WIDTH + COLUMN_SEPARATOR.chars().count())
}

/// Pads or truncates `line` to exactly `width` characters.
fn fit_column(line: &str, width: usize) -> String {
    if line.chars().count() > width {
        let kept: String = line.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        format!("{line:<width$}")
    }
}

pub struct SectionViewer<'a> {
    name: &'a str,
    sections: &'a [Section],
    renderer: &'a Renderer,
    current: usize,
}

impl<'a> SectionViewer<'a> {
    /// A viewer opened at section `start`, or at 1 when `start` is out of range.
    #[must_use]
    pub fn new(name: &'a str, sections: &'a [Section], renderer: &'a Renderer, start: usize) -> Self {
        let current = if (1..=sections.len()).contains(&start) {
            start
        } else {
            debug!("Section {start} is out of range, starting at 1");
            1
        };

        Self {
            name,
            sections,
            renderer,
            current,
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    fn table_of_contents(&self) -> Vec<String> {
        let mut lines = vec![
            "Table of Contents".to_string(),
            "━".repeat(TOC_RULE_WIDTH),
        ];

        for section in self.sections {
            let marker = if section.number == self.current {
                "▶ "
            } else {
                "  "
            };
            lines.push(format!("{marker}{section}"));
        }

        lines.push("━".repeat(TOC_RULE_WIDTH));
        lines.push("Navigation:".to_string());
        lines.push("  [1-9] Jump to section".to_string());
        lines.push("  [n]ext  [p]rev".to_string());
        lines.push("  [h]elp  [q]uit".to_string());

        lines
    }

    fn current_section(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.number == self.current)
    }

    /// The table of contents and the current section, side by side.
    fn layout(&self) -> String {
        let content = self
            .current_section()
            .map(|section| self.renderer.render_or_raw(&section.content))
            .unwrap_or_default();

        let toc = self.table_of_contents();

        let lines = toc
            .iter()
            .zip_longest(content.lines())
            .map(|pair| {
                let (toc, body) = match pair {
                    EitherOrBoth::Both(toc, body) => (toc.as_str(), body),
                    EitherOrBoth::Left(toc) => (toc.as_str(), ""),
                    EitherOrBoth::Right(body) => ("", body),
                };
                format!("{}{COLUMN_SEPARATOR}{body}", fit_column(toc, TOC_WIDTH))
            })
            .join("\n");

        lines
    }

    fn draw<W: Write>(&self, output: &mut W) -> Result<()> {
        queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(
            output,
            "{} Cheat Sheet - Interactive Navigation",
            sheet_title(self.name)
        )?;
        writeln!(output, "{}", "═".repeat(HEADER_RULE_WIDTH))?;
        writeln!(output)?;
        writeln!(output, "{}", self.layout())?;
        writeln!(output)?;
        writeln!(
            output,
            "Section {}/{} | Press number (1-{}), n/p, h for help, q to quit",
            self.current,
            self.sections.len(),
            self.sections.len()
        )?;
        Ok(())
    }

    fn draw_help<W: Write>(&self, output: &mut W) -> Result<()> {
        let count = self.sections.len();

        queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(output, "{} Cheat Sheet - Navigation Help", sheet_title(self.name))?;
        writeln!(output, "{}", "═".repeat(50))?;
        writeln!(output)?;
        writeln!(output, "Navigation Commands:")?;
        writeln!(output, "  1-{count:<9} Jump directly to section number")?;
        writeln!(output, "  n, next     Go to next section")?;
        writeln!(output, "  p, prev     Go to previous section")?;
        writeln!(output, "  h, help, ?  Show this help")?;
        writeln!(output, "  q, quit     Exit cheat sheet viewer")?;
        writeln!(output)?;
        writeln!(output, "Tips:")?;
        writeln!(output, "  • Use 'chta {} 3' to open directly at section 3", self.name)?;
        writeln!(output, "  • The current section is marked with ▶")?;
        writeln!(output, "  • Content width adapts to your terminal size")?;
        writeln!(output)?;
        Ok(())
    }

    /// Runs the viewer until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `output` fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        let count = self.sections.len();

        loop {
            self.draw(output)?;

            let Some(answer) = prompt("Command: ", input, output)? else {
                return Ok(());
            };

            let command = answer.to_lowercase();
            let is_help = matches!(command.as_str(), "h" | "help" | "?");

            let warning = match command.as_str() {
                "q" | "quit" | "exit" => {
                    writeln!(output, "Goodbye!")?;
                    return Ok(());
                }
                "h" | "help" | "?" => {
                    self.draw_help(output)?;
                    None
                }
                "n" | "next" => {
                    if self.current < count {
                        self.current += 1;
                        None
                    } else {
                        Some("Already at last section".to_string())
                    }
                }
                "p" | "prev" | "previous" => {
                    if self.current > 1 {
                        self.current -= 1;
                        None
                    } else {
                        Some("Already at first section".to_string())
                    }
                }
                other => match other.parse::<usize>() {
                    Ok(number) if (1..=count).contains(&number) => {
                        self.current = number;
                        None
                    }
                    _ => Some(format!(
                        "Invalid input '{answer}'. Use 1-{count}, n/p, h, or q"
                    )),
                },
            };

            let needs_pause = is_help || warning.is_some();

            if let Some(warning) = warning {
                writeln!(output, "{warning}")?;
            }

            if needs_pause && !pause(input, output)? {
                return Ok(());
            }
        }
    }
}
