//! Fixed screens: welcome, sheet listing and `init` guidance.

use std::io::Write;
use std::path::Path;

use heck::ToTitleCase;
use itertools::Itertools;

use chta_core::error::Result;

/// Display form of a sheet name, e.g. `git` becomes `Git`.
#[must_use]
pub fn sheet_title(name: &str) -> String {
    name.to_title_case()
}

fn bullet_list(names: &[String]) -> String {
    names.iter().map(|name| format!("  • {name}")).join("\n")
}

/// Shown when chta is started without arguments.
pub fn welcome<W: Write>(names: &[String], output: &mut W) -> Result<()> {
    writeln!(output, "Welcome to Chta - Fast CLI Cheat Sheet Tool")?;
    writeln!(output)?;

    if names.is_empty() {
        writeln!(output, "No cheat sheets found")?;
        writeln!(output, "Try: chta init  # to create the user directory")?;
        return Ok(());
    }

    writeln!(output, "Available cheat sheets:")?;
    writeln!(output, "{}", bullet_list(names))?;
    writeln!(output)?;
    writeln!(output, "Usage:")?;
    writeln!(output, "  chta <name>              # View cheat sheet")?;
    writeln!(output, "  chta <name> <section>    # Open at a section")?;
    writeln!(output, "  chta run <name>          # Pick a command to run")?;
    writeln!(output, "  chta run <name> -i       # Search commands as you type")?;
    writeln!(output, "  chta list                # List all sheets")?;
    writeln!(output, "  chta init                # Set up the user directory")?;

    Ok(())
}

pub fn list<W: Write>(names: &[String], output: &mut W) -> Result<()> {
    if names.is_empty() {
        writeln!(output, "No cheat sheets found")?;
        return Ok(());
    }

    writeln!(output, "Available cheat sheets:")?;
    writeln!(output, "{}", bullet_list(names))?;
    writeln!(output)?;
    writeln!(output, "Use 'chta <name>' to view a cheat sheet")?;

    Ok(())
}

/// Explains how to add sheets to the freshly created `directory`.
pub fn init_guidance<W: Write>(directory: &Path, output: &mut W) -> Result<()> {
    let directory = directory.display();

    writeln!(output, "User cheat sheets directory created!")?;
    writeln!(output)?;
    writeln!(output, "Directory: {directory}")?;
    writeln!(output)?;
    writeln!(output, "How to add your own cheat sheets:")?;
    writeln!(output, "  1. Create a .md file in the directory above")?;
    writeln!(output, "  2. Add commands in fenced code blocks under ## headings")?;
    writeln!(output, "  3. Use with: chta <filename-without-extension>")?;
    writeln!(output)?;
    writeln!(output, "Example:")?;
    writeln!(
        output,
        "  printf '## Usage\\n\\n```bash\\nmytool --help\\n```\\n' > {directory}/mytool.md"
    )?;
    writeln!(output, "  chta mytool          # View your cheat sheet")?;
    writeln!(output, "  chta run mytool      # Run commands interactively")?;
    writeln!(output)?;
    writeln!(
        output,
        "Your cheat sheets override built-in ones with the same name"
    )?;

    Ok(())
}
