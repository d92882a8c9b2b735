use std::io::{BufRead, Write};

use log::debug;

use chta_core::error::{Error, Result};

use super::types::{RunChoice, SelectionOutcome};

/// Reads one trimmed line, or `None` once input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(Error::Stdio)?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Prints `prompt` without a newline and reads the answer.
pub fn prompt<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    read_line(input)
}

/// Waits for the user to press Enter. Returns `false` at end of input.
pub fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    Ok(prompt("Press Enter to continue...", input, output)?.is_some())
}

/// Confirms with the user whether the command should be run
///
/// Answering `e`/`edit` asks for a replacement command line and then asks
/// again. End of input counts as quitting.
pub fn confirm_command<R: BufRead, W: Write>(
    command: &str,
    input: &mut R,
    output: &mut W,
) -> Result<SelectionOutcome> {
    let mut command = command.to_string();

    loop {
        writeln!(output, "About to run: {command}")?;

        let Some(answer) = prompt("Continue? ([y]es/[e]dit/[N]o): ", input, output)? else {
            return Ok(SelectionOutcome::Quit);
        };

        match RunChoice::from_answer(&answer) {
            RunChoice::Yes => return Ok(SelectionOutcome::Run(command)),
            RunChoice::No => {
                writeln!(output, "Command cancelled")?;
                return Ok(SelectionOutcome::Cancelled);
            }
            RunChoice::Edit => {
                let Some(replacement) =
                    prompt("New command (blank keeps the current one): ", input, output)?
                else {
                    return Ok(SelectionOutcome::Quit);
                };

                if !replacement.is_empty() {
                    debug!("Command edited from `{command}` to `{replacement}`");
                    command = replacement;
                }
            }
        }
    }
}
