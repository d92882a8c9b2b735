use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Builds the process that runs `command_line` through a shell.
///
/// With no configured shell this is `/bin/sh -c` on POSIX systems and
/// `cmd /C` on Windows.
#[must_use]
pub fn shell_command(command_line: &str, shell: Option<&str>) -> Command {
    let mut command = match shell {
        Some(shell) => {
            let mut command = Command::new(shell);
            command.arg("-c");
            command
        }
        None if cfg!(windows) => {
            let mut command = Command::new("cmd");
            command.arg("/C");
            command
        }
        None => {
            let mut command = Command::new("/bin/sh");
            command.arg("-c");
            command
        }
    };

    command.arg(command_line);
    command
}

/// Executes a command with the standard streams inherited.
///
/// # Errors
///
/// Returns an error if the command cannot be started or exits with non-zero status.
pub fn execute_command(mut command: Command) -> Result<()> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    info!("Executing {:?}", command);

    let status = command
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(Error::SubProcess)?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit(status.code()))
    }
}
