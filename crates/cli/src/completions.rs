//! Shell completion scripts.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli_args::Args;

/// Writes the completion script for `shell` to `output`.
pub fn generate<W: Write>(shell: Shell, output: &mut W) {
    let mut command = Args::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, output);
}
