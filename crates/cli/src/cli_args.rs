//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. A bare sheet name opens the section viewer. The subcommands run
//! commands, list sheets, set up the user directory and print completion
//! scripts.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Command-line arguments for the chta CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use chta_cli::cli_args::Args;
///
/// let args = Args::parse_from(["chta", "git", "3"]);
/// assert_eq!(args.sheet.as_deref(), Some("git"));
/// assert_eq!(args.section.as_deref(), Some("3"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "chta", version, about = "Fast CLI cheat sheet tool")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings YAML file.
    ///
    /// If not provided, defaults to `~/.chta/config.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    /// Name of the cheat sheet to view, e.g. `git`.
    ///
    /// With no name and no subcommand a welcome screen is shown.
    pub sheet: Option<String>,

    /// Section number to open the viewer at, starting from 1.
    pub section: Option<String>,

    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Action {
    /// Pick a command from a cheat sheet and run it.
    Run {
        /// Name of the cheat sheet.
        name: String,

        /// Show the commands without executing anything.
        #[arg(long, short = 'd', action)]
        dry_run: bool,

        /// Only offer commands containing this keyword.
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Filter commands as you type, selecting with the arrow keys.
        #[arg(long, short = 'i', action)]
        interactive: bool,
    },

    /// List all available cheat sheets.
    List,

    /// Create the user cheat sheet directory.
    Init,

    /// Print a shell completion script.
    ///
    /// Bash: `source <(chta completion bash)`.
    /// Fish: `chta completion fish | source`.
    Completion {
        /// Shell to generate the script for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["chta"]);

        assert!(args.config_path.is_none());
        assert!(args.sheet.is_none());
        assert!(args.section.is_none());
        assert!(args.action.is_none());
    }

    #[test]
    fn test_args_sheet_and_section() {
        let args = Args::parse_from(["chta", "docker", "2"]);

        assert_eq!(args.sheet, Some("docker".to_string()));
        assert_eq!(args.section, Some("2".to_string()));
        assert!(args.action.is_none());
    }

    #[test]
    fn test_args_section_is_not_validated_by_parser() {
        let args = Args::parse_from(["chta", "git", "abc"]);
        assert_eq!(args.section, Some("abc".to_string()));
    }

    #[test]
    fn test_args_run_short_flags() {
        let args = Args::parse_from(["chta", "run", "git", "-d", "-s", "commit", "-i"]);

        assert_eq!(
            args.action,
            Some(Action::Run {
                name: "git".to_string(),
                dry_run: true,
                search: Some("commit".to_string()),
                interactive: true,
            })
        );
    }

    #[test]
    fn test_args_run_long_flags() {
        let args = Args::parse_from([
            "chta",
            "run",
            "git",
            "--dry-run",
            "--search",
            "push",
            "--interactive",
        ]);

        assert_eq!(
            args.action,
            Some(Action::Run {
                name: "git".to_string(),
                dry_run: true,
                search: Some("push".to_string()),
                interactive: true,
            })
        );
    }

    #[test]
    fn test_args_run_defaults() {
        let args = Args::parse_from(["chta", "run", "docker"]);

        assert_eq!(
            args.action,
            Some(Action::Run {
                name: "docker".to_string(),
                dry_run: false,
                search: None,
                interactive: false,
            })
        );
    }

    #[test]
    fn test_args_list_and_init() {
        assert_eq!(Args::parse_from(["chta", "list"]).action, Some(Action::List));
        assert_eq!(Args::parse_from(["chta", "init"]).action, Some(Action::Init));
    }

    #[test]
    fn test_args_completion_shell() {
        assert_eq!(
            Args::parse_from(["chta", "completion", "bash"]).action,
            Some(Action::Completion { shell: Shell::Bash })
        );
        assert_eq!(
            Args::parse_from(["chta", "completion", "powershell"]).action,
            Some(Action::Completion {
                shell: Shell::PowerShell
            })
        );
        assert!(Args::try_parse_from(["chta", "completion"]).is_err());
        assert!(Args::try_parse_from(["chta", "completion", "tcsh"]).is_err());
    }

    #[test]
    fn test_args_global_config_path() {
        let before = Args::parse_from(["chta", "-c", "/custom/config.yml", "list"]);
        assert_eq!(before.config_path, Some("/custom/config.yml".to_string()));

        let after = Args::parse_from(["chta", "run", "git", "--config-path", "/other.yml"]);
        assert_eq!(after.config_path, Some("/other.yml".to_string()));
    }

    #[test]
    fn test_args_run_requires_name() {
        assert!(Args::try_parse_from(["chta", "run"]).is_err());
    }
}
