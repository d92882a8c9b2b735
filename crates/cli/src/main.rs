use std::io::{stdin, stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use chta_cli::cli_args::{Action, Args};
use chta_cli::command_selection::{
    apply_search, confirm_command, search_commands, select_command, PagingOptions,
    SelectionOutcome,
};
use chta_cli::completions;
use chta_cli::rendering::{terminal_width, Renderer};
use chta_cli::screens::{self, sheet_title};
use chta_cli::viewer::{content_width, parse_section_number, SectionViewer};
use chta_core::cheat_sheet::Command;
use chta_core::config::{self, Settings};
use chta_core::error::{Error, Result};
use chta_core::execution;
use chta_core::extraction::extract_commands;
use chta_core::file_handling::SheetStore;
use chta_core::sections::parse_sections;

const RULE_WIDTH: usize = 50;

/// Load settings and build the sheet store they describe
fn initialize(args: &Args) -> Result<(Settings, SheetStore)> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");

    let settings = config::load_settings(&config_path)?;
    let store = SheetStore::from_settings(&settings);
    debug!("User sheet directory: `{}`", store.user_directory().display());

    Ok((settings, store))
}

fn view_sheet(
    store: &SheetStore,
    settings: &Settings,
    name: &str,
    section: Option<&str>,
) -> Result<()> {
    // Validate the argument before touching the filesystem
    let start = parse_section_number(section)?;

    let sheet = store.resolve(name)?;
    let sections = parse_sections(&sheet.content);
    if sections.is_empty() {
        return Err(Error::NoSections {
            name: name.to_string(),
        });
    }

    let renderer = Renderer::from_settings(settings, content_width(terminal_width()));
    let mut viewer = SectionViewer::new(name, &sections, &renderer, start);

    viewer.run(&mut stdin().lock(), &mut stdout())
}

fn load_commands(store: &SheetStore, name: &str) -> Result<Vec<Command>> {
    let sheet = store.resolve(name)?;
    let commands = extract_commands(&sheet.content);
    info!("Extracted {} commands from `{}`", commands.len(), sheet.path);

    if commands.is_empty() {
        return Err(Error::NoCommands {
            name: name.to_string(),
        });
    }

    Ok(commands)
}

/// Pick a command with the interactive search, then confirm it
fn search_and_confirm(
    name: &str,
    commands: &[Command],
    search: Option<&str>,
    settings: &Settings,
    dry_run: bool,
) -> Result<SelectionOutcome> {
    let Some(selected) = search_commands(
        &sheet_title(name),
        commands,
        search.unwrap_or_default(),
        settings.search_rows,
    )?
    else {
        println!("Search cancelled");
        return Ok(SelectionOutcome::Cancelled);
    };

    println!("Selected: {}", selected.description);
    println!("Command: {}", selected.command);

    if dry_run {
        println!("Dry run mode - command not executed");
        return Ok(SelectionOutcome::DryRun);
    }

    confirm_command(&selected.command, &mut stdin().lock(), &mut stdout())
}

fn run_sheet(
    store: &SheetStore,
    settings: &Settings,
    name: &str,
    dry_run: bool,
    search: Option<&str>,
    interactive: bool,
) -> Result<()> {
    let commands = load_commands(store, name)?;

    let outcome = if interactive {
        search_and_confirm(name, &commands, search, settings, dry_run)?
    } else {
        let commands = apply_search(commands, search, name)?;
        let options = PagingOptions {
            page_size: settings.page_size,
            dry_run,
        };

        select_command(
            &format!("Interactive {} Commands", sheet_title(name)),
            &commands,
            &options,
            &mut stdin().lock(),
            &mut stdout(),
        )?
    };

    let command_line = match outcome {
        SelectionOutcome::Run(command_line) => command_line,
        other => {
            debug!("Nothing to run: {other:?}");
            return Ok(());
        }
    };

    println!("Executing: {command_line}");
    println!("{}", "─".repeat(RULE_WIDTH));
    stdout().flush()?;

    execution::execute_command(execution::shell_command(
        &command_line,
        settings.shell.as_deref(),
    ))
}

fn init(store: &SheetStore) -> Result<()> {
    let directory = store.create_user_directory()?;
    info!("Created `{}`", directory.display());

    screens::init_guidance(directory, &mut stdout())
}

fn execute() -> Result<()> {
    let args = Args::parse();

    // Completion scripts do not depend on settings
    if let Some(Action::Completion { shell }) = args.action {
        completions::generate(shell, &mut stdout());
        return Ok(());
    }

    let (settings, store) = initialize(&args)?;

    match &args.action {
        Some(Action::Run {
            name,
            dry_run,
            search,
            interactive,
        }) => run_sheet(
            &store,
            &settings,
            name,
            *dry_run,
            search.as_deref(),
            *interactive,
        ),
        Some(Action::List) => screens::list(&store.list_sheet_names()?, &mut stdout()),
        Some(Action::Init) => init(&store),
        Some(Action::Completion { .. }) => Ok(()),
        None => match &args.sheet {
            Some(name) => view_sheet(&store, &settings, name, args.section.as_deref()),
            None => screens::welcome(&store.list_sheet_names()?, &mut stdout()),
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
