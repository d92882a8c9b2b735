use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cheat sheet '{}' not found{}", .name, did_you_mean(.suggestions))]
    SheetNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("No executable commands found in {} cheat sheet", .name)]
    NoCommands { name: String },

    #[error("No commands found matching '{}' in {} cheat sheet", .term, .name)]
    NoMatchingCommands { term: String, name: String },

    #[error("No sections found in {} cheat sheet", .name)]
    NoSections { name: String },

    #[error("Invalid section number '{}'. Must be a positive integer.", .0)]
    InvalidSection(String),

    #[error("The sub process exited with a non-success code{}.", exit_code_suffix(.0))]
    SubProcessExit(Option<i32>),

    #[error("Error with sub process: {}", _0)]
    SubProcess(std::io::Error),

    #[error("Failed to read input: {}", .0)]
    Stdio(std::io::Error),

    #[error("Failed to write output: {}", .0)]
    Output(#[from] std::io::Error),

    #[error("IO error with {} at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error scanning cheat sheets under `{}`: {}", .path, .original)]
    Walk {
        path: String,
        original: walkdir::Error,
    },

    #[error("Error reading settings file at `{}`: {}", .path, .original)]
    Yaml {
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Invalid setting: {}", .0)]
    InvalidSetting(String),

    #[error("Failed to render markdown: {}", .0)]
    Render(String),
}

impl Error {
    pub fn sheet_not_found(name: String, suggestions: Vec<String>) -> Self {
        Self::SheetNotFound { name, suggestions }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(path: String, original: serde_yaml::Error) -> Self {
        Self::Yaml { path, original }
    }

    /// Exit code the process should report for this error.
    ///
    /// A failed child command hands back its own code; everything else is `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::SubProcessExit(Some(code)) => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(". Did you mean '{only}'?"),
        many => format!(". Did you mean: {}?", many.join(", ")),
    }
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" ({code})"),
        None => String::new(),
    }
}
