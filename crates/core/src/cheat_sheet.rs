use std::fmt::{Display, Formatter};

/// A cheat sheet located by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatSheet {
    pub name: String,
    pub path: String,
    pub content: String,
}

/// A runnable line pulled out of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub command: String,
    pub description: String,
}

impl Command {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.description, self.command)
    }
}

/// One level-2 section of a cheat sheet. Numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub number: usize,
    pub title: String,
    pub content: String,
}

impl Display for Section {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}. {}", self.number, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let command = Command::new("git status", "Basics: Git status");
        assert_eq!(format!("{command}"), "Basics: Git status (git status)");
    }

    #[test]
    fn test_section_display() {
        let section = Section {
            number: 3,
            title: "Branching".to_string(),
            content: String::new(),
        };
        assert_eq!(format!("{section}"), "3. Branching");
    }
}
