//! Pulling runnable commands out of cheat sheet markdown.
//!
//! Extraction works line by line. Fenced code blocks are collected as a whole
//! and each of their lines is classified once the closing fence is reached, so
//! a block left open at the end of the document yields nothing.

use log::debug;

use crate::cheat_sheet::Command;

/// First tokens that are shell built-ins, never worth replaying.
const EXCLUDED_FIRST_TOKENS: &[&str] = &[
    "echo", "export", "set", "source", ".", "alias", "printf", "read", "eval", "exec", "which",
    "type", "unset", "shift", "return", "exit", "break", "continue",
];

/// Well-known command line tools that are always accepted.
const KNOWN_FIRST_TOKENS: &[&str] = &[
    "git", "docker", "kubectl", "terraform", "ansible", "vagrant", "npm", "yarn", "go", "python",
    "pip", "node", "java", "mvn", "make", "cmake", "cargo", "rustc", "gcc", "clang", "curl",
    "wget", "ssh", "scp", "rsync", "tar", "zip", "unzip", "aws", "gcloud", "az", "heroku",
    "firebase", "systemctl", "service", "crontab", "ps", "top", "htop", "find", "grep", "awk",
    "sed", "sort", "head", "tail",
];

const FENCE: &str = "```";

fn is_fence_delimiter(line: &str) -> bool {
    let backticks = line.chars().take_while(|c| *c == '`').count();
    backticks >= FENCE.len() && !line[backticks..].contains('`')
}

/// Extracts every runnable command from `content`, in document order.
///
/// Each command is described as `<heading>: <description>`, where the heading
/// is the closest markdown heading above its code block.
///
/// # Examples
///
/// ```
/// use chta_core::extraction::extract_commands;
///
/// let markdown = "## Basics\n```bash\ngit status\n```\n";
/// let commands = extract_commands(markdown);
///
/// assert_eq!(commands.len(), 1);
/// assert_eq!(commands[0].description, "Basics: Git status");
/// ```
#[must_use]
pub fn extract_commands(content: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut in_code_block = false;
    let mut block_lines: Vec<&str> = Vec::new();
    let mut last_heading = "";

    for line in content.lines().map(str::trim) {
        if is_fence_delimiter(line) {
            if in_code_block {
                for candidate in block_lines.drain(..) {
                    if is_executable_command(candidate) {
                        commands.push(Command::new(
                            candidate,
                            describe_under_heading(last_heading, candidate),
                        ));
                    }
                }
            } else {
                block_lines.clear();
            }

            in_code_block = !in_code_block;
            continue;
        }

        if in_code_block {
            if !line.is_empty() {
                block_lines.push(line);
            }
        } else if line.starts_with('#') {
            last_heading = line.trim_start_matches('#').trim();
        }
    }

    if in_code_block && !block_lines.is_empty() {
        debug!(
            "Dropping {} line(s) from a code block that was never closed",
            block_lines.len()
        );
    }

    commands
}

fn describe_under_heading(heading: &str, command: &str) -> String {
    format!("{heading}: {}", command_description(command))
}

/// `true` when the line has an `=` that is not part of `==` or `!=`.
fn has_assignment(line: &str) -> bool {
    let bytes = line.as_bytes();

    bytes.iter().enumerate().any(|(i, byte)| {
        if *byte != b'=' {
            return false;
        }

        let previous = i.checked_sub(1).map(|p| bytes[p]);
        let next = bytes.get(i + 1).copied();

        !matches!(previous, Some(b'=' | b'!')) && next != Some(b'=')
    })
}

/// Decides whether a line from a code block is a command worth running.
///
/// The rules are checked in a fixed order and the first one that applies
/// decides, so for example a placeholder such as `git clone <repo>` is
/// rejected even though `git` is a known tool.
#[must_use]
pub fn is_executable_command(line: &str) -> bool {
    let line = line.trim();

    // Blank or comment
    if line.is_empty() || line.starts_with('#') {
        return false;
    }

    // Placeholder such as `<repository>`
    if line.contains('<') && line.contains('>') {
        return false;
    }

    if line.starts_with("//") || line.starts_with("/*") {
        return false;
    }

    // Variable assignment; `--flag=value` style arguments still pass
    if has_assignment(line) && !line.contains("--") && !line.contains('-') {
        return false;
    }

    // Absolute path rather than a command
    if line.starts_with('/') && line.matches('/').count() > 2 {
        return false;
    }

    if line.starts_with("http://") || line.starts_with("https://") {
        return false;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first_token) = tokens.first().copied() else {
        return false;
    };

    if EXCLUDED_FIRST_TOKENS.contains(&first_token) {
        return false;
    }

    if first_token == "cd" && tokens.len() == 1 {
        return false;
    }

    if KNOWN_FIRST_TOKENS.contains(&first_token) {
        return true;
    }

    first_token.chars().any(|c| c.is_ascii_alphabetic())
        && !first_token.starts_with('$')
        && !first_token.starts_with('@')
        && !first_token.contains(' ')
}

/// Builds a short description for a command line.
///
/// An inline `# comment` wins. Otherwise the description is derived from the
/// first token, with `git` and `docker` also naming their subcommand.
#[must_use]
pub fn command_description(command: &str) -> String {
    if let Some((_, comment)) = command.split_once('#') {
        let comment = comment.trim();
        if !comment.is_empty() {
            return comment.to_string();
        }
    }

    let mut tokens = command.split_whitespace();
    let Some(first_token) = tokens.next() else {
        return "Command".to_string();
    };

    match (first_token, tokens.next()) {
        ("git", Some(subcommand)) => format!("Git {subcommand}"),
        ("git", None) => "Git command".to_string(),
        ("docker", Some(subcommand)) => format!("Docker {subcommand}"),
        ("docker", None) => "Docker command".to_string(),
        (other, _) => format!("{other} command"),
    }
}
