//! Splitting a cheat sheet into numbered level-2 sections for the viewer.

use crate::cheat_sheet::Section;

const INTRODUCTION_TITLE: &str = "Introduction";

/// Returns the title when `line` is a level-2 heading such as `## Branches`.
fn level_two_title(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

/// Parses `content` into sections, one per `## ` heading.
///
/// Text before the first heading becomes an `Introduction` section when it is
/// not blank. Each section's content includes its own heading line. Sections
/// are numbered from 1 in document order.
#[must_use]
pub fn parse_sections(content: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut title = INTRODUCTION_TITLE.to_string();
    let mut lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(heading) = level_two_title(line) {
            push_section(&mut sections, &title, &lines);
            title = heading.to_string();
            lines = vec![line];
        } else {
            lines.push(line);
        }
    }

    push_section(&mut sections, &title, &lines);

    sections
}

fn push_section(sections: &mut Vec<Section>, title: &str, lines: &[&str]) {
    let is_introduction = sections.is_empty() && title == INTRODUCTION_TITLE;
    if is_introduction && lines.iter().all(|line| line.trim().is_empty()) {
        return;
    }

    sections.push(Section {
        number: sections.len() + 1,
        title: title.to_string(),
        content: lines.join("\n"),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_with_introduction() {
        let content = "# Git\n\nIntro text.\n\n## Basics\ngit status\n\n## Remote\ngit push\n";
        let sections = parse_sections(content);

        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Introduction", "Basics", "Remote"]);

        let numbers: Vec<usize> = sections.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        assert!(sections[0].content.contains("Intro text."));
        assert_eq!(sections[1].content, "## Basics\ngit status\n");
        assert_eq!(sections[2].content, "## Remote\ngit push");
    }

    #[test]
    fn test_sections_without_introduction() {
        let sections = parse_sections("## Basics\ngit status\n## Remote\ngit push");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Basics");
        assert_eq!(sections[0].number, 1);
    }

    #[test]
    fn test_introduction_only() {
        let sections = parse_sections("# Title\n\nJust some notes.");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Introduction");
        assert_eq!(sections[0].content, "# Title\n\nJust some notes.");
    }

    #[test]
    fn test_deeper_headings_do_not_split() {
        let sections = parse_sections("## Basics\n### Detail\ntext\n##NoSpace\n");

        assert_eq!(sections.len(), 1);
        assert!(sections[0].content.contains("### Detail"));
        assert!(sections[0].content.contains("##NoSpace"));
    }

    #[test]
    fn test_empty_document_has_no_sections() {
        assert!(parse_sections("").is_empty());
        assert!(parse_sections("\n  \n").is_empty());
    }
}
