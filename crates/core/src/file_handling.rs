//! Locating cheat sheets on disk and in the bundled set.
//!
//! Sheets are looked up in three places, in order:
//!
//! 1. the user directory (`~/.chta/sheets` unless configured otherwise),
//! 2. the sheets bundled into the binary,
//! 3. an `examples/` directory relative to the working directory, which is
//!    handy while writing new sheets.
//!
//! The first hit wins, so a user sheet named `git.md` shadows the bundled one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::bundled::{find_bundled, BundledSheet, BUNDLED_DIRECTORY, BUNDLED_SHEETS};
use crate::cheat_sheet::CheatSheet;
use crate::config::Settings;
use crate::error::{Error, Result};

/// Development fallback directory, relative to the working directory
pub const LOCAL_DIRECTORY: &str = "examples";

const SHEET_EXTENSION: &str = ".md";
const MAX_SUGGESTIONS: usize = 3;
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// The overlay of places cheat sheets are read from.
#[derive(Debug, Clone)]
pub struct SheetStore {
    user_directory: PathBuf,
    bundled: &'static [BundledSheet],
    local_directory: Option<PathBuf>,
}

impl SheetStore {
    /// A store over `user_directory`, the bundled sheets and `./examples`.
    pub fn new(user_directory: impl Into<PathBuf>) -> Self {
        Self {
            user_directory: user_directory.into(),
            bundled: BUNDLED_SHEETS,
            local_directory: Some(PathBuf::from(LOCAL_DIRECTORY)),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.sheets_directory())
    }

    #[must_use]
    pub fn with_bundled(mut self, bundled: &'static [BundledSheet]) -> Self {
        self.bundled = bundled;
        self
    }

    #[must_use]
    pub fn with_local_directory(mut self, local_directory: Option<PathBuf>) -> Self {
        self.local_directory = local_directory;
        self
    }

    #[must_use]
    pub fn user_directory(&self) -> &Path {
        &self.user_directory
    }

    /// Finds the cheat sheet called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SheetNotFound`] with up to three similar names when no
    /// location has the sheet, [`Error::Io`] when a sheet file exists but
    /// cannot be read, or [`Error::Walk`] when a sheet directory cannot be
    /// scanned.
    ///
    /// Sheets in subdirectories are found by file name, the same way they are
    /// listed. A sheet directly inside the directory wins over a nested one.
    ///
    /// # Examples
    ///
    /// ```
    /// use chta_core::file_handling::SheetStore;
    ///
    /// let store = SheetStore::new("/nonexistent").with_local_directory(None);
    /// let sheet = store.resolve("git")?;
    /// assert_eq!(sheet.name, "git");
    /// # Ok::<(), chta_core::error::Error>(())
    /// ```
    pub fn resolve(&self, name: &str) -> Result<CheatSheet> {
        let file_name = format!("{name}{SHEET_EXTENSION}");

        if let Some((path, content)) =
            find_in_directory("user cheat sheet", &self.user_directory, &file_name)?
        {
            info!("Using user cheat sheet `{}`", path.display());
            return Ok(sheet(name, &path, content));
        }

        if let Some(bundled) = find_bundled(self.bundled, name) {
            debug!("Using bundled cheat sheet `{name}`");
            let bundled_path = Path::new(BUNDLED_DIRECTORY).join(&file_name);
            return Ok(sheet(name, &bundled_path, bundled.content.to_string()));
        }

        if let Some(local_directory) = &self.local_directory {
            if let Some((path, content)) =
                find_in_directory("local cheat sheet", local_directory, &file_name)?
            {
                info!("Using local cheat sheet `{}`", path.display());
                return Ok(sheet(name, &path, content));
            }
        }

        Err(Error::sheet_not_found(
            name.to_string(),
            self.suggestions(name),
        ))
    }

    /// Every available sheet name, user sheets first, without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Walk`] if a sheet directory cannot be scanned.
    pub fn list_sheet_names(&self) -> Result<Vec<String>> {
        let mut names: IndexSet<String> = IndexSet::new();

        collect_directory_names(&self.user_directory, &mut names)?;

        for bundled in self.bundled {
            names.insert(bundled.name.to_string());
        }

        if let Some(local_directory) = &self.local_directory {
            collect_directory_names(local_directory, &mut names)?;
        }

        Ok(names.into_iter().collect())
    }

    /// Names resembling `name`, at most three, in listing order.
    #[must_use]
    pub fn suggestions(&self, name: &str) -> Vec<String> {
        let names = match self.list_sheet_names() {
            Ok(names) => names,
            Err(e) => {
                warn!("Could not list cheat sheets for suggestions: {e}");
                return Vec::new();
            }
        };

        suggest_similar(name, &names)
    }

    /// Creates the user directory, including missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_user_directory(&self) -> Result<&Path> {
        fs::create_dir_all(&self.user_directory).map_err(|e| {
            Error::io_error(
                "user cheat sheet directory".to_string(),
                self.user_directory.display().to_string(),
                e,
            )
        })?;

        Ok(&self.user_directory)
    }
}

fn sheet(name: &str, path: &Path, content: String) -> CheatSheet {
    CheatSheet {
        name: name.to_string(),
        path: path.display().to_string(),
        content,
    }
}

/// Reads a sheet file, treating a missing file as `None`.
fn read_sheet(file_description: &str, path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.display().to_string(),
            e,
        )),
    }
}

/// Reads `file_name` from `directory`, or else from the first subdirectory
/// holding it, in file name order.
fn find_in_directory(
    file_description: &str,
    directory: &Path,
    file_name: &str,
) -> Result<Option<(PathBuf, String)>> {
    let direct = directory.join(file_name);
    if let Some(content) = read_sheet(file_description, &direct)? {
        return Ok(Some((direct, content)));
    }

    if !directory.is_dir() {
        return Ok(None);
    }

    for entry in WalkDir::new(directory).min_depth(2).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Walk {
            path: directory.display().to_string(),
            original: e,
        })?;

        if entry.file_type().is_file() && entry.file_name() == file_name {
            let path = entry.into_path();
            debug!("Found nested cheat sheet `{}`", path.display());
            return Ok(read_sheet(file_description, &path)?.map(|content| (path, content)));
        }
    }

    Ok(None)
}

fn collect_directory_names(directory: &Path, names: &mut IndexSet<String>) -> Result<()> {
    if !directory.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Walk {
            path: directory.display().to_string(),
            original: e,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry
            .file_name()
            .to_str()
            .and_then(|file_name| file_name.strip_suffix(SHEET_EXTENSION))
            .filter(|name| !name.is_empty());

        if let Some(name) = name {
            names.insert(name.to_string());
        }
    }

    Ok(())
}

fn is_similar(name: &str, candidate: &str) -> bool {
    if candidate.contains(name) || name.contains(candidate) {
        return true;
    }

    if candidate.starts_with(name) || name.starts_with(candidate) {
        return true;
    }

    levenshtein_distance(name, candidate) <= MAX_SUGGESTION_DISTANCE
}

/// Picks up to three candidates similar to `name`, keeping their order.
///
/// Comparison is case-insensitive.
#[must_use]
pub fn suggest_similar(name: &str, candidates: &[String]) -> Vec<String> {
    let name = name.to_lowercase();

    candidates
        .iter()
        .filter(|candidate| is_similar(&name, &candidate.to_lowercase()))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Edit distance between two strings, counted in characters.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row of the classic matrix
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, a_char) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, b_char) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if a_char == b_char {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_sheet(directory: &Path, name: &str, content: &str) {
        fs::create_dir_all(directory).unwrap();
        fs::write(directory.join(format!("{name}.md")), content).unwrap();
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn empty_store(user: &TempDir) -> SheetStore {
        SheetStore::new(user.path())
            .with_bundled(&[])
            .with_local_directory(None)
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("git", "git"), 0);
        assert_eq!(levenshtein_distance("git", "gti"), 2);
        assert_eq!(levenshtein_distance("docker", "doker"), 1);
        assert_eq!(levenshtein_distance("git", "gitt"), 1);
        assert_eq!(levenshtein_distance("abc", "xyz"), 3);
        assert_eq!(levenshtein_distance("kubernetes", "kuber"), 5);
        assert_eq!(levenshtein_distance("", "docker"), 6);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_distance_is_symmetric() {
        let words = ["", "git", "gti", "docker", "kubernetes", "tar", "terraform"];
        for a in words {
            for b in words {
                assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
            }
        }
    }

    #[test]
    fn test_suggest_similar() {
        let candidates = names(&["git", "docker", "kubernetes", "terraform"]);

        assert_eq!(suggest_similar("gi", &candidates), names(&["git"]));
        assert_eq!(suggest_similar("dock", &candidates), names(&["docker"]));
        assert_eq!(suggest_similar("gti", &candidates), names(&["git"]));
        assert_eq!(suggest_similar("kuber", &candidates), names(&["kubernetes"]));
        assert_eq!(suggest_similar("GIT", &candidates), names(&["git"]));
        assert!(suggest_similar("xyz", &candidates).is_empty());
    }

    #[test]
    fn test_suggestions_are_capped_and_keep_order() {
        let candidates = names(&["ab", "abc", "abcd", "abcde"]);
        assert_eq!(
            suggest_similar("ab", &candidates),
            names(&["ab", "abc", "abcd"])
        );
    }

    #[test]
    fn test_resolve_prefers_user_sheet_over_bundled() {
        let user = TempDir::new().unwrap();
        write_sheet(user.path(), "git", "# My own git notes");

        let store = SheetStore::new(user.path()).with_local_directory(None);
        let sheet = store.resolve("git").unwrap();

        assert_eq!(sheet.content, "# My own git notes");
        assert!(sheet.path.starts_with(&user.path().display().to_string()));
    }

    #[test]
    fn test_resolve_falls_back_to_bundled() {
        let user = TempDir::new().unwrap();
        let store = SheetStore::new(user.path()).with_local_directory(None);

        let sheet = store.resolve("docker").unwrap();
        assert_eq!(sheet.path, Path::new("bundled").join("docker.md").display().to_string());
        assert!(sheet.content.contains("docker ps"));
    }

    #[test]
    fn test_resolve_falls_back_to_local_directory() {
        let user = TempDir::new().unwrap();
        let local = TempDir::new().unwrap();
        write_sheet(local.path(), "notes", "## Notes\n");

        let store = empty_store(&user).with_local_directory(Some(local.path().to_path_buf()));
        let sheet = store.resolve("notes").unwrap();

        assert_eq!(sheet.name, "notes");
        assert_eq!(sheet.content, "## Notes\n");
    }

    #[test]
    fn test_resolve_not_found_has_no_suggestions_when_empty() {
        let user = TempDir::new().unwrap();
        let result = empty_store(&user).resolve("nonexistent");

        match result {
            Err(Error::SheetNotFound { name, suggestions }) => {
                assert_eq!(name, "nonexistent");
                assert!(suggestions.is_empty());
            }
            other => panic!("Expected SheetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_not_found_suggests_similar_names() {
        let user = TempDir::new().unwrap();
        write_sheet(user.path(), "terraform", "");

        let result = empty_store(&user).resolve("terraform-aws");
        assert!(matches!(
            result,
            Err(Error::SheetNotFound { suggestions, .. }) if suggestions == names(&["terraform"])
        ));
    }

    #[test]
    fn test_list_sheet_names_is_deduplicated_with_user_first() {
        let user = TempDir::new().unwrap();
        let local = TempDir::new().unwrap();
        write_sheet(user.path(), "zsh", "");
        write_sheet(user.path(), "git", "");
        write_sheet(&user.path().join("nested"), "vim", "");
        write_sheet(local.path(), "docker", "");
        write_sheet(local.path(), "extra", "");
        fs::write(user.path().join("notes.txt"), "not a sheet").unwrap();

        const BUNDLED: &[BundledSheet] = &[
            BundledSheet {
                name: "docker",
                content: "",
            },
            BundledSheet {
                name: "git",
                content: "",
            },
        ];

        let store = SheetStore::new(user.path())
            .with_bundled(BUNDLED)
            .with_local_directory(Some(local.path().to_path_buf()));

        assert_eq!(
            store.list_sheet_names().unwrap(),
            names(&["git", "vim", "zsh", "docker", "extra"])
        );
    }

    #[test]
    fn test_listed_nested_sheet_can_be_resolved() {
        let user = TempDir::new().unwrap();
        let local = TempDir::new().unwrap();
        write_sheet(&user.path().join("editors"), "vim", "## Modes\n");
        write_sheet(&local.path().join("a").join("b"), "notes", "## Deep\n");

        let store = empty_store(&user).with_local_directory(Some(local.path().to_path_buf()));
        assert_eq!(store.list_sheet_names().unwrap(), names(&["vim", "notes"]));

        let vim = store.resolve("vim").unwrap();
        assert_eq!(vim.content, "## Modes\n");
        assert!(vim.path.ends_with(&Path::new("editors").join("vim.md").display().to_string()));

        assert_eq!(store.resolve("notes").unwrap().content, "## Deep\n");
    }

    #[test]
    fn test_top_level_sheet_wins_over_nested() {
        let user = TempDir::new().unwrap();
        write_sheet(&user.path().join("archive"), "git", "## Old\n");
        write_sheet(user.path(), "git", "## Current\n");

        let sheet = empty_store(&user).resolve("git").unwrap();
        assert_eq!(sheet.content, "## Current\n");
    }

    #[test]
    fn test_nested_user_sheet_shadows_bundled() {
        let user = TempDir::new().unwrap();
        write_sheet(&user.path().join("tools"), "docker", "## Mine\n");

        let store = SheetStore::new(user.path()).with_local_directory(None);
        assert_eq!(store.resolve("docker").unwrap().content, "## Mine\n");
    }

    #[test]
    fn test_list_sheet_names_with_nothing_available() {
        let user = TempDir::new().unwrap();
        let store = SheetStore::new(user.path().join("missing"))
            .with_bundled(&[])
            .with_local_directory(None);

        assert!(store.list_sheet_names().unwrap().is_empty());
    }

    #[test]
    fn test_create_user_directory() {
        let home = TempDir::new().unwrap();
        let directory = home.path().join(".chta").join("sheets");
        let store = SheetStore::new(&directory);

        let created = store.create_user_directory().unwrap();
        assert_eq!(created, directory.as_path());
        assert!(directory.is_dir());

        // Creating it again is fine
        assert!(store.create_user_directory().is_ok());
    }
}
