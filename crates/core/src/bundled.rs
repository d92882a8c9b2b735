//! Cheat sheets compiled into the binary.

/// A cheat sheet shipped with chta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledSheet {
    pub name: &'static str,
    pub content: &'static str,
}

/// Directory name reported as the path of bundled sheets.
pub const BUNDLED_DIRECTORY: &str = "bundled";

/// Every bundled sheet, sorted by name.
pub const BUNDLED_SHEETS: &[BundledSheet] = &[
    BundledSheet {
        name: "docker",
        content: include_str!("../sheets/docker.md"),
    },
    BundledSheet {
        name: "git",
        content: include_str!("../sheets/git.md"),
    },
    BundledSheet {
        name: "kubernetes",
        content: include_str!("../sheets/kubernetes.md"),
    },
    BundledSheet {
        name: "linux",
        content: include_str!("../sheets/linux.md"),
    },
];

/// Looks a bundled sheet up by its exact name.
#[must_use]
pub fn find_bundled(sheets: &[BundledSheet], name: &str) -> Option<BundledSheet> {
    sheets.iter().find(|sheet| sheet.name == name).copied()
}
