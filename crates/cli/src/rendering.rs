//! Markdown to ANSI rendering.

use std::fmt::Write;

use crossterm::terminal;
use log::warn;
use termimad::{FmtText, MadSkin};

use chta_core::config::{Settings, DEFAULT_WIDTH};
use chta_core::error::{Error, Result};

/// Narrowest width text is ever wrapped to
const MIN_WIDTH: usize = 20;

/// Terminal width in columns, or the default when it cannot be detected.
#[must_use]
pub fn terminal_width() -> usize {
    match terminal::size() {
        Ok((width, _)) if width > 0 => usize::from(width),
        _ => DEFAULT_WIDTH,
    }
}

pub struct Renderer {
    width: usize,
    skin: MadSkin,
}

impl Renderer {
    #[must_use]
    pub fn new(width: usize, dark_mode: bool) -> Self {
        let skin = if dark_mode {
            MadSkin::default_dark()
        } else {
            MadSkin::default_light()
        };

        Self {
            width: width.max(MIN_WIDTH),
            skin,
        }
    }

    /// A renderer for `columns` of output, unless a width is configured.
    #[must_use]
    pub fn from_settings(settings: &Settings, columns: usize) -> Self {
        Self::new(settings.width.unwrap_or(columns), settings.dark_mode)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Renders `markdown` wrapped to the renderer's width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the formatted text cannot be produced.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let text = FmtText::from(&self.skin, markdown, Some(self.width));

        let mut rendered = String::new();
        write!(rendered, "{text}").map_err(|e| Error::Render(e.to_string()))?;

        Ok(rendered)
    }

    /// Renders `markdown`, falling back to the raw text on failure.
    #[must_use]
    pub fn render_or_raw(&self, markdown: &str) -> String {
        self.render(markdown).unwrap_or_else(|e| {
            warn!("{e}, showing plain text instead");
            markdown.to_string()
        })
    }
}
