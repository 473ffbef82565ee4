//! Rendered-document types.
//!
//! A [`RenderedDocument`] is the textual form of a profile page after the
//! external browser-automation layer has executed scripts, settled network
//! activity, and flattened the page to heading-structured text. This crate
//! never produces one from a live page; it only consumes them.

use serde::{Deserialize, Serialize};

/// Maximum heading depth recognized by the line classifier.
const MAX_HEADING_LEVEL: u8 = 6;

/// A single classified line of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    /// A heading line (`#`-marked), with its level (1-6) and trimmed text.
    Heading {
        /// Heading depth: 1 for the page title, 2 for section headings.
        level: u8,
        /// Heading text with the marker and surrounding whitespace removed.
        text: String,
    },
    /// A bulleted list item with the marker and surrounding whitespace removed.
    Bullet(String),
    /// A plain text line, trimmed.
    Text(String),
    /// An empty or whitespace-only line.
    Blank,
}

impl Line {
    /// Classify a single raw line.
    ///
    /// Heading detection requires the `#` marker run at the start of the
    /// (whitespace-trimmed) line; a line that merely mentions a section name
    /// in body text is never classified as a heading. Runs longer than six
    /// markers are treated as plain text, matching common Markdown behavior.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Line::Blank;
        }

        if trimmed.starts_with('#') {
            let level = trimmed.chars().take_while(|&c| c == '#').count();
            if level <= MAX_HEADING_LEVEL as usize {
                let text = trimmed[level..].trim().to_string();
                return Line::Heading {
                    level: level as u8,
                    text,
                };
            }
            return Line::Text(trimmed.to_string());
        }

        for marker in ['-', '*', '+', '\u{2022}'] {
            if let Some(rest) = trimmed.strip_prefix(marker) {
                // Require whitespace after the marker so "-dashed-word" and
                // "*emphasis*" stay plain text.
                if rest.starts_with(char::is_whitespace) {
                    return Line::Bullet(rest.trim().to_string());
                }
            }
        }

        Line::Text(trimmed.to_string())
    }

    /// The text content of this line, or `None` for blanks.
    pub fn text(&self) -> Option<&str> {
        match self {
            Line::Heading { text, .. } => Some(text),
            Line::Bullet(text) => Some(text),
            Line::Text(text) => Some(text),
            Line::Blank => None,
        }
    }

    /// Whether this line is a heading at the given level or shallower.
    pub fn is_heading_at_most(&self, max_level: u8) -> bool {
        matches!(self, Line::Heading { level, .. } if *level <= max_level)
    }
}

/// A rendered profile page, parsed into classified lines.
///
/// Parsing never fails: arbitrary text maps to a (possibly structureless)
/// document, and extraction degrades to an empty record from there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    lines: Vec<Line>,
}

impl RenderedDocument {
    /// Parse a rendered text blob into a document.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(Line::parse).collect(),
        }
    }

    /// The classified lines, in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines in the document (including blanks).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The document title: text of the first top-level heading, if any.
    pub fn title(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Heading { level: 1, text } if !text.is_empty() => Some(text.as_str()),
            _ => None,
        })
    }

    /// Count headings of any level.
    pub fn heading_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, Line::Heading { .. }))
            .count()
    }

    /// Count bulleted lines.
    pub fn bullet_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| matches!(l, Line::Bullet(_)))
            .count()
    }
}
