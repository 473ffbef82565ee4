//! Profile field extraction.
//!
//! The extractor is a pure, synchronous transform: classified lines in, flat
//! [`ProfileRecord`] out. Every field is located independently by a bounded
//! scan, so runtime is linear in document length. Missing structure is never
//! an error; it simply yields absent or empty fields.

mod cleanup;
mod options;
mod scanner;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use options::{ExtractOptions, SectionLabels};
pub use scanner::SectionScanner;

use crate::model::{Line, ProfileRecord, RenderedDocument};

/// Extract a profile record with default options.
pub fn extract(doc: &RenderedDocument) -> ProfileRecord {
    extract_with_options(doc, &ExtractOptions::default())
}

/// Extract a profile record from a document.
///
/// Deterministic for identical input, no I/O, no mutation of the document.
/// The `cleanup` option is not consulted here; it applies only to the raw
/// text entry points, before a document exists.
pub fn extract_with_options(doc: &RenderedDocument, options: &ExtractOptions) -> ProfileRecord {
    let scanner = SectionScanner::new(doc);
    let labels = &options.labels;

    ProfileRecord {
        name: doc.title().map(str::to_string),
        about: scanner.section(&labels.about).and_then(join_paragraph),
        education: scanner
            .section(&labels.education)
            .map(bulleted_items)
            .unwrap_or_default(),
        experience: scanner
            .section(&labels.experience)
            .map(nonempty_lines)
            .unwrap_or_default(),
        projects: scanner
            .section(&labels.projects)
            .map(bulleted_items)
            .unwrap_or_default(),
    }
}

/// Join a body block into a single paragraph, collapsing line breaks to
/// spaces. A whitespace-only block yields `None`, not an empty string.
fn join_paragraph(body: &[Line]) -> Option<String> {
    let joined = body
        .iter()
        .filter_map(Line::text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Collect bulleted items from a body block, discarding everything else.
fn bulleted_items(body: &[Line]) -> Vec<String> {
    body.iter()
        .filter_map(|line| match line {
            Line::Bullet(text) if !text.is_empty() => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Collect all non-empty lines from a body block, bulleted or not.
fn nonempty_lines(body: &[Line]) -> Vec<String> {
    body.iter()
        .filter_map(Line::text)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
