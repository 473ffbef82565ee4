//! Line-scanning state machine for locating named sections.
//!
//! Section lookup is a single bounded pass over the classified lines with two
//! states: outside any section, or inside the matched one. This replaces
//! greedy/lazy regex matching over the whole blob and keeps boundary edge
//! cases auditable in isolation.

use crate::model::{Line, RenderedDocument};
use log::debug;

/// Heading level that introduces a named section.
const SECTION_LEVEL: u8 = 2;

/// Scanner state.
enum State {
    Outside,
    Inside { start: usize },
}

/// Locates section bodies within a rendered document.
pub struct SectionScanner<'a> {
    lines: &'a [Line],
}

impl<'a> SectionScanner<'a> {
    /// Create a scanner over a document's lines.
    pub fn new(doc: &'a RenderedDocument) -> Self {
        Self { lines: doc.lines() }
    }

    /// Find the body of the first section whose heading matches `label`.
    ///
    /// Matching is case-insensitive on the full heading text of a
    /// second-level heading; the first match wins when headings repeat. The
    /// body runs from just after the heading up to (but excluding) the next
    /// heading of the same or higher level, or the end of the document.
    /// Returns `None` when no heading matches; an empty slice means the
    /// section exists but has no body.
    pub fn section(&self, label: &str) -> Option<&'a [Line]> {
        let wanted = label.trim().to_lowercase();
        let mut state = State::Outside;

        for (index, line) in self.lines.iter().enumerate() {
            match state {
                State::Outside => {
                    if let Line::Heading {
                        level: SECTION_LEVEL,
                        text,
                    } = line
                    {
                        if text.trim().to_lowercase() == wanted {
                            debug!("matched section heading {:?} at line {}", label, index);
                            state = State::Inside { start: index + 1 };
                        }
                    }
                }
                State::Inside { start } => {
                    if line.is_heading_at_most(SECTION_LEVEL) {
                        return Some(&self.lines[start..index]);
                    }
                }
            }
        }

        match state {
            State::Inside { start } => Some(&self.lines[start..]),
            State::Outside => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> RenderedDocument {
        RenderedDocument::parse(text)
    }

    #[test]
    fn test_section_body_bounds() {
        let d = doc("# T\n## About\nfirst\nsecond\n## Education\n- x\n");
        let scanner = SectionScanner::new(&d);

        let body = scanner.section("About").unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].text(), Some("first"));
        assert_eq!(body[1].text(), Some("second"));
    }

    #[test]
    fn test_section_runs_to_end_of_document() {
        let d = doc("## Projects\n- a\n- b\n");
        let scanner = SectionScanner::new(&d);

        let body = scanner.section("Projects").unwrap();
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_section_case_insensitive() {
        let d = doc("## ABOUT\ntext\n");
        let scanner = SectionScanner::new(&d);
        assert!(scanner.section("about").is_some());
        assert!(scanner.section("About").is_some());
    }

    #[test]
    fn test_missing_section() {
        let d = doc("# T\n## About\ntext\n");
        let scanner = SectionScanner::new(&d);
        assert!(scanner.section("Education").is_none());
    }

    #[test]
    fn test_body_mention_does_not_open_section() {
        // "Experience" appears as body text under About; only the real
        // heading opens the section.
        let d = doc("## About\nExperience\n## Experience\nreal\n");
        let scanner = SectionScanner::new(&d);

        let about = scanner.section("About").unwrap();
        assert_eq!(about.len(), 1);
        assert_eq!(about[0].text(), Some("Experience"));

        let experience = scanner.section("Experience").unwrap();
        assert_eq!(experience.len(), 1);
        assert_eq!(experience[0].text(), Some("real"));
    }

    #[test]
    fn test_duplicate_headings_first_wins() {
        let d = doc("## About\nfirst body\n## About\nsecond body\n");
        let scanner = SectionScanner::new(&d);

        let body = scanner.section("About").unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].text(), Some("first body"));
    }

    #[test]
    fn test_top_level_heading_closes_section() {
        let d = doc("## About\nbody\n# Another Page\nafter\n");
        let scanner = SectionScanner::new(&d);

        let body = scanner.section("About").unwrap();
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_deeper_heading_stays_inside_section() {
        let d = doc("## Experience\n### Acme Corp\nEngineer\n## Education\n- x\n");
        let scanner = SectionScanner::new(&d);

        let body = scanner.section("Experience").unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].text(), Some("Acme Corp"));
    }

    #[test]
    fn test_empty_section_body() {
        let d = doc("## About\n## Education\n- x\n");
        let scanner = SectionScanner::new(&d);

        let body = scanner.section("About").unwrap();
        assert!(body.is_empty());
    }
}
