//! Cleanup pipeline for noisy rendered page text.
//!
//! Browser-rendered markdown carries rendering noise: mixed bullet markers,
//! trailing whitespace, long blank runs, and interface artifact lines such as
//! "Show more" or "…see more". Cleanup is optional and runs before line
//! classification; extraction without cleanup is byte-faithful to its input.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Unicode NFC normalization only.
    Minimal,
    /// NFC + bullet standardization + whitespace cleanup.
    #[default]
    Standard,
    /// Standard plus removal of interface artifact lines.
    Aggressive,
}

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form.
    pub normalize_unicode: bool,

    /// Standardize bullet characters (•, ●, ○, ·, *, + → -).
    pub standardize_bullets: bool,

    /// Trim trailing whitespace from every line.
    pub trim_trailing_whitespace: bool,

    /// Maximum consecutive blank lines (0 = unlimited).
    pub max_consecutive_blank_lines: u8,

    /// Remove interface artifact lines ("Show more", "…see more", counters).
    pub strip_artifacts: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: false,
            trim_trailing_whitespace: false,
            max_consecutive_blank_lines: 0,
            strip_artifacts: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: true,
            trim_trailing_whitespace: true,
            max_consecutive_blank_lines: 2,
            strip_artifacts: false,
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: true,
            trim_trailing_whitespace: true,
            max_consecutive_blank_lines: 1,
            strip_artifacts: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Bullet characters standardized to `-`.
const BULLET_CHARS: [char; 6] = ['\u{2022}', '\u{25CF}', '\u{25CB}', '\u{00B7}', '*', '+'];

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    artifact_regex: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            artifact_regex: Regex::new(
                r"(?i)^\s*(?:\u{2026}?\s*see (?:more|less|translation)|show (?:more|less|fewer|all)\b.*|\d[\d,.]*\s*(?:followers|connections|endorsements))\s*$",
            )
            .unwrap(),
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Run the pipeline over a text blob.
    pub fn process(&self, text: &str) -> String {
        let text = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        let mut out: Vec<String> = Vec::new();
        let mut blank_run: u8 = 0;

        for raw in text.lines() {
            let mut line = raw.to_string();

            if self.options.strip_artifacts && self.artifact_regex.is_match(&line) {
                continue;
            }

            if self.options.standardize_bullets {
                line = standardize_bullet(&line);
            }

            if self.options.trim_trailing_whitespace {
                line.truncate(line.trim_end().len());
            }

            if line.trim().is_empty() {
                blank_run = blank_run.saturating_add(1);
                if self.options.max_consecutive_blank_lines > 0
                    && blank_run > self.options.max_consecutive_blank_lines
                {
                    continue;
                }
            } else {
                blank_run = 0;
            }

            out.push(line);
        }

        out.join("\n")
    }
}

/// Rewrite a leading non-dash bullet marker to `- `, preserving indentation.
fn standardize_bullet(line: &str) -> String {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(indent_len);

    for marker in BULLET_CHARS {
        if let Some(tail) = rest.strip_prefix(marker) {
            if tail.starts_with(char::is_whitespace) {
                return format!("{}- {}", indent, tail.trim_start());
            }
        }
    }

    line.to_string()
}
