//! # unprofile
//!
//! Extract structured profile records from the rendered text of a profile
//! page.
//!
//! An external browser-automation layer signs in, navigates, waits for the
//! page to settle, and hands over the flattened, heading-structured text.
//! This library takes it from there: classify the lines, locate the named
//! sections (About, Education, Experience, Projects), and produce a flat
//! [`ProfileRecord`] — plus the blocked-page policy that decides whether the
//! handed-over text is a profile at all.
//!
//! ## Quick Start
//!
//! ```
//! use unprofile::extract_str;
//!
//! let record = extract_str(
//!     "# Jane Doe\n## About\nSoftware engineer.\n## Education\n- State University\n",
//! );
//! assert_eq!(record.name.as_deref(), Some("Jane Doe"));
//! assert_eq!(record.education, vec!["State University"]);
//! ```
//!
//! ## Gated extraction
//!
//! A page that is really an authentication wall or CAPTCHA challenge must
//! never reach the extractor; run the gate instead:
//!
//! ```
//! use unprofile::{extract_gated, BlockPolicy, ExtractOptions, Outcome};
//!
//! let outcome = extract_gated(
//!     Some("https://example.com/authwall"),
//!     "some rendered text",
//!     &BlockPolicy::default(),
//!     &ExtractOptions::default(),
//! );
//! assert!(outcome.is_blocked());
//! ```

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod outcome;
pub mod render;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use detect::{BlockPolicy, BlockReason};
pub use error::{Error, Result};
pub use extract::{CleanupOptions, CleanupPipeline, CleanupPreset, ExtractOptions, SectionLabels};
pub use model::{Line, ProfileRecord, RenderedDocument};
pub use outcome::{extract_gated, Outcome, RetryPolicy};
pub use render::{record_to_json, report_to_json, to_text, JsonFormat};
pub use report::{ExtractionReport, ExtractionStats, SnapshotMeta};
pub use session::{SessionConfig, WaitUntil, DEFAULT_SESSION_ID, DEFAULT_USER_AGENT};

use rayon::prelude::*;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Extract a profile record from rendered text with default options.
///
/// Never fails: malformed or structureless text yields a mostly-empty record.
pub fn extract_str(text: &str) -> ProfileRecord {
    extract_str_with_options(text, &ExtractOptions::default())
}

/// Extract a profile record from rendered text with custom options.
///
/// When `options.cleanup` is set, the cleanup pipeline runs before line
/// classification.
pub fn extract_str_with_options(text: &str, options: &ExtractOptions) -> ProfileRecord {
    let cleaned;
    let text = match &options.cleanup {
        Some(cleanup) => {
            cleaned = CleanupPipeline::new(cleanup.clone()).process(text);
            cleaned.as_str()
        }
        None => text,
    };
    let doc = RenderedDocument::parse(text);
    extract::extract_with_options(&doc, options)
}

/// Extract a profile record from a snapshot file.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ProfileRecord> {
    extract_file_with_options(path, &ExtractOptions::default())
}

/// Extract a profile record from a snapshot file with custom options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<ProfileRecord> {
    let text = fs::read_to_string(path)?;
    Ok(extract_str_with_options(&text, options))
}

/// Extract a profile record from a reader.
pub fn extract_reader<R: Read>(mut reader: R) -> Result<ProfileRecord> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(extract_str(&text))
}

/// Extract records from many snapshot files, in input order.
///
/// Runs in parallel unless `options.parallel` is false. Per-file failures are
/// reported alongside the path; one unreadable file does not abort the batch.
pub fn extract_files<P: AsRef<Path> + Sync>(
    paths: &[P],
    options: &ExtractOptions,
) -> Vec<(PathBuf, Result<ProfileRecord>)> {
    let one = |path: &P| {
        let path = path.as_ref().to_path_buf();
        let result = extract_file_with_options(&path, options);
        (path, result)
    };

    if options.parallel {
        paths.par_iter().map(one).collect()
    } else {
        paths.iter().map(one).collect()
    }
}

/// Builder for configuring and running extraction.
///
/// # Example
///
/// ```
/// use unprofile::{CleanupPreset, Unprofile};
///
/// let record = Unprofile::new()
///     .with_cleanup(CleanupPreset::Standard)
///     .extract_str("# Jane Doe\n## About\nEngineer.\n")
///     .record;
/// assert_eq!(record.name.as_deref(), Some("Jane Doe"));
/// ```
pub struct Unprofile {
    options: ExtractOptions,
    policy: BlockPolicy,
}

impl Unprofile {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::new(),
            policy: BlockPolicy::default(),
        }
    }

    /// Set cleanup from a preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.options = self.options.with_cleanup_preset(preset);
        self
    }

    /// Set the section labels.
    pub fn with_labels(mut self, labels: SectionLabels) -> Self {
        self.options = self.options.with_labels(labels);
        self
    }

    /// Replace the blocked-page policy.
    pub fn with_block_policy(mut self, policy: BlockPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Disable parallel batch extraction.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Extract from rendered text, returning a result wrapper.
    pub fn extract_str(&self, text: &str) -> UnprofileResult {
        UnprofileResult {
            record: extract_str_with_options(text, &self.options),
        }
    }

    /// Extract from a snapshot file.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<UnprofileResult> {
        Ok(UnprofileResult {
            record: extract_file_with_options(path, &self.options)?,
        })
    }

    /// Gate on the blocked-page policy, then extract only if clean.
    pub fn extract_gated(&self, url: Option<&str>, text: &str) -> Outcome {
        outcome::extract_gated(url, text, &self.policy, &self.options)
    }

    /// The configured options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }
}

impl Default for Unprofile {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a builder-driven extraction.
pub struct UnprofileResult {
    /// The extracted record.
    pub record: ProfileRecord,
}

impl UnprofileResult {
    /// Serialize the record to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::record_to_json(&self.record, format)
    }

    /// Render the record as a human-readable summary.
    pub fn to_text(&self) -> String {
        render::to_text(&self.record)
    }

    /// The extracted record.
    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }
}
