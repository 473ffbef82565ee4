//! Extraction options and configuration.

use super::CleanupOptions;

/// Section heading labels recognized by the extractor.
///
/// Labels are matched case-insensitively against the full text of a
/// second-level heading. Defaults match the sections a profile page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLabels {
    /// Label of the free-text summary section.
    pub about: String,

    /// Label of the education section.
    pub education: String,

    /// Label of the work-experience section.
    pub experience: String,

    /// Label of the projects section.
    pub projects: String,
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self {
            about: "About".to_string(),
            education: "Education".to_string(),
            experience: "Experience".to_string(),
            projects: "Projects".to_string(),
        }
    }
}

/// Options for extracting a profile record.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Section heading labels to match.
    pub labels: SectionLabels,

    /// Optional cleanup applied to raw text before parsing.
    ///
    /// Only honored by the string and file entry points; a pre-parsed
    /// [`crate::RenderedDocument`] is taken as-is.
    pub cleanup: Option<CleanupOptions>,

    /// Whether batch extraction over many files runs in parallel.
    pub parallel: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            labels: SectionLabels::default(),
            cleanup: None,
            parallel: true,
        }
    }
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section labels.
    pub fn with_labels(mut self, labels: SectionLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup from a preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Enable or disable parallel batch extraction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch extraction.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
