//! Extraction report with source metadata and statistics.

use crate::model::{ProfileRecord, RenderedDocument};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where and when a snapshot was captured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    /// Final URL the automation layer landed on, if known.
    pub url: Option<String>,

    /// When the snapshot was captured.
    pub captured_at: Option<DateTime<Utc>>,

    /// Session identifier the capture ran under.
    pub session_id: Option<String>,
}

impl SnapshotMeta {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the session identifier.
    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = Some(id.into());
        self
    }

    /// Stamp the capture time as now.
    pub fn captured_now(mut self) -> Self {
        self.captured_at = Some(Utc::now());
        self
    }
}

/// Statistics collected over one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total lines in the document, including blanks.
    pub line_count: u32,

    /// Headings of any level.
    pub heading_count: u32,

    /// Bulleted lines.
    pub bullet_count: u32,

    /// Populated fields in the record (0-5).
    pub fields_populated: u32,
}

impl ExtractionStats {
    /// Collect statistics from a document and its extracted record.
    pub fn collect(doc: &RenderedDocument, record: &ProfileRecord) -> Self {
        Self {
            line_count: doc.line_count() as u32,
            heading_count: doc.heading_count() as u32,
            bullet_count: doc.bullet_count() as u32,
            fields_populated: record.field_count(),
        }
    }
}

/// Result of one extraction: metadata, record, and statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Capture provenance.
    pub meta: SnapshotMeta,

    /// The extracted record.
    pub record: ProfileRecord,

    /// Document and record statistics.
    pub stats: ExtractionStats,
}

impl ExtractionReport {
    /// Create a report.
    pub fn new(meta: SnapshotMeta, record: ProfileRecord, stats: ExtractionStats) -> Self {
        Self {
            meta,
            record,
            stats,
        }
    }

    /// Create a report with no provenance, computing statistics.
    pub fn from_extraction(doc: &RenderedDocument, record: ProfileRecord) -> Self {
        let stats = ExtractionStats::collect(doc, &record);
        Self {
            meta: SnapshotMeta::default(),
            record,
            stats,
        }
    }
}
