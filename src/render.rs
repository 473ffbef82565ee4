//! Output serialization for records and reports.

use crate::error::Result;
use crate::model::ProfileRecord;
use crate::report::ExtractionReport;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation.
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace.
    Compact,
}

/// Serialize a record to JSON.
pub fn record_to_json(record: &ProfileRecord, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(record)?,
        JsonFormat::Compact => serde_json::to_string(record)?,
    };
    Ok(json)
}

/// Serialize a full report to JSON.
pub fn report_to_json(report: &ExtractionReport, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report)?,
        JsonFormat::Compact => serde_json::to_string(report)?,
    };
    Ok(json)
}

/// Render a record as a human-readable summary.
pub fn to_text(record: &ProfileRecord) -> String {
    let mut out = String::new();

    push_field(&mut out, "Name", record.name.as_deref());
    push_field(&mut out, "About", record.about.as_deref());
    push_list(&mut out, "Education", &record.education);
    push_list(&mut out, "Experience", &record.experience);
    push_list(&mut out, "Projects", &record.projects);

    out
}

fn push_field(out: &mut String, label: &str, value: Option<&str>) {
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value.unwrap_or("(none)"));
    out.push('\n');
}

fn push_list(out: &mut String, label: &str, items: &[String]) {
    out.push_str(label);
    out.push_str(":\n");
    if items.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for item in items {
        out.push_str("  - ");
        out.push_str(item);
        out.push('\n');
    }
}
