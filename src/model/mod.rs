//! Data model for rendered profile pages and extracted records.
//!
//! This module defines the boundary types: [`RenderedDocument`], supplied by
//! the external browser-automation layer, and [`ProfileRecord`], the flat
//! output of extraction.

mod document;
mod record;

pub use document::{Line, RenderedDocument};
pub use record::ProfileRecord;
