//! Gated extraction outcomes and bounded retry.
//!
//! The capture pipeline has three terminal states: a record was extracted,
//! the page was blocked, or the attempt failed transiently (navigation
//! timeout, dropped session). [`Outcome`] makes those explicit instead of
//! burying them in retry control flow, and [`RetryPolicy`] bounds how often a
//! caller re-attempts before giving up.

use crate::detect::{BlockPolicy, BlockReason};
use crate::extract::{self, CleanupPipeline, ExtractOptions};
use crate::model::{ProfileRecord, RenderedDocument};
use log::warn;

/// Terminal state of one capture-and-extract cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Extraction ran and produced a record (possibly sparse).
    Success(ProfileRecord),
    /// The page was judged blocked; the extractor was never invoked.
    Blocked(BlockReason),
    /// The attempt failed for a reason worth retrying.
    Transient(String),
}

impl Outcome {
    /// Whether this outcome carries a record.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether the page was blocked.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Outcome::Blocked(_))
    }

    /// The extracted record, if any.
    pub fn record(&self) -> Option<&ProfileRecord> {
        match self {
            Outcome::Success(record) => Some(record),
            _ => None,
        }
    }

    /// Consume the outcome, returning the record if present.
    pub fn into_record(self) -> Option<ProfileRecord> {
        match self {
            Outcome::Success(record) => Some(record),
            _ => None,
        }
    }
}

/// Run the block policy, then extract only if the page is clean.
///
/// This is the required call order: a blocked page must never reach the
/// extractor, because the extractor cannot distinguish an interstitial from a
/// sparse profile and would return a misleading partial record.
pub fn extract_gated(
    url: Option<&str>,
    text: &str,
    policy: &BlockPolicy,
    options: &ExtractOptions,
) -> Outcome {
    if let Some(reason) = policy.evaluate(url, text) {
        return Outcome::Blocked(reason);
    }

    let cleaned;
    let text = match &options.cleanup {
        Some(cleanup) => {
            cleaned = CleanupPipeline::new(cleanup.clone()).process(text);
            cleaned.as_str()
        }
        None => text,
    };

    let doc = RenderedDocument::parse(text);
    Outcome::Success(extract::extract_with_options(&doc, options))
}

/// Bounded retry policy for capture attempts.
///
/// The default allows exactly one retry, matching the capture scripts'
/// retry-once-then-give-up behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of re-attempts after the first try.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_retries: 1 }
    }
}

impl RetryPolicy {
    /// Create a policy with the given retry bound.
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self { max_retries: 0 }
    }

    /// Drive `attempt` until it succeeds or the bound is exhausted.
    ///
    /// `attempt` receives the zero-based attempt index. Blocked and transient
    /// outcomes are both retried; the final outcome is returned as-is.
    pub fn run<F>(&self, mut attempt: F) -> Outcome
    where
        F: FnMut(u32) -> Outcome,
    {
        let mut outcome = attempt(0);

        for retry in 1..=self.max_retries {
            if outcome.is_success() {
                break;
            }
            match &outcome {
                Outcome::Blocked(reason) => {
                    warn!("attempt blocked ({}), retry {}/{}", reason, retry, self.max_retries);
                }
                Outcome::Transient(message) => {
                    warn!("transient failure ({}), retry {}/{}", message, retry, self.max_retries);
                }
                Outcome::Success(_) => unreachable!(),
            }
            outcome = attempt(retry);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_blocks_before_extraction() {
        let policy = BlockPolicy::default();
        let options = ExtractOptions::default();

        // The text parses as a perfectly good profile, but the URL says
        // authwall; the result must be Blocked, not a partial record.
        let outcome = extract_gated(
            Some("https://example.com/authwall"),
            "# Jane Doe\n## About\nEngineer.\n",
            &policy,
            &options,
        );
        assert_eq!(outcome, Outcome::Blocked(BlockReason::AuthWall));
        assert!(outcome.record().is_none());
    }

    #[test]
    fn test_gate_passes_clean_page() {
        let policy = BlockPolicy::default();
        let options = ExtractOptions::default();

        let outcome = extract_gated(
            Some("https://example.com/in/janedoe/"),
            "# Jane Doe\n## About\nEngineer.\n",
            &policy,
            &options,
        );
        let record = outcome.into_record().unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_retry_stops_after_success() {
        let policy = RetryPolicy::new(3);
        let mut calls = 0;
        let outcome = policy.run(|_| {
            calls += 1;
            Outcome::Success(ProfileRecord::new())
        });
        assert!(outcome.is_success());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_retry_bound_is_honored() {
        let policy = RetryPolicy::default();
        let mut calls = 0;
        let outcome = policy.run(|_| {
            calls += 1;
            Outcome::Transient("timeout".to_string())
        });
        // One initial attempt plus exactly one retry.
        assert_eq!(calls, 2);
        assert!(matches!(outcome, Outcome::Transient(_)));
    }

    #[test]
    fn test_retry_recovers_from_blocked() {
        let policy = RetryPolicy::new(2);
        let outcome = policy.run(|attempt| {
            if attempt == 0 {
                Outcome::Blocked(BlockReason::SignInPrompt)
            } else {
                Outcome::Success(ProfileRecord::new())
            }
        });
        assert!(outcome.is_success());
    }

    #[test]
    fn test_no_retry_policy() {
        let policy = RetryPolicy::none();
        let mut calls = 0;
        let outcome = policy.run(|_| {
            calls += 1;
            Outcome::Blocked(BlockReason::Challenge)
        });
        assert_eq!(calls, 1);
        assert!(outcome.is_blocked());
    }
}
