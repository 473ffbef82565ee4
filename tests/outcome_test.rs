//! Integration tests for the blocked-page gate and retry policy.

use unprofile::{
    extract_gated, BlockPolicy, BlockReason, ExtractOptions, Outcome, ProfileRecord, RetryPolicy,
};

const PROFILE_TEXT: &str = "# Jane Doe\n## About\nSoftware engineer.\n";

#[test]
fn test_blocked_signal_prevents_extraction() {
    let policy = BlockPolicy::default();
    let options = ExtractOptions::default();

    let outcome = extract_gated(
        Some("https://example.com/authwall?trk=x"),
        PROFILE_TEXT,
        &policy,
        &options,
    );

    // Distinct blocked outcome, never a partially populated record.
    assert_eq!(outcome, Outcome::Blocked(BlockReason::AuthWall));
    assert!(outcome.record().is_none());
}

#[test]
fn test_clean_page_extracts() {
    let policy = BlockPolicy::default();
    let options = ExtractOptions::default();

    let outcome = extract_gated(
        Some("https://example.com/in/janedoe/"),
        PROFILE_TEXT,
        &policy,
        &options,
    );

    let record = outcome.into_record().expect("should extract");
    assert_eq!(record.name.as_deref(), Some("Jane Doe"));
}

#[test]
fn test_challenge_text_blocks_without_url() {
    let policy = BlockPolicy::default();
    let outcome = extract_gated(
        None,
        "Complete this CAPTCHA to prove you are human",
        &policy,
        &ExtractOptions::default(),
    );
    assert_eq!(outcome, Outcome::Blocked(BlockReason::Challenge));
}

#[test]
fn test_retry_once_then_give_up() {
    let policy = RetryPolicy::default();
    let mut attempts = Vec::new();

    let outcome = policy.run(|attempt| {
        attempts.push(attempt);
        Outcome::Blocked(BlockReason::AuthWall)
    });

    assert_eq!(attempts, vec![0, 1]);
    assert!(outcome.is_blocked());
}

#[test]
fn test_retry_succeeds_on_second_attempt() {
    let gate = BlockPolicy::default();
    let options = ExtractOptions::default();
    let policy = RetryPolicy::default();

    // First fetch lands on the authwall, the re-login attempt gets through.
    let pages = [
        ("https://example.com/authwall", "please sign in"),
        ("https://example.com/in/janedoe/", PROFILE_TEXT),
    ];

    let outcome = policy.run(|attempt| {
        let (url, text) = pages[attempt as usize];
        extract_gated(Some(url), text, &gate, &options)
    });

    let record = outcome.into_record().expect("retry should succeed");
    assert_eq!(record.name.as_deref(), Some("Jane Doe"));
}

#[test]
fn test_transient_failures_are_bounded() {
    let policy = RetryPolicy::new(3);
    let mut calls = 0u32;

    let outcome = policy.run(|_| {
        calls += 1;
        Outcome::Transient("page timeout".to_string())
    });

    assert_eq!(calls, 4); // initial attempt + three retries
    assert_eq!(outcome, Outcome::Transient("page timeout".to_string()));
}

#[test]
fn test_success_record_can_be_sparse() {
    // A clean page with no recognizable structure is still a success;
    // sparseness is missing data, not an error.
    let outcome = extract_gated(
        None,
        "nothing that looks like a profile",
        &BlockPolicy::default(),
        &ExtractOptions::default(),
    );
    assert_eq!(outcome, Outcome::Success(ProfileRecord::new()));
}
