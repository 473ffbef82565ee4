//! Blocked-page detection.
//!
//! A site that judges the requester unauthenticated or suspicious returns an
//! interstitial (authentication wall, sign-in prompt, CAPTCHA challenge)
//! instead of the profile. The extractor cannot tell those pages apart from a
//! sparse profile, so the caller must run this policy first and short-circuit
//! when it fires. The marker lists consolidate the heuristics the original
//! capture scripts applied inconsistently: URL path checks, challenge phrases,
//! and sign-in phrases, each classified with its own reason.

use serde::{Deserialize, Serialize};

/// Why a rendered page was judged blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// The URL was redirected to an authentication-wall path.
    AuthWall,
    /// The body text shows a CAPTCHA or verification challenge.
    Challenge,
    /// The body text shows a sign-in or join prompt.
    SignInPrompt,
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::AuthWall => write!(f, "authentication wall"),
            BlockReason::Challenge => write!(f, "challenge page"),
            BlockReason::SignInPrompt => write!(f, "sign-in prompt"),
        }
    }
}

/// Policy for deciding whether a rendered page is blocked.
///
/// All matching is case-insensitive substring search. Defaults cover the
/// markers observed in practice; callers targeting another site can replace
/// any list. The policy is a pure function of its inputs and safe to share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockPolicy {
    /// URL path fragments that indicate an authentication wall.
    pub authwall_paths: Vec<String>,

    /// Body-text markers that indicate a CAPTCHA/verification challenge.
    pub challenge_markers: Vec<String>,

    /// Body-text markers that indicate a sign-in or join prompt.
    pub signin_markers: Vec<String>,
}

impl Default for BlockPolicy {
    fn default() -> Self {
        Self {
            authwall_paths: vec![
                "/authwall".to_string(),
                "/uas/login".to_string(),
                "/checkpoint".to_string(),
            ],
            challenge_markers: vec![
                "captcha".to_string(),
                "security verification".to_string(),
                "verify".to_string(),
            ],
            signin_markers: vec![
                "sign in".to_string(),
                "join linkedin".to_string(),
                "welcome back".to_string(),
            ],
        }
    }
}

impl BlockPolicy {
    /// Create a policy with default markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the authentication-wall URL fragments.
    pub fn with_authwall_paths(mut self, paths: Vec<String>) -> Self {
        self.authwall_paths = paths;
        self
    }

    /// Replace the challenge markers.
    pub fn with_challenge_markers(mut self, markers: Vec<String>) -> Self {
        self.challenge_markers = markers;
        self
    }

    /// Replace the sign-in markers.
    pub fn with_signin_markers(mut self, markers: Vec<String>) -> Self {
        self.signin_markers = markers;
        self
    }

    /// Evaluate the policy against a final URL and rendered body text.
    ///
    /// URL evidence outranks body text: a redirect to an authwall path is
    /// conclusive even when the body happens to render profile-like content.
    pub fn evaluate(&self, url: Option<&str>, text: &str) -> Option<BlockReason> {
        if let Some(url) = url {
            let url = url.to_lowercase();
            if self.authwall_paths.iter().any(|p| url.contains(&p.to_lowercase())) {
                return Some(BlockReason::AuthWall);
            }
        }

        let text = text.to_lowercase();
        if self
            .challenge_markers
            .iter()
            .any(|m| text.contains(&m.to_lowercase()))
        {
            return Some(BlockReason::Challenge);
        }
        if self
            .signin_markers
            .iter()
            .any(|m| text.contains(&m.to_lowercase()))
        {
            return Some(BlockReason::SignInPrompt);
        }

        None
    }

    /// Whether the page is blocked under this policy.
    pub fn is_blocked(&self, url: Option<&str>, text: &str) -> bool {
        self.evaluate(url, text).is_some()
    }
}
