//! Configuration handed to the external browser-automation collaborator.
//!
//! This crate never drives a browser. Login, navigation, waiting, scrolling,
//! and section expansion all belong to the automation layer; [`SessionConfig`]
//! is the explicit, serializable bundle of knobs that layer needs, replacing
//! the process-wide globals the original capture scripts relied on.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default desktop user-agent presented to the target site.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

/// Default session identifier reused across login and profile fetches.
pub const DEFAULT_SESSION_ID: &str = "profile_session";

/// Default page timeout in milliseconds.
pub const DEFAULT_PAGE_TIMEOUT_MS: u64 = 180_000;

/// Page-settling condition the automation layer waits for before capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitUntil {
    /// The load event fired.
    Load,
    /// DOMContentLoaded fired.
    DomContentLoaded,
    /// Network activity settled.
    #[default]
    NetworkIdle,
}

/// Browser session configuration for the automation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Run the browser without a visible window.
    pub headless: bool,

    /// Persistent browser-profile directory; `None` for a throwaway profile.
    pub profile_dir: Option<PathBuf>,

    /// Session identifier; the same id must be reused for the login step and
    /// the profile fetch so they share one logged-in context.
    pub session_id: String,

    /// User-agent string presented to the site.
    pub user_agent: String,

    /// Per-page navigation timeout in milliseconds.
    pub page_timeout_ms: u64,

    /// Settling condition to wait for before taking the rendered text.
    pub wait_until: WaitUntil,

    /// Optional CSS selector narrowing capture to part of the page.
    pub css_scope: Option<String>,

    /// Bypass any response cache so the capture reflects the live page.
    pub bypass_cache: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            profile_dir: None,
            session_id: DEFAULT_SESSION_ID.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout_ms: DEFAULT_PAGE_TIMEOUT_MS,
            wait_until: WaitUntil::NetworkIdle,
            css_scope: None,
            bypass_cache: true,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable headless mode.
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the persistent profile directory.
    pub fn with_profile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profile_dir = Some(dir.into());
        self
    }

    /// Set the session identifier.
    pub fn with_session_id(mut self, id: impl Into<String>) -> Self {
        self.session_id = id.into();
        self
    }

    /// Set the user-agent string.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the page timeout in milliseconds.
    pub fn with_page_timeout_ms(mut self, ms: u64) -> Self {
        self.page_timeout_ms = ms;
        self
    }

    /// Set the settling condition.
    pub fn with_wait_until(mut self, wait: WaitUntil) -> Self {
        self.wait_until = wait;
        self
    }

    /// Narrow capture to a CSS selector.
    pub fn with_css_scope(mut self, selector: impl Into<String>) -> Self {
        self.css_scope = Some(selector.into());
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the automation layer depends on.
    pub fn validate(&self) -> Result<()> {
        if self.session_id.trim().is_empty() {
            return Err(Error::Config("session_id must not be empty".to_string()));
        }
        if self.page_timeout_ms == 0 {
            return Err(Error::Config("page_timeout_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
