use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a capture step produces: a rendered screenshot or a plain-text export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactKind {
    Screenshot,
    ConsoleText,
}

/// The login phase: post-navigation and post-submit settle times.
#[derive(Debug, Clone)]
pub struct LoginStep {
    pub settle: Duration,
    pub submit_settle: Duration,
}

/// One planned page visit.
#[derive(Debug, Clone)]
pub struct CaptureStep {
    pub label: String,
    /// URL path relative to the Jenkins base URL.
    pub path: String,
    /// Fixed sleep after navigation, giving the page time to render.
    pub settle: Duration,
    /// CSS selector to poll for before capturing (bounded wait).
    pub wait_for: Option<String>,
    pub file_name: String,
    pub kind: ArtifactKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: u64,
    pub kind: ArtifactKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaptureReport {
    pub artifacts: Vec<Artifact>,
    pub login_ok: bool,
    pub finished_at: DateTime<Utc>,
}
