use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One qualifying short-form video, persisted to the videos index keyed by
/// `video_id`. Written exactly once and never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    /// Raw ISO-8601 duration as reported upstream, e.g. `PT1M30S`.
    pub duration: String,
    pub duration_seconds: u64,
    pub creator_username: String,
    pub creator_avatar: String,
    pub is_verified: bool,
    pub likes: u64,
    pub comments: u64,
    pub is_ai: bool,
    /// Assigned by the store at write time; `None` until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Creator display metadata, embedded in [`VideoRecord`] and cached in
/// memory per channel for the duration of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub title: String,
    pub avatar: String,
    pub is_verified: bool,
}

/// Appended once per run that reaches the persistence stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionLogEntry {
    pub date: DateTime<Utc>,
    pub video_count: u64,
    pub quota_used: u64,
}

/// Appended by the top-level boundary when a run dies; the only place fatal
/// failures are durably reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub trace: String,
}

impl ErrorLogEntry {
    pub fn new(err: &anyhow::Error) -> Self {
        Self {
            timestamp: Utc::now(),
            message: err.to_string(),
            trace: format!("{err:?}"),
        }
    }
}
