//! In-memory stand-ins for the upstream API and the document store, shared
//! by the fetcher and pipeline tests.

use crate::config::Config;
use crate::models::{ChannelInfo, ErrorLogEntry, ExecutionLogEntry, VideoRecord};
use crate::services::store::VideoStore;
use crate::services::youtube::{SearchHit, ShortsApi, VideoDetails};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct ApiCalls {
    pub searches: usize,
    pub details: usize,
    pub channels: usize,
}

/// Fixed-response [`ShortsApi`] with per-endpoint call counters.
#[derive(Default)]
pub struct FakeApi {
    /// channel id -> its newest short-category hit
    pub shorts: HashMap<String, SearchHit>,
    /// video id -> details
    pub details: HashMap<String, VideoDetails>,
    /// channel id -> creator metadata
    pub channels: HashMap<String, ChannelInfo>,
    pub calls: Mutex<ApiCalls>,
}

#[async_trait]
impl ShortsApi for FakeApi {
    async fn latest_short(&self, channel_id: &str) -> Result<Option<SearchHit>> {
        self.calls.lock().unwrap().searches += 1;
        Ok(self.shorts.get(channel_id).cloned())
    }

    async fn video_details(&self, video_id: &str) -> Result<Option<VideoDetails>> {
        self.calls.lock().unwrap().details += 1;
        Ok(self.details.get(video_id).cloned())
    }

    async fn channel_info(&self, channel_id: &str) -> Result<ChannelInfo> {
        self.calls.lock().unwrap().channels += 1;
        self.channels
            .get(channel_id)
            .cloned()
            .ok_or_else(|| anyhow!("channel {channel_id}: no snippet in response"))
    }
}

/// Recording [`VideoStore`] with a configurable existing set and daily count.
#[derive(Default)]
pub struct FakeStore {
    pub existing: HashSet<String>,
    pub daily_count: u64,
    pub saved_batches: Mutex<Vec<Vec<VideoRecord>>>,
    pub execution_logs: Mutex<Vec<ExecutionLogEntry>>,
    pub error_logs: Mutex<Vec<ErrorLogEntry>>,
}

#[async_trait]
impl VideoStore for FakeStore {
    async fn video_exists(&self, video_id: &str) -> Result<bool> {
        Ok(self.existing.contains(video_id))
    }

    async fn count_videos_since(&self, _since: DateTime<Utc>) -> Result<u64> {
        Ok(self.daily_count)
    }

    async fn save_videos(&self, videos: &[VideoRecord]) -> Result<()> {
        self.saved_batches.lock().unwrap().push(videos.to_vec());
        Ok(())
    }

    async fn log_execution(&self, entry: &ExecutionLogEntry) -> Result<()> {
        self.execution_logs.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn log_error(&self, entry: &ErrorLogEntry) -> Result<()> {
        self.error_logs.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        youtube_api_key: "test-key".to_string(),
        elasticsearch_url: "http://localhost:9200".to_string(),
        max_daily_videos: 40,
        target_hour: 18,
        request_delay: Duration::ZERO,
        max_duration_secs: 180,
    }
}

pub fn short_hit(video_id: &str) -> SearchHit {
    SearchHit {
        video_id: video_id.to_string(),
        title: format!("{video_id} title"),
    }
}

pub fn video_details(channel_id: &str, duration: &str) -> VideoDetails {
    VideoDetails {
        title: "a short".to_string(),
        description: "a description".to_string(),
        thumbnail: "https://example.com/thumb.jpg".to_string(),
        channel_id: channel_id.to_string(),
        duration: duration.to_string(),
        likes: 10,
        comments: 2,
    }
}
