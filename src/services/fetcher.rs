use crate::config::Config;
use crate::models::{ChannelInfo, VideoRecord};
use crate::services::store::VideoStore;
use crate::services::youtube::ShortsApi;
use crate::utils::parse_duration_seconds;
use anyhow::Result;
use log::{debug, error, info};
use std::collections::HashMap;
use tokio::time::sleep;

/// Resolves at most one new short per channel and enriches it with creator
/// metadata. The channel-info cache lives for one run and is never persisted.
pub struct ShortsFetcher<'a, A, S> {
    api: &'a A,
    store: &'a S,
    config: &'a Config,
    channel_cache: HashMap<String, ChannelInfo>,
}

impl<'a, A: ShortsApi, S: VideoStore> ShortsFetcher<'a, A, S> {
    pub fn new(api: &'a A, store: &'a S, config: &'a Config) -> Self {
        Self {
            api,
            store,
            config,
            channel_cache: HashMap::new(),
        }
    }

    /// Walk the channel table in order and collect every qualifying video.
    /// Channel failures are logged and skipped; they never abort the run.
    pub async fn collect_new_shorts(&mut self, channel_ids: &[&str]) -> Vec<VideoRecord> {
        let mut videos = Vec::new();

        for channel_id in channel_ids {
            // Fixed-rate throttle against upstream rate limits.
            sleep(self.config.request_delay).await;

            match self.resolve_channel_video(channel_id).await {
                Ok(Some(video)) => videos.push(video),
                Ok(None) => {}
                Err(err) => error!("{channel_id}: {err:#}"),
            }
        }

        videos
    }

    async fn resolve_channel_video(&mut self, channel_id: &str) -> Result<Option<VideoRecord>> {
        let Some(hit) = self.api.latest_short(channel_id).await? else {
            return Ok(None);
        };
        debug!("Latest short for {channel_id}: {} ({})", hit.title, hit.video_id);

        if self.store.video_exists(&hit.video_id).await? {
            info!("Skipping existing video: {}", hit.video_id);
            return Ok(None);
        }

        let Some(details) = self.api.video_details(&hit.video_id).await? else {
            return Ok(None);
        };

        // The search's short category is coarser than the cap; the parsed
        // duration is what decides.
        let duration_seconds = parse_duration_seconds(&details.duration);
        if duration_seconds > self.config.max_duration_secs {
            return Ok(None);
        }

        let channel = self.channel_info(&details.channel_id).await?;

        Ok(Some(VideoRecord {
            video_id: hit.video_id,
            title: details.title,
            description: details.description,
            thumbnail: details.thumbnail,
            duration: details.duration,
            duration_seconds,
            creator_username: channel.title,
            creator_avatar: channel.avatar,
            is_verified: channel.is_verified,
            likes: details.likes,
            comments: details.comments,
            // Deployment constant: everything this pipeline ingests is
            // labeled AI-generated, not independently classified.
            is_ai: true,
            timestamp: None,
        }))
    }

    /// Cached channel lookup; each channel hits upstream at most once per run.
    async fn channel_info(&mut self, channel_id: &str) -> Result<ChannelInfo> {
        if let Some(info) = self.channel_cache.get(channel_id) {
            return Ok(info.clone());
        }

        let info = self.api.channel_info(channel_id).await?;
        self.channel_cache.insert(channel_id.to_string(), info.clone());
        Ok(info)
    }
}
