use crate::models::ChannelInfo;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Status value YouTube reports for channels cleared for long uploads; used
/// as the verification proxy for creators.
const ELIGIBLE_UPLOADS_STATUS: &str = "eligible";

/// Most-recent short-category hit for a channel, from the search endpoint.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub video_id: String,
    pub title: String,
}

/// Flattened videos-endpoint response for a single video.
#[derive(Debug, Clone)]
pub struct VideoDetails {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_id: String,
    pub duration: String,
    pub likes: u64,
    pub comments: u64,
}

/// Read-only view of the upstream video platform. [`YouTubeClient`] is the
/// production implementation; tests substitute an in-memory double.
#[async_trait]
pub trait ShortsApi {
    /// Newest short-form video for a channel, if any.
    async fn latest_short(&self, channel_id: &str) -> Result<Option<SearchHit>>;
    /// Full details for a video id; `None` when upstream has no item for it.
    async fn video_details(&self, video_id: &str) -> Result<Option<VideoDetails>>;
    /// Display metadata for a channel. A missing channel is an error.
    async fn channel_info(&self, channel_id: &str) -> Result<ChannelInfo>;
}

pub struct YouTubeClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: YOUTUBE_API_BASE.to_string(),
        }
    }

    async fn get_json(&self, resource: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, resource);
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?
            .json::<Value>()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl ShortsApi for YouTubeClient {
    async fn latest_short(&self, channel_id: &str) -> Result<Option<SearchHit>> {
        // https://developers.google.com/youtube/v3/docs/search
        let data = self
            .get_json(
                "search",
                &[
                    ("channelId", channel_id),
                    ("part", "snippet"),
                    ("order", "date"),
                    ("maxResults", "1"),
                    ("type", "video"),
                    ("videoDuration", "short"),
                    ("fields", "items(id(videoId),snippet(title))"),
                ],
            )
            .await?;

        let item = &data["items"][0];
        Ok(item["id"]["videoId"].as_str().map(|video_id| SearchHit {
            video_id: video_id.to_string(),
            title: item["snippet"]["title"].as_str().unwrap_or("").to_string(),
        }))
    }

    async fn video_details(&self, video_id: &str) -> Result<Option<VideoDetails>> {
        // https://developers.google.com/youtube/v3/docs/videos
        let data = self
            .get_json(
                "videos",
                &[
                    ("id", video_id),
                    ("part", "snippet,contentDetails,statistics"),
                    (
                        "fields",
                        "items(snippet(title,description,thumbnails/high,channelId),contentDetails/duration,statistics)",
                    ),
                ],
            )
            .await?;

        let item = &data["items"][0];
        if item.is_null() {
            return Ok(None);
        }

        Ok(Some(VideoDetails {
            title: item["snippet"]["title"].as_str().unwrap_or("").to_string(),
            description: item["snippet"]["description"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            thumbnail: item["snippet"]["thumbnails"]["high"]["url"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            channel_id: item["snippet"]["channelId"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            duration: item["contentDetails"]["duration"]
                .as_str()
                .unwrap_or("")
                .to_string(),
            likes: item["statistics"]["likeCount"]
                .as_str()
                .unwrap_or("0")
                .parse()
                .unwrap_or(0),
            comments: item["statistics"]["commentCount"]
                .as_str()
                .unwrap_or("0")
                .parse()
                .unwrap_or(0),
        }))
    }

    async fn channel_info(&self, channel_id: &str) -> Result<ChannelInfo> {
        // https://developers.google.com/youtube/v3/docs/channels
        let data = self
            .get_json(
                "channels",
                &[
                    ("id", channel_id),
                    ("part", "snippet,status"),
                    ("fields", "items(snippet(title,thumbnails/high/url),status)"),
                ],
            )
            .await?;

        let item = &data["items"][0];
        let title = item["snippet"]["title"]
            .as_str()
            .ok_or_else(|| anyhow!("channel {channel_id}: no snippet in response"))?
            .to_string();
        let avatar = item["snippet"]["thumbnails"]["high"]["url"]
            .as_str()
            .ok_or_else(|| anyhow!("channel {channel_id}: no avatar in response"))?
            .to_string();
        let is_verified =
            item["status"]["longUploadsStatus"].as_str() == Some(ELIGIBLE_UPLOADS_STATUS);

        Ok(ChannelInfo {
            title,
            avatar,
            is_verified,
        })
    }
}
