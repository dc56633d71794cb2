use crate::models::{ErrorLogEntry, ExecutionLogEntry, VideoRecord};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use elasticsearch::http::request::JsonBody;
use elasticsearch::indices::IndicesCreateParts;
use elasticsearch::{BulkParts, CountParts, Elasticsearch, GetParts, IndexParts};
use log::{error, info};
use serde_json::{json, Value};

pub const VIDEOS_INDEX: &str = "videos";
pub const LOGS_INDEX: &str = "ingest_logs";
pub const ERRORS_INDEX: &str = "ingest_errors";

/// Document-store operations the pipeline depends on. [`EsStore`] is the
/// production implementation; tests substitute an in-memory double.
#[async_trait]
pub trait VideoStore {
    async fn video_exists(&self, video_id: &str) -> Result<bool>;
    /// Number of persisted videos stamped at or after `since`.
    async fn count_videos_since(&self, since: DateTime<Utc>) -> Result<u64>;
    /// Write all records in one batch, stamping each with the write time.
    /// Any item failure fails the whole call.
    async fn save_videos(&self, videos: &[VideoRecord]) -> Result<()>;
    async fn log_execution(&self, entry: &ExecutionLogEntry) -> Result<()>;
    async fn log_error(&self, entry: &ErrorLogEntry) -> Result<()>;
}

pub struct EsStore {
    client: Elasticsearch,
}

impl EsStore {
    pub fn new(client: Elasticsearch) -> Self {
        Self { client }
    }

    /// Create the backing indices if they are missing. Failures here are
    /// logged and not fatal; the first read or write surfaces them.
    pub async fn ensure_indices(&self) {
        self.ensure_index(
            VIDEOS_INDEX,
            json!({
                "mappings": {
                    "properties": {
                        "video_id": { "type": "keyword" },
                        "title": { "type": "text" },
                        "description": { "type": "text" },
                        "thumbnail": { "type": "keyword" },
                        "duration": { "type": "keyword" },
                        "duration_seconds": { "type": "long" },
                        "creator_username": { "type": "keyword" },
                        "creator_avatar": { "type": "keyword" },
                        "is_verified": { "type": "boolean" },
                        "likes": { "type": "long" },
                        "comments": { "type": "long" },
                        "is_ai": { "type": "boolean" },
                        "timestamp": { "type": "date" }
                    }
                }
            }),
        )
        .await;

        self.ensure_index(
            LOGS_INDEX,
            json!({
                "mappings": {
                    "properties": {
                        "date": { "type": "date" },
                        "video_count": { "type": "long" },
                        "quota_used": { "type": "long" }
                    }
                }
            }),
        )
        .await;

        self.ensure_index(
            ERRORS_INDEX,
            json!({
                "mappings": {
                    "properties": {
                        "timestamp": { "type": "date" },
                        "message": { "type": "text" },
                        "trace": { "type": "text" }
                    }
                }
            }),
        )
        .await;
    }

    async fn ensure_index(&self, index: &str, body: Value) {
        match self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(body)
            .send()
            .await
        {
            Ok(response) => {
                if response.status_code().is_success() {
                    info!("Index '{index}' created or already exists.");
                } else {
                    let response_text = response.text().await.unwrap_or_default();
                    if response_text.contains("resource_already_exists_exception") {
                        info!("Index '{index}' already exists.");
                    } else {
                        error!("Failed to create index '{index}': {response_text}");
                    }
                }
            }
            Err(e) => {
                error!("Failed to connect to Elasticsearch to create index '{index}': {e:?}");
            }
        }
    }
}

#[async_trait]
impl VideoStore for EsStore {
    async fn video_exists(&self, video_id: &str) -> Result<bool> {
        let response = self
            .client
            .get(GetParts::IndexId(VIDEOS_INDEX, video_id))
            .send()
            .await?;
        Ok(response.status_code().is_success())
    }

    async fn count_videos_since(&self, since: DateTime<Utc>) -> Result<u64> {
        let response = self
            .client
            .count(CountParts::Index(&[VIDEOS_INDEX]))
            .body(json!({
                "query": {
                    "range": {
                        "timestamp": { "gte": since.to_rfc3339() }
                    }
                }
            }))
            .send()
            .await?;

        if !response.status_code().is_success() {
            return Err(anyhow!(
                "count on '{VIDEOS_INDEX}' failed with status: {}",
                response.status_code()
            ));
        }

        let body: Value = response.json().await?;
        Ok(body["count"].as_u64().unwrap_or(0))
    }

    async fn save_videos(&self, videos: &[VideoRecord]) -> Result<()> {
        let stamp = Utc::now();
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(videos.len() * 2);
        for video in videos {
            let mut doc = serde_json::to_value(video)?;
            doc["timestamp"] = json!(stamp);
            body.push(json!({ "index": { "_id": video.video_id } }).into());
            body.push(doc.into());
        }

        let response = self
            .client
            .bulk(BulkParts::Index(VIDEOS_INDEX))
            .body(body)
            .send()
            .await?;

        if !response.status_code().is_success() {
            return Err(anyhow!(
                "bulk write to '{VIDEOS_INDEX}' failed with status: {}",
                response.status_code()
            ));
        }

        // _bulk applies per item; refuse to report a partial write as success.
        let report: Value = response.json().await?;
        if report["errors"].as_bool().unwrap_or(false) {
            return Err(anyhow!(
                "bulk write to '{VIDEOS_INDEX}' reported item failures: {report}"
            ));
        }

        Ok(())
    }

    async fn log_execution(&self, entry: &ExecutionLogEntry) -> Result<()> {
        append(&self.client, LOGS_INDEX, json!(entry)).await
    }

    async fn log_error(&self, entry: &ErrorLogEntry) -> Result<()> {
        append(&self.client, ERRORS_INDEX, json!(entry)).await
    }
}

async fn append(client: &Elasticsearch, index: &str, doc: Value) -> Result<()> {
    let response = client
        .index(IndexParts::Index(index))
        .body(doc)
        .send()
        .await?;

    if !response.status_code().is_success() {
        return Err(anyhow!(
            "append to '{index}' failed with status: {}",
            response.status_code()
        ));
    }

    Ok(())
}
