mod channels;
mod config;
mod models;
mod services;
mod utils;

use anyhow::Result;
use chrono::Utc;
use log::error;

use crate::config::{create_elasticsearch_client, init_logger, load_environment, Config};
use crate::models::ErrorLogEntry;
use crate::services::pipeline;
use crate::services::store::{EsStore, VideoStore};
use crate::services::youtube::YouTubeClient;

#[tokio::main]
async fn main() {
    load_environment();
    init_logger();

    if let Err(err) = run_once().await {
        error!("Fatal: {err:#}");
    }

    // The process exits 0 on every path, fatal errors included. Schedulers
    // must watch the error-log index, not the exit code.
}

async fn run_once() -> Result<()> {
    let config = Config::from_env()?;
    let es_client = create_elasticsearch_client(&config)?;
    let store = EsStore::new(es_client);
    store.ensure_indices().await;

    let api = YouTubeClient::new(&config.youtube_api_key);

    if let Err(err) = pipeline::run(&api, &store, &config, channels::CHANNELS, Utc::now()).await {
        error!("Run failed: {err:#}");
        if let Err(log_err) = store.log_error(&ErrorLogEntry::new(&err)).await {
            error!("Could not record the failure: {log_err:#}");
        }
    }

    Ok(())
}
