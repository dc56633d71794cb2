use anyhow::{Context, Result};
use chrono_tz::Tz;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use elasticsearch::Elasticsearch;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// All wall-clock decisions (the schedule window and the daily quota day)
/// are made in this timezone.
pub const TARGET_TZ: Tz = chrono_tz::Africa::Casablanca;

#[derive(Debug, Clone)]
pub struct Config {
    pub youtube_api_key: String,
    pub elasticsearch_url: String,
    /// At most this many videos are persisted per calendar day.
    pub max_daily_videos: u64,
    /// Hour of day (0-23, in [`TARGET_TZ`]) during which a run proceeds.
    pub target_hour: u32,
    /// Pause before each upstream request.
    pub request_delay: Duration,
    /// Videos longer than this are not ingested.
    pub max_duration_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let youtube_api_key = lookup("YOUTUBE_API_KEY")
            .context("YOUTUBE_API_KEY environment variable must be set")?;
        let elasticsearch_url =
            lookup("ELASTICSEARCH_URL").unwrap_or_else(|| "http://localhost:9200".to_string());

        Ok(Self {
            youtube_api_key,
            elasticsearch_url,
            max_daily_videos: parse_or(&lookup, "MAX_DAILY_VIDEOS", 40),
            target_hour: parse_or(&lookup, "TARGET_HOUR", 18),
            request_delay: Duration::from_millis(parse_or(&lookup, "REQUEST_DELAY_MS", 1500)),
            max_duration_secs: parse_or(&lookup, "MAX_DURATION_SECS", 180),
        })
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting shorts ingest run...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_elasticsearch_client(config: &Config) -> Result<Elasticsearch> {
    let es_url = &config.elasticsearch_url;
    info!("Connecting to Elasticsearch at: {es_url}");

    let transport =
        TransportBuilder::new(SingleNodeConnectionPool::new(es_url.parse()?)).build()?;

    Ok(Elasticsearch::new(transport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn config_defaults() {
        let config = Config::from_lookup(lookup_from(&[("YOUTUBE_API_KEY", "k")])).unwrap();
        assert_eq!(config.elasticsearch_url, "http://localhost:9200");
        assert_eq!(config.max_daily_videos, 40);
        assert_eq!(config.target_hour, 18);
        assert_eq!(config.request_delay, Duration::from_millis(1500));
        assert_eq!(config.max_duration_secs, 180);
    }

    #[test]
    fn config_requires_api_key() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
    }

    #[test]
    fn config_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("YOUTUBE_API_KEY", "k"),
            ("MAX_DAILY_VIDEOS", "5"),
            ("TARGET_HOUR", "9"),
            ("REQUEST_DELAY_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.max_daily_videos, 5);
        assert_eq!(config.target_hour, 9);
        assert_eq!(config.request_delay, Duration::ZERO);
    }

    #[test]
    fn config_ignores_unparseable_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("YOUTUBE_API_KEY", "k"),
            ("MAX_DAILY_VIDEOS", "many"),
        ]))
        .unwrap();
        assert_eq!(config.max_daily_videos, 40);
    }
}
