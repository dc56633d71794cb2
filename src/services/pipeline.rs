use crate::config::{Config, TARGET_TZ};
use crate::models::ExecutionLogEntry;
use crate::services::fetcher::ShortsFetcher;
use crate::services::store::VideoStore;
use crate::services::youtube::ShortsApi;
use crate::utils::quota_cost;
use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use log::info;

/// How a run ended: short-circuited at one of the gates, or completed.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    OffSchedule,
    QuotaReached,
    Completed { video_count: u64, quota_used: u64 },
}

/// True iff `now` falls in the scheduled hour of the target timezone.
pub fn is_scheduled_hour(now: DateTime<Utc>, target_hour: u32) -> bool {
    now.with_timezone(&TARGET_TZ).hour() == target_hour
}

/// Midnight of the current calendar day in the target timezone, as a UTC
/// instant. The daily cap and the hour gate agree on what "today" means.
pub fn start_of_current_day(now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let midnight = now
        .with_timezone(&TARGET_TZ)
        .date_naive()
        .and_time(NaiveTime::MIN);
    midnight
        .and_local_timezone(TARGET_TZ)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("no valid midnight for {midnight} in {TARGET_TZ}"))
}

/// One complete ingest run: gates, per-channel collection, persistence, run
/// log. Errors are fatal for the run and handled by the caller's boundary.
pub async fn run<A: ShortsApi, S: VideoStore>(
    api: &A,
    store: &S,
    config: &Config,
    channel_ids: &[&str],
    now: DateTime<Utc>,
) -> Result<RunOutcome> {
    if !is_scheduled_hour(now, config.target_hour) {
        info!(
            "Not the scheduled hour ({}:00 {TARGET_TZ})",
            config.target_hour
        );
        return Ok(RunOutcome::OffSchedule);
    }

    let day_start = start_of_current_day(now)?;
    if store.count_videos_since(day_start).await? >= config.max_daily_videos {
        info!("Daily limit reached ({} videos)", config.max_daily_videos);
        return Ok(RunOutcome::QuotaReached);
    }

    let mut fetcher = ShortsFetcher::new(api, store, config);
    let videos = fetcher.collect_new_shorts(channel_ids).await;

    if videos.is_empty() {
        info!("No new videos found today");
    } else {
        store.save_videos(&videos).await?;
    }

    let video_count = videos.len() as u64;
    let quota_used = quota_cost(video_count);
    store
        .log_execution(&ExecutionLogEntry {
            date: now,
            video_count,
            quota_used,
        })
        .await?;

    if video_count > 0 {
        info!("Added {video_count} videos, {quota_used} quota units used");
    }

    Ok(RunOutcome::Completed {
        video_count,
        quota_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::doubles::{short_hit, test_config, video_details, FakeApi, FakeStore};
    use crate::models::ChannelInfo;
    use chrono::TimeZone;

    // 18:00 in Casablanca (UTC+1 outside Ramadan) on 2024-01-15.
    fn scheduled_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 17, 0, 0).unwrap()
    }

    #[test]
    fn gate_opens_for_exactly_one_hour_of_the_day() {
        let mut open_hours = 0;
        for hour in 0..24 {
            let now = Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap();
            if is_scheduled_hour(now, 18) {
                open_hours += 1;
            }
        }
        assert_eq!(open_hours, 1);
    }

    #[test]
    fn gate_matches_the_target_hour_in_local_time() {
        assert!(is_scheduled_hour(scheduled_instant(), 18));
        assert!(!is_scheduled_hour(scheduled_instant(), 17));
    }

    #[test]
    fn day_starts_at_local_midnight() {
        let start = start_of_current_day(scheduled_instant()).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 14, 23, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn off_schedule_run_is_a_no_op() {
        let mut api = FakeApi::default();
        api.shorts.insert("chan-a".into(), short_hit("vid-1"));
        let store = FakeStore::default();
        let config = test_config();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 3, 0, 0).unwrap();

        let outcome = run(&api, &store, &config, &["chan-a"], now).await.unwrap();

        assert_eq!(outcome, RunOutcome::OffSchedule);
        assert_eq!(api.calls.lock().unwrap().searches, 0);
        assert!(store.execution_logs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn quota_gate_blocks_all_upstream_calls() {
        let mut api = FakeApi::default();
        api.shorts.insert("chan-a".into(), short_hit("vid-1"));
        let mut store = FakeStore::default();
        store.daily_count = 40;
        let config = test_config();

        let outcome = run(&api, &store, &config, &["chan-a"], scheduled_instant())
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::QuotaReached);
        assert_eq!(api.calls.lock().unwrap().searches, 0);
        assert!(store.saved_batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_run_still_appends_an_execution_log() {
        let api = FakeApi::default();
        let store = FakeStore::default();
        let config = test_config();

        let outcome = run(&api, &store, &config, &["chan-a"], scheduled_instant())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Completed {
                video_count: 0,
                quota_used: 0
            }
        );
        assert!(store.saved_batches.lock().unwrap().is_empty());
        let logs = store.execution_logs.lock().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].video_count, 0);
        assert_eq!(logs[0].quota_used, 0);
    }

    #[tokio::test]
    async fn mixed_channels_end_to_end() {
        // chan-a's short already exists, chan-b's is over the cap, chan-c's
        // is fresh and 60 seconds long.
        let mut api = FakeApi::default();
        api.shorts.insert("chan-a".into(), short_hit("vid-a"));
        api.shorts.insert("chan-b".into(), short_hit("vid-b"));
        api.shorts.insert("chan-c".into(), short_hit("vid-c"));
        api.details
            .insert("vid-b".into(), video_details("owner-b", "PT3M20S"));
        api.details
            .insert("vid-c".into(), video_details("owner-c", "PT1M"));
        api.channels.insert(
            "owner-c".into(),
            ChannelInfo {
                title: "Owner C".to_string(),
                avatar: "https://example.com/c.jpg".to_string(),
                is_verified: false,
            },
        );
        let mut store = FakeStore::default();
        store.existing.insert("vid-a".into());
        let config = test_config();

        let outcome = run(
            &api,
            &store,
            &config,
            &["chan-a", "chan-b", "chan-c"],
            scheduled_instant(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Completed {
                video_count: 1,
                quota_used: 102
            }
        );

        let batches = store.saved_batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 1);
        assert_eq!(batches[0][0].video_id, "vid-c");

        let logs = store.execution_logs.lock().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].video_count, 1);
        assert_eq!(logs[0].quota_used, 102);
        assert!(store.error_logs.lock().unwrap().is_empty());
    }
}
