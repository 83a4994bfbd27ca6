//! Common test utilities for integration tests.

use advent_client::{AdventOfCodeApi, HttpJsonFetcher};
use chat_client::RoomId;
use chrono::NaiveDate;
use room_bot::{FixedClock, Dispatcher};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

/// A clock set to the given day at noon.
pub fn clock_at(year: i32, month: u32, day: u32) -> Arc<FixedClock> {
    let now = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    Arc::new(FixedClock(now))
}

/// Create a dispatcher whose Advent of Code API points at a mock server.
pub fn test_dispatcher(
    mock_server: &MockServer,
    leaderboard_ids: &[(RoomId, &str)],
    clock: Arc<FixedClock>,
) -> Dispatcher {
    let fetcher = HttpJsonFetcher::new(Some("test-session".into()), Duration::from_secs(5)).unwrap();
    let api = AdventOfCodeApi::new(Arc::new(fetcher), mock_server.uri());
    let ids: HashMap<RoomId, String> = leaderboard_ids
        .iter()
        .map(|(room_id, id)| (*room_id, id.to_string()))
        .collect();

    Dispatcher::with_default_commands(api, ids, clock, "/")
}

/// A small 2023 leaderboard.
pub fn leaderboard_json() -> serde_json::Value {
    serde_json::json!({
        "owner_id": 1,
        "event": "2023",
        "members": {
            "1": {
                "id": 1,
                "name": "Ada",
                "local_score": 12,
                "stars": 2,
                "completion_day_level": {"1": {"1": {"get_star_ts": 1701407000}, "2": {"get_star_ts": 1701408000}}}
            },
            "2": {
                "id": 2,
                "name": "Grace",
                "local_score": 5,
                "stars": 1,
                "completion_day_level": {"1": {"1": {"get_star_ts": 1701409000}}}
            }
        }
    })
}
