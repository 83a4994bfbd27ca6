//! Private leaderboard JSON types.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Number of puzzle days in an event.
pub const DAYS: u32 = 25;

/// A private leaderboard, as served by
/// `/{year}/leaderboard/private/view/{id}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Leaderboard {
    #[serde(deserialize_with = "id_string")]
    pub owner_id: String,
    #[serde(default)]
    pub event: Option<String>,
    /// Members keyed by user id.
    pub members: HashMap<String, Member>,
}

impl Leaderboard {
    /// Display name of the leaderboard's owner.
    pub fn owner_name(&self) -> String {
        self.members
            .get(&self.owner_id)
            .map(Member::display_name)
            .unwrap_or_else(|| anonymous(&self.owner_id))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    /// `None` for users who have not set a public name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub local_score: u64,
    /// Day number → star number → completion info.
    #[serde(default)]
    pub completion_day_level: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl Member {
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => anonymous(&self.id),
        }
    }

    /// Stars earned on a day (0, 1 or 2).
    pub fn stars_on(&self, day: u32) -> u32 {
        self.completion_day_level
            .get(&day.to_string())
            .map(|parts| parts.keys().filter(|part| *part == "1" || *part == "2").count() as u32)
            .unwrap_or(0)
    }

    /// Stars earned across the whole event.
    pub fn total_stars(&self) -> u32 {
        (1..=DAYS).map(|day| self.stars_on(day)).sum()
    }
}

fn anonymous(id: &str) -> String {
    format!("(user #{})", id)
}

/// Ids were strings in older events and are numbers in newer ones.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Number(id) => id.to_string(),
    })
}
