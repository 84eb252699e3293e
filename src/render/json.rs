//! JSON bodies for the badge services and the stats endpoints.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::error;

use super::LABEL;

const BADGE_COLOR: &str = "blue";

/// badgen.net `https` endpoint body
#[derive(Debug, Serialize)]
pub struct BadgenBody {
    pub subject: &'static str,
    pub status: String,
    pub color: &'static str,
}

/// shields.io endpoint badge schema
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShieldsBody {
    pub schema_version: u8,
    pub label: &'static str,
    pub message: String,
    pub color: &'static str,
    pub style: &'static str,
    pub cache_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsBody {
    pub views: u64,
}

impl BadgenBody {
    pub fn new(count: u64) -> Self {
        Self {
            subject: LABEL,
            status: count.to_string(),
            color: BADGE_COLOR,
        }
    }
}

impl ShieldsBody {
    pub fn new(count: u64) -> Self {
        Self {
            schema_version: 1,
            label: LABEL,
            message: count.to_string(),
            color: BADGE_COLOR,
            style: "flat-square",
            cache_seconds: 0,
        }
    }
}

pub fn badgen_json(count: u64) -> String {
    to_json(&BadgenBody::new(count))
}

pub fn shields_json(count: u64) -> String {
    to_json(&ShieldsBody::new(count))
}

pub fn stats_json(count: u64) -> String {
    to_json(&StatsBody { views: count })
}

/// `{ "<key>": { "views": n }, ... }` with keys exactly as requested.
pub fn stats_batch_json(counts: &BTreeMap<String, u64>) -> String {
    let body: BTreeMap<&str, StatsBody> = counts
        .iter()
        .map(|(key, views)| (key.as_str(), StatsBody { views: *views }))
        .collect();
    to_json(&body)
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        error!("Failed to serialize response body: {}", e);
        "{}".to_string()
    })
}
