//! Pure aggregation over a snapshot of session records.
//!
//! Every function here takes an immutable slice and recomputes from scratch.
//! Record order matters: partitions keep the order of the input slice, and
//! "recent" accuracy is the tail of that order, not a timestamp sort.

use std::collections::HashMap;

use crate::model::{HighScore, KeyStats, OverallStats, SessionRecord};

/// Number of trailing sessions averaged into `recent_accuracy`.
pub const RECENT_WINDOW: usize = 5;

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[allow(clippy::cast_precision_loss)]
fn mean_accuracy<'a>(records: impl ExactSizeIterator<Item = &'a SessionRecord>) -> f64 {
    let len = records.len();
    if len == 0 {
        return 0.0;
    }
    let sum: f64 = records.map(|r| r.accuracy).sum();
    sum / len as f64
}

fn count_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Group records by key, keeping keys in first-occurrence order and each
/// group in input order.
fn partition_by_key(records: &[SessionRecord]) -> Vec<(&str, Vec<&SessionRecord>)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&SessionRecord>)> = Vec::new();

    for record in records {
        let key = record.key.as_str();
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    groups
}

fn summarize_key(key: &str, records: &[&SessionRecord]) -> KeyStats {
    if records.is_empty() {
        return KeyStats::empty(key);
    }

    let best_score = records.iter().map(|r| r.score).max().unwrap_or(0);
    let tail = &records[records.len().saturating_sub(RECENT_WINDOW)..];

    KeyStats {
        key: key.to_owned(),
        total_games: count_u32(records.len()),
        average_accuracy: round2(mean_accuracy(records.iter().copied())),
        best_score,
        recent_accuracy: round2(mean_accuracy(tail.iter().copied())),
    }
}

/// Stats for one key over records already filtered to that key.
///
/// The slice is not re-filtered; callers pass the store's per-key snapshot.
/// An empty slice yields zero-valued stats echoing `key`.
#[must_use]
pub fn key_stats(key: &str, records: &[SessionRecord]) -> KeyStats {
    let refs: Vec<&SessionRecord> = records.iter().collect();
    summarize_key(key, &refs)
}

/// Overall stats plus per-key breakdown for a full snapshot.
#[must_use]
pub fn overall_stats(records: &[SessionRecord]) -> OverallStats {
    if records.is_empty() {
        return OverallStats::default();
    }

    let mut per_key: Vec<KeyStats> = partition_by_key(records)
        .into_iter()
        .map(|(key, group)| summarize_key(key, &group))
        .collect();
    // Stable: equal counts stay in first-occurrence order.
    per_key.sort_by(|a, b| b.total_games.cmp(&a.total_games));

    OverallStats {
        total_games: count_u32(records.len()),
        overall_accuracy: round2(mean_accuracy(records.iter())),
        favorite_key: per_key.first().map(|s| s.key.clone()),
        key_stats: per_key,
    }
}

/// Best score per key, highest first. Equal scores are ordered by key name.
#[must_use]
pub fn high_scores(records: &[SessionRecord]) -> Vec<HighScore> {
    let mut best: HashMap<&str, u32> = HashMap::new();
    for record in records {
        best.entry(record.key.as_str())
            .and_modify(|score| *score = (*score).max(record.score))
            .or_insert(record.score);
    }

    let mut table: Vec<HighScore> = best
        .into_iter()
        .map(|(key, score)| HighScore {
            key: key.to_owned(),
            score,
        })
        .collect();
    table.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.key.cmp(&b.key)));
    table
}
