use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{QuizMode, TimerMode};

/// A practice round as submitted by a client, before it is persisted.
///
/// Carries no timestamp: one is assigned when the record is appended, and a
/// `timestamp` field in an incoming payload is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub session_id: String,
    pub key: String,
    pub mode: QuizMode,
    pub timer_mode: TimerMode,
    pub score: u32,
    pub total_questions: u32,
    /// Percentage in `[0, 100]`, trusted as submitted.
    pub accuracy: f64,
}

impl SessionDraft {
    /// Attach the persist-time timestamp, producing the stored record.
    #[must_use]
    pub fn stamp(self, timestamp: DateTime<Utc>) -> SessionRecord {
        SessionRecord {
            session_id: self.session_id,
            key: self.key,
            mode: self.mode,
            timer_mode: self.timer_mode,
            score: self.score,
            total_questions: self.total_questions,
            accuracy: self.accuracy,
            timestamp,
        }
    }
}

/// One completed practice round, as persisted.
///
/// Records are append-only; nothing updates or deletes them once stored.
/// `accuracy` is never recomputed from `score / total_questions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub key: String,
    pub mode: QuizMode,
    pub timer_mode: TimerMode,
    pub score: u32,
    pub total_questions: u32,
    pub accuracy: f64,
    pub timestamp: DateTime<Utc>,
}
