use scale_core::model::{QuizMode, SessionRecord, TimerMode};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn parse_quiz_mode(s: &str) -> Result<QuizMode, StorageError> {
    s.parse().map_err(ser)
}

pub(crate) fn parse_timer_mode(s: &str) -> Result<TimerMode, StorageError> {
    s.parse().map_err(ser)
}

pub(crate) fn map_session_row(row: &sqlx::sqlite::SqliteRow) -> Result<SessionRecord, StorageError> {
    let mode: String = row.try_get("mode").map_err(ser)?;
    let timer_mode: String = row.try_get("timer_mode").map_err(ser)?;

    Ok(SessionRecord {
        session_id: row.try_get("session_id").map_err(ser)?,
        key: row.try_get("key").map_err(ser)?,
        mode: parse_quiz_mode(&mode)?,
        timer_mode: parse_timer_mode(&timer_mode)?,
        score: u32_from_i64("score", row.try_get::<i64, _>("score").map_err(ser)?)?,
        total_questions: u32_from_i64(
            "total_questions",
            row.try_get::<i64, _>("total_questions").map_err(ser)?,
        )?,
        accuracy: row.try_get("accuracy").map_err(ser)?,
        timestamp: row.try_get("timestamp").map_err(ser)?,
    })
}
