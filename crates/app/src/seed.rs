//! Synthetic practice history for local demos.

use std::sync::Arc;

use chrono::Duration;
use scale_core::model::{QuizMode, SessionDraft, TimerMode};
use services::Clock;
use storage::repository::{SessionRepository, StorageError};

const KEYS: [&str; 7] = ["C", "G", "D", "A", "E", "F", "Bb"];
const QUESTIONS_PER_ROUND: u32 = 10;

/// Build the `i`-th synthetic round. Scores vary but stay within the round size.
#[must_use]
pub fn sample_draft(i: u32) -> SessionDraft {
    let idx = i as usize;
    let score = i.wrapping_mul(7).wrapping_add(3) % (QUESTIONS_PER_ROUND + 1);
    let accuracy = f64::from(score) / f64::from(QUESTIONS_PER_ROUND) * 100.0;

    SessionDraft {
        session_id: format!("seed-{i}"),
        key: KEYS[idx % KEYS.len()].to_string(),
        mode: QuizMode::ALL[idx % QuizMode::ALL.len()],
        timer_mode: TimerMode::ALL[idx % TimerMode::ALL.len()],
        score,
        total_questions: QUESTIONS_PER_ROUND,
        accuracy,
    }
}

/// Append `count` synthetic sessions one minute apart, starting at `clock`.
///
/// # Errors
///
/// Returns `StorageError` if a record cannot be appended.
pub async fn seed_sessions(
    sessions: Arc<dyn SessionRepository>,
    mut clock: Clock,
    count: u32,
) -> Result<(), StorageError> {
    for i in 0..count {
        let record = sample_draft(i).stamp(clock.now());
        sessions.append_session(&record).await?;
        clock.advance(Duration::minutes(1));
    }
    Ok(())
}
