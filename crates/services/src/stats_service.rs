use std::sync::Arc;

use scale_core::model::{HighScore, KeyStats, OverallStats, SessionDraft, SessionRecord};
use scale_core::stats;
use storage::repository::{InMemoryRepository, SessionRepository};
use tracing::debug;

use crate::Clock;
use crate::error::StatsError;

/// Records practice sessions and answers statistics queries over them.
///
/// This service owns:
/// - the time source (`Clock`) used to stamp records at persist time
/// - repository access
///
/// Every query fetches a fresh snapshot and recomputes; nothing is cached.
#[derive(Clone)]
pub struct StatsService {
    clock: Clock,
    sessions: Arc<dyn SessionRepository>,
}

impl StatsService {
    #[must_use]
    pub fn new(clock: Clock, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { clock, sessions }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(clock, Arc::new(InMemoryRepository::new()))
    }

    /// Persist a submitted session, stamping it with the current time.
    ///
    /// The submitted accuracy is stored as-is.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` if the store is unavailable.
    pub async fn record_session(&self, draft: SessionDraft) -> Result<SessionRecord, StatsError> {
        let record = draft.stamp(self.clock.now());
        self.sessions.append_session(&record).await?;
        debug!(key = %record.key, score = record.score, "session appended");
        Ok(record)
    }

    /// Overall stats across every recorded session.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` on repository failures.
    pub async fn overall_stats(&self) -> Result<OverallStats, StatsError> {
        let snapshot = self.sessions.list_sessions(None).await?;
        debug!(records = snapshot.len(), "computing overall stats");
        Ok(stats::overall_stats(&snapshot))
    }

    /// Stats for one key, computed from a key-filtered snapshot.
    ///
    /// Unknown keys yield zero-valued stats rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` on repository failures.
    pub async fn key_stats(&self, key: &str) -> Result<KeyStats, StatsError> {
        let snapshot = self.sessions.list_sessions(Some(key)).await?;
        debug!(key, records = snapshot.len(), "computing key stats");
        Ok(stats::key_stats(key, &snapshot))
    }

    /// Best score per key, highest first.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` on repository failures.
    pub async fn high_scores(&self) -> Result<Vec<HighScore>, StatsError> {
        let snapshot = self.sessions.list_sessions(None).await?;
        debug!(records = snapshot.len(), "computing high scores");
        Ok(stats::high_scores(&snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::Duration;
    use scale_core::model::{QuizMode, TimerMode};
    use scale_core::time::fixed_now;
    use storage::repository::StorageError;

    struct DownRepository;

    #[async_trait]
    impl SessionRepository for DownRepository {
        async fn append_session(&self, _record: &SessionRecord) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("connection refused".into()))
        }

        async fn list_sessions(
            &self,
            _key: Option<&str>,
        ) -> Result<Vec<SessionRecord>, StorageError> {
            Err(StorageError::Unavailable("connection refused".into()))
        }
    }

    fn draft(key: &str, score: u32, total: u32) -> SessionDraft {
        SessionDraft {
            session_id: "abc".into(),
            key: key.into(),
            mode: QuizMode::NumberToChord,
            timer_mode: TimerMode::Untimed,
            score,
            total_questions: total,
            accuracy: f64::from(score) / f64::from(total) * 100.0,
        }
    }

    #[tokio::test]
    async fn record_session_stamps_with_clock() {
        let at = fixed_now() + Duration::hours(2);
        let service = StatsService::in_memory(Clock::fixed(at));

        let record = service.record_session(draft("E", 3, 4)).await.unwrap();
        assert_eq!(record.timestamp, at);

        let stats = service.key_stats("E").await.unwrap();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.average_accuracy, 75.0);
    }

    #[tokio::test]
    async fn key_stats_for_unknown_key_is_zero_valued() {
        let service = StatsService::in_memory(Clock::fixed(fixed_now()));
        service.record_session(draft("C", 5, 10)).await.unwrap();

        let stats = service.key_stats("Ab").await.unwrap();
        assert_eq!(stats, KeyStats::empty("Ab"));
    }

    #[tokio::test]
    async fn store_errors_pass_through() {
        let service = StatsService::new(Clock::fixed(fixed_now()), Arc::new(DownRepository));

        let err = service.record_session(draft("C", 1, 1)).await.unwrap_err();
        assert!(matches!(
            err,
            StatsError::Storage(StorageError::Unavailable(_))
        ));
        assert!(service.overall_stats().await.is_err());
        assert!(service.key_stats("C").await.is_err());
        assert!(service.high_scores().await.is_err());
    }
}
