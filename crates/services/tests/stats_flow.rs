use chrono::Duration;
use scale_core::model::{QuizMode, SessionDraft, TimerMode};
use scale_core::time::fixed_now;
use services::{AppServices, Clock, StatsService};
use storage::repository::{InMemoryRepository, SessionRepository};

fn draft(key: &str, score: u32, total: u32) -> SessionDraft {
    SessionDraft {
        session_id: "flow".into(),
        key: key.into(),
        mode: QuizMode::ChordToNumber,
        timer_mode: TimerMode::Seconds15,
        score,
        total_questions: total,
        accuracy: f64::from(score) / f64::from(total) * 100.0,
    }
}

#[tokio::test]
async fn four_sessions_produce_expected_stats() {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()));
    let stats = services.stats();

    for (key, score, total) in [("C", 8, 10), ("G", 6, 8), ("C", 9, 12), ("D", 4, 6)] {
        stats.record_session(draft(key, score, total)).await.unwrap();
    }

    let overall = stats.overall_stats().await.unwrap();
    assert_eq!(overall.total_games, 4);
    assert_eq!(overall.overall_accuracy, 74.17);
    assert_eq!(overall.favorite_key.as_deref(), Some("C"));
    let order: Vec<&str> = overall.key_stats.iter().map(|k| k.key.as_str()).collect();
    assert_eq!(order, ["C", "G", "D"]);

    let c = stats.key_stats("C").await.unwrap();
    assert_eq!(c, overall.key_stats[0]);
    assert_eq!(c.best_score, 9);

    let high = stats.high_scores().await.unwrap();
    let keys: Vec<&str> = high.iter().map(|h| h.key.as_str()).collect();
    assert_eq!(keys, ["C", "G", "D"]);
}

#[tokio::test]
async fn recent_accuracy_tracks_latest_five() {
    let repo = InMemoryRepository::new();
    let mut clock = Clock::fixed(fixed_now());

    // Early rounds are poor, the last five are perfect.
    for score in [0, 0, 0, 10, 10, 10, 10, 10] {
        let record = draft("Bb", score, 10).stamp(clock.now());
        repo.append_session(&record).await.unwrap();
        clock.advance(Duration::minutes(1));
    }

    let stored = repo.list_sessions(Some("Bb")).await.unwrap();
    assert!(stored.windows(2).all(|w| w[0].timestamp < w[1].timestamp));

    let service = StatsService::new(clock, std::sync::Arc::new(repo));
    let stats = service.key_stats("Bb").await.unwrap();
    assert_eq!(stats.total_games, 8);
    assert_eq!(stats.recent_accuracy, 100.0);
    assert_eq!(stats.average_accuracy, 62.5);
}
