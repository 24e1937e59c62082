use chrono::Duration;
use scale_core::model::{QuizMode, SessionDraft, SessionRecord, TimerMode};
use scale_core::time::fixed_now;
use storage::repository::{SessionRepository, Storage};
use storage::sqlite::SqliteRepository;

fn build_record(key: &str, score: u32, total: u32, minutes: i64) -> SessionRecord {
    SessionDraft {
        session_id: format!("session-{minutes}"),
        key: key.to_string(),
        mode: QuizMode::ChordToNumber,
        timer_mode: TimerMode::Seconds30,
        score,
        total_questions: total,
        accuracy: f64::from(score) / f64::from(total) * 100.0,
    }
    .stamp(fixed_now() + Duration::minutes(minutes))
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_fields() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let record = build_record("F#", 4, 6, 0);
    repo.append_session(&record).await.unwrap();

    let fetched = repo.list_sessions(None).await.expect("list");
    assert_eq!(fetched, vec![record]);
}

#[tokio::test]
async fn sqlite_lists_in_insertion_order_and_filters_by_key() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_order?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    // Timestamps run backwards so insertion order and time order disagree.
    let inputs = [("C", 8, 10, 30), ("G", 6, 8, 20), ("C", 9, 12, 10), ("D", 4, 6, 0)];
    for (key, score, total, minutes) in inputs {
        repo.append_session(&build_record(key, score, total, minutes))
            .await
            .unwrap();
    }

    let all = repo.list_sessions(None).await.unwrap();
    let keys: Vec<&str> = all.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["C", "G", "C", "D"]);

    let only_c = repo.list_sessions(Some("C")).await.unwrap();
    let scores: Vec<u32> = only_c.iter().map(|r| r.score).collect();
    assert_eq!(scores, [8, 9]);

    assert!(repo.list_sessions(Some("c")).await.unwrap().is_empty());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let url = "sqlite:file:memdb_migrate_twice?mode=memory&cache=shared";
    let storage = Storage::sqlite(url).await.expect("first open");
    storage
        .sessions
        .append_session(&build_record("A", 1, 1, 0))
        .await
        .unwrap();

    let repo = SqliteRepository::connect(url).await.expect("connect");
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.list_sessions(None).await.unwrap().len(), 1);
}
