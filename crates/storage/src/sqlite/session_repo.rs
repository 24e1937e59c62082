use scale_core::model::SessionRecord;

use super::{SqliteRepository, mapping::map_session_row, unavailable};
use crate::repository::{SessionRepository, StorageError};

#[async_trait::async_trait]
impl SessionRepository for SqliteRepository {
    async fn append_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
                INSERT INTO game_sessions (
                    session_id, key, mode, timer_mode,
                    score, total_questions, accuracy, timestamp
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(&record.session_id)
        .bind(&record.key)
        .bind(record.mode.as_str())
        .bind(record.timer_mode.as_str())
        .bind(i64::from(record.score))
        .bind(i64::from(record.total_questions))
        .bind(record.accuracy)
        .bind(record.timestamp)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(())
    }

    async fn list_sessions(&self, key: Option<&str>) -> Result<Vec<SessionRecord>, StorageError> {
        let mut sql = String::from(
            r"
                SELECT
                    session_id, key, mode, timer_mode,
                    score, total_questions, accuracy, timestamp
                FROM game_sessions
            ",
        );
        if key.is_some() {
            sql.push_str(" WHERE key = ?1");
        }
        sql.push_str(" ORDER BY id ASC");

        let mut query = sqlx::query(&sql);
        if let Some(key) = key {
            query = query.bind(key);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(unavailable)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_session_row(&row)?);
        }
        Ok(out)
    }
}
