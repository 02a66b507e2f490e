use crate::Result as DbErrorResult;
use crate::rows::FeedbackResponseRow;

use portal_core::{FeedbackFilter, FeedbackResponse};

use uuid::Uuid;

pub struct FeedbackResponseRepository;

impl FeedbackResponseRepository {
    pub async fn create<'e, E>(executor: E, response: &FeedbackResponse) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO feedback_responses (
                  id, feedback_id, author, message, is_internal, created_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(response.id.to_string())
        .bind(response.feedback_id.to_string())
        .bind(&response.author)
        .bind(&response.message)
        .bind(response.is_internal)
        .bind(response.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Responses of one item, oldest first
    pub async fn find_by_feedback<'e, E>(
        executor: E,
        feedback_id: Uuid,
    ) -> DbErrorResult<Vec<FeedbackResponse>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, FeedbackResponseRow>(
            r#"
              SELECT id, feedback_id, author, message, is_internal, created_at
              FROM feedback_responses
              WHERE feedback_id = ?
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(feedback_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(FeedbackResponse::try_from).collect()
    }

    /// Responses of every item the filter selects, oldest first.
    /// Lets a listing load all responses in one query.
    pub async fn find_for_filter<'e, E>(
        executor: E,
        filter: &FeedbackFilter,
    ) -> DbErrorResult<Vec<FeedbackResponse>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, FeedbackResponseRow>(
            r#"
              SELECT r.id, r.feedback_id, r.author, r.message, r.is_internal, r.created_at
              FROM feedback_responses r
              JOIN feedback f ON f.id = r.feedback_id
              WHERE (?1 IS NULL OR f.app_id = ?1)
                AND (?2 IS NULL OR f.status = ?2)
                AND (?3 IS NULL OR f.feedback_type = ?3)
              ORDER BY r.created_at ASC, r.rowid ASC
              "#,
        )
        .bind(filter.app_id.as_deref())
        .bind(filter.status.map(|s| s.as_str()))
        .bind(filter.feedback_type.map(|t| t.as_str()))
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(FeedbackResponse::try_from).collect()
    }
}
