use sqlx::{query, query_as, PgPool};

use crate::core::models::{
    choice::Choice,
    question::{Query as QuestionQuery, Question},
};
use crate::core::ports::repository::{ChoiceCommon, QuestionCommon, Store};
use crate::error::Error;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QuestionCommon for PgStore {
    async fn query(&self, param: &QuestionQuery) -> Result<Vec<Question>, Error> {
        let questions = query_as(
            "
        SELECT q.id, q.text, q.published_at
        FROM questions AS q
        WHERE ($1 IS NULL OR q.published_at <= $1)
            AND (NOT $2 OR EXISTS(SELECT 1 FROM choices AS c WHERE c.question_id = q.id))
        ORDER BY q.published_at DESC, q.id DESC
        LIMIT $3",
        )
        .bind(param.published_no_later_than)
        .bind(param.require_choices)
        .bind(param.limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn get(&self, id: i64) -> Result<Option<Question>, Error> {
        let question = query_as("SELECT id, text, published_at FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }
}

impl ChoiceCommon for PgStore {
    async fn query(&self, question_id: i64) -> Result<Vec<Choice>, Error> {
        let choices = query_as(
            "SELECT id, question_id, text, vote_count FROM choices WHERE question_id = $1 ORDER BY id",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(choices)
    }

    // the increment happens inside one UPDATE so concurrent votes are never lost
    async fn add_vote(&self, question_id: i64, choice_id: i64) -> Result<u64, Error> {
        let result =
            query("UPDATE choices SET vote_count = vote_count + 1 WHERE id = $1 AND question_id = $2")
                .bind(choice_id)
                .bind(question_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }
}

impl Store for PgStore {}
