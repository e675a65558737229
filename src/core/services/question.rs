use chrono::Utc;

use crate::core::models::{
    choice::Choice,
    question::{Query, Question},
};
use crate::core::ports::repository::{ChoiceCommon, QuestionCommon, Store};
use crate::error::Error;

#[derive(Debug)]
pub struct QuestionDetail {
    pub question: Question,
    pub choices: Vec<Choice>,
}

pub async fn latest_questions<S>(store: &S, limit: i64) -> Result<Vec<Question>, Error>
where
    S: Store,
{
    QuestionCommon::query(
        store,
        &Query {
            published_no_later_than: Some(Utc::now()),
            require_choices: true,
            limit: Some(limit),
        },
    )
    .await
}

pub async fn visible_question<S>(store: &S, id: i64) -> Result<QuestionDetail, Error>
where
    S: Store,
{
    let question = QuestionCommon::get(store, id).await?.ok_or(Error::NotFound)?;
    if question.published_at > Utc::now() {
        return Err(Error::NotFound);
    }
    let choices = ChoiceCommon::query(store, id).await?;
    if choices.is_empty() {
        return Err(Error::NotFound);
    }
    Ok(QuestionDetail { question, choices })
}
