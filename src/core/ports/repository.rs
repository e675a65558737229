use crate::core::models::{
    choice::Choice,
    question::{Query as QuestionQuery, Question},
};
use crate::error::Error;

pub trait QuestionCommon {
    async fn query(&self, query: &QuestionQuery) -> Result<Vec<Question>, Error>;
    async fn get(&self, id: i64) -> Result<Option<Question>, Error>;
}

pub trait ChoiceCommon {
    async fn query(&self, question_id: i64) -> Result<Vec<Choice>, Error>;
    async fn add_vote(&self, question_id: i64, choice_id: i64) -> Result<u64, Error>;
}

pub trait Store: QuestionCommon + ChoiceCommon {}
