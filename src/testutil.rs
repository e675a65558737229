use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::core::models::{
    choice::Choice,
    question::{Query as QuestionQuery, Question},
};
use crate::core::ports::repository::{ChoiceCommon, QuestionCommon, Store};
use crate::error::Error;

#[derive(Debug, Default)]
pub struct MemStore {
    questions: Mutex<Vec<Question>>,
    choices: Mutex<Vec<Choice>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_question(&self, id: i64, text: &str, published_at: DateTime<Utc>) {
        self.questions.lock().unwrap().push(Question {
            id,
            text: text.into(),
            published_at,
        });
    }

    pub fn add_choice(&self, id: i64, question_id: i64, text: &str) {
        self.choices.lock().unwrap().push(Choice {
            id,
            question_id,
            text: text.into(),
            vote_count: 0,
        });
    }

    pub fn vote_count(&self, choice_id: i64) -> i64 {
        self.choices
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == choice_id)
            .map(|c| c.vote_count)
            .unwrap_or(0)
    }
}

impl QuestionCommon for MemStore {
    async fn query(&self, param: &QuestionQuery) -> Result<Vec<Question>, Error> {
        let questions = self.questions.lock().unwrap();
        let choices = self.choices.lock().unwrap();
        let mut hits: Vec<Question> = questions
            .iter()
            .filter(|q| {
                param
                    .published_no_later_than
                    .map_or(true, |t| q.published_at <= t)
            })
            .filter(|q| !param.require_choices || choices.iter().any(|c| c.question_id == q.id))
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(b.id.cmp(&a.id)));
        if let Some(limit) = param.limit {
            hits.truncate(limit as usize);
        }
        Ok(hits)
    }

    async fn get(&self, id: i64) -> Result<Option<Question>, Error> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }
}

impl ChoiceCommon for MemStore {
    async fn query(&self, question_id: i64) -> Result<Vec<Choice>, Error> {
        let mut hits: Vec<Choice> = self
            .choices
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect();
        hits.sort_by_key(|c| c.id);
        Ok(hits)
    }

    async fn add_vote(&self, question_id: i64, choice_id: i64) -> Result<u64, Error> {
        let mut choices = self.choices.lock().unwrap();
        match choices
            .iter_mut()
            .find(|c| c.id == choice_id && c.question_id == question_id)
        {
            Some(choice) => {
                choice.vote_count += 1;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

impl Store for MemStore {}
