use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub published_at: DateTime<Utc>,
}

impl Question {
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    // recent means published inside the half-open window (now - 24h, now]
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        self.published_at > now - Duration::days(1) && self.published_at <= now
    }
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub published_no_later_than: Option<DateTime<Utc>>,
    pub require_choices: bool,
    pub limit: Option<i64>,
}
