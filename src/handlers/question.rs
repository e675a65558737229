use actix_web::http::{header::ContentType, StatusCode};
use actix_web::web::{Data, Path};
use actix_web::HttpResponse;
use serde::Serialize;
use tera::Context;

use crate::core::models::question::Question;
use crate::core::ports::repository::Store;
use crate::core::services;
use crate::error::Error;
use crate::templates::TEMPLATES;

#[derive(Debug, Serialize)]
struct IndexItem {
    #[serde(flatten)]
    question: Question,
    was_published_recently: bool,
}

pub async fn index<S>(store: Data<S>) -> Result<HttpResponse, Error>
where
    S: Store + 'static,
{
    let latest_question_list: Vec<IndexItem> =
        services::question::latest_questions(store.get_ref(), 5)
            .await?
            .into_iter()
            .map(|question| IndexItem {
                was_published_recently: question.was_published_recently(),
                question,
            })
            .collect();
    let mut context = Context::new();
    context.insert("latest_question_list", &latest_question_list);
    let body = TEMPLATES.render("index.html", &context)?;
    Ok(HttpResponse::build(StatusCode::OK)
        .content_type(ContentType::html())
        .body(body))
}

pub async fn detail<S>(store: Data<S>, question_id: Path<(i64,)>) -> Result<HttpResponse, Error>
where
    S: Store + 'static,
{
    let (question_id,) = question_id.into_inner();
    let detail = services::question::visible_question(store.get_ref(), question_id).await?;
    let mut context = Context::new();
    context.insert("question", &detail.question);
    context.insert("choices", &detail.choices);
    context.insert("error_message", &None::<String>);
    let body = TEMPLATES.render("detail.html", &context)?;
    Ok(HttpResponse::build(StatusCode::OK)
        .content_type(ContentType::html())
        .body(body))
}

pub async fn results<S>(store: Data<S>, question_id: Path<(i64,)>) -> Result<HttpResponse, Error>
where
    S: Store + 'static,
{
    let (question_id,) = question_id.into_inner();
    let detail = services::question::visible_question(store.get_ref(), question_id).await?;
    let mut context = Context::new();
    context.insert("question", &detail.question);
    context.insert("choices", &detail.choices);
    let body = TEMPLATES.render("results.html", &context)?;
    Ok(HttpResponse::build(StatusCode::OK)
        .content_type(ContentType::html())
        .body(body))
}
