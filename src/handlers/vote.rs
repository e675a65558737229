use actix_web::http::header::{ContentType, LOCATION};
use actix_web::http::StatusCode;
use actix_web::web::{Data, Form, Path};
use actix_web::HttpResponse;
use serde::Deserialize;
use tera::Context;

use crate::core::ports::repository::Store;
use crate::core::services;
use crate::error::Error;
use crate::templates::TEMPLATES;

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    choice: Option<String>,
}

pub async fn vote<S>(
    store: Data<S>,
    question_id: Path<(i64,)>,
    Form(form): Form<VoteForm>,
) -> Result<HttpResponse, Error>
where
    S: Store + 'static,
{
    let (question_id,) = question_id.into_inner();
    let detail = services::question::visible_question(store.get_ref(), question_id).await?;
    // a missing or non-numeric selection falls through to the validation path
    let selection = form.choice.as_deref().and_then(|raw| raw.parse::<i64>().ok());
    match services::vote::cast_vote(store.get_ref(), question_id, selection).await {
        Ok(()) => Ok(HttpResponse::build(StatusCode::FOUND)
            .insert_header((LOCATION, format!("/polls/{}/results/", question_id)))
            .finish()),
        Err(Error::Validation(error_message)) => {
            let mut context = Context::new();
            context.insert("question", &detail.question);
            context.insert("choices", &detail.choices);
            context.insert("error_message", &error_message);
            let body = TEMPLATES.render("detail.html", &context)?;
            Ok(HttpResponse::build(StatusCode::OK)
                .content_type(ContentType::html())
                .body(body))
        }
        Err(e) => Err(e),
    }
}
