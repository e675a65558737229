pub mod question;
pub mod vote;

use actix_web::web::{get, post, scope, ServiceConfig};

use crate::core::ports::repository::Store;

pub fn routes<S>(cfg: &mut ServiceConfig)
where
    S: Store + 'static,
{
    cfg.service(
        scope("polls")
            .route("", get().to(question::index::<S>))
            .service(
                scope("{question_id}")
                    .route("", get().to(question::detail::<S>))
                    .route("results", get().to(question::results::<S>))
                    .route("vote", post().to(vote::vote::<S>)),
            ),
    );
}
