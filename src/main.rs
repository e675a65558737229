#![allow(async_fn_in_trait)]

mod core;
mod database;
mod error;
mod handlers;
mod templates;
#[cfg(test)]
mod testutil;

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::HttpServer;
use sqlx::postgres::PgPoolOptions;

use crate::database::sqlx::PgStore;

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    dotenv::dotenv().ok();
    std::env::set_var("RUST_LOG", "actix_web=info,pollbox=info");
    env_logger::init();
    let database_url =
        dotenv::var("DATABASE_URL").expect("environment variable DATABASE_URL not been set");
    let bind_addr = dotenv::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("failed to connect to database");
    let store = Data::new(PgStore::new(pool));
    log::info!("serving polls on {}", bind_addr);
    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(store.clone())
            .configure(handlers::routes::<PgStore>)
    })
    .bind(bind_addr)?
    .run()
    .await
}
