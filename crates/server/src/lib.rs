//! HTTP wiring for the storefront backend.
//!
//! Builds the actix-web application: request logging, CORS, health check,
//! auth routes, and the category/product catalog. Handlers live in their
//! domain crates; this crate only composes them.

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let client = sf_pg::db().await;
    sf_pg::migrate::<sf_auth::User>(&client).await.expect("migrate users");
    sf_pg::migrate::<sf_catalog::Category>(&client).await.expect("migrate categories");
    sf_pg::migrate::<sf_catalog::Product>(&client).await.expect("migrate products");
    let tokens = sf_auth::Tokens::from_env();
    let service = web::Data::new(sf_auth::AuthService::new(client.clone(), tokens.clone()));
    let tokens = web::Data::new(tokens);
    let client = web::Data::new(client);
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:3001"));
    log::info!("starting storefront server on {}", addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(service.clone())
            .app_data(tokens.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/api/auth")
                    .route("/register", web::post().to(sf_auth::register))
                    .route("/login", web::post().to(sf_auth::login))
                    .route("/me", web::get().to(sf_auth::me)),
            )
            .service(
                web::scope("/api/categories")
                    .route("", web::get().to(sf_catalog::categories))
                    .route("", web::post().to(sf_catalog::create_category))
                    .route("/{id}", web::get().to(sf_catalog::category))
                    .route("/{id}", web::put().to(sf_catalog::update_category))
                    .route("/{id}", web::delete().to(sf_catalog::delete_category)),
            )
            .service(
                web::scope("/api/products")
                    .route("", web::get().to(sf_catalog::products))
                    .route("", web::post().to(sf_catalog::create_product))
                    .route("/{id}", web::get().to(sf_catalog::product))
                    .route("/{id}", web::put().to(sf_catalog::update_product))
                    .route("/{id}", web::delete().to(sf_catalog::delete_product)),
            )
    })
    .bind(addr)?
    .run()
    .await
}
