use actix_cors::Cors;
use actix_web::{self, middleware::Logger, web, App, HttpServer};
use std::sync::{Arc, LazyLock};

use crate::modules::{
    film::{repository_memory::FilmRepositoryMemory, service::FilmService},
    friend::{handle::FriendSvc, service::FriendService},
    user::{repository_memory::UserRepositoryMemory, service::UserService},
};

mod api;
mod constants;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

/// Wires the in-memory stores into the services. Every service sees the same
/// stores, so state is shared across workers.
fn build_services() -> (FilmService, UserService, FriendSvc) {
    let film_repo = FilmRepositoryMemory::new();
    let user_repo = UserRepositoryMemory::new();

    let film_service =
        FilmService::with_dependencies(Arc::new(film_repo.clone()), Arc::new(user_repo.clone()));
    let user_service =
        UserService::with_dependencies(Arc::new(user_repo.clone()), Arc::new(film_repo));
    let user_repo = Arc::new(user_repo);
    let friend_service = FriendService::with_dependencies(user_repo.clone(), user_repo);

    (film_service, user_service, friend_service)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    LazyLock::force(&ENV);

    let (film_service, user_service, friend_service) = build_services();
    let film_service = web::Data::new(film_service);
    let user_service = web::Data::new(user_service);
    let friend_service = web::Data::new(friend_service);

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(film_service.clone())
            .app_data(user_service.clone())
            .app_data(friend_service.clone())
            .service(health_check)
            .configure(modules::configure)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(ENV.workers)
    .run()
    .await
}
