use actix_web::web::ServiceConfig;

pub mod film {
    pub mod handle;
    pub mod model;
    pub mod repository;
    pub mod repository_memory;
    pub mod route;
    pub mod schema;
    pub mod service;
}

pub mod friend {
    pub mod handle;
    pub mod repository;
    pub mod route;
    pub mod service;
}

pub mod user {
    pub mod handle;
    pub mod model;
    pub mod repository;
    pub mod repository_memory;
    pub mod route;
    pub mod schema;
    pub mod service;
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.configure(film::route::configure)
        .configure(friend::route::configure)
        .configure(user::route::configure);
}
