use crate::modules::film::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/films")
            .service(create_film)
            .service(update_film)
            .service(list_films)
            .service(popular_films)
            .service(get_film)
            .service(delete_film)
            .service(add_like)
            .service(remove_like),
    );
}
