use crate::modules::friend::handle::*;
use actix_web::web::{scope, ServiceConfig};

/// Must be registered before the `/users` scope, which would otherwise claim
/// these paths and answer 404.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        scope(r"/users/{id:\d+}/friends")
            .service(list_friends)
            .service(list_common_friends)
            .service(add_friend)
            .service(remove_friend),
    );
}
