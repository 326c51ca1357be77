use actix_web::{delete, get, post, put, web};

use crate::modules::film::{
    model::{FilmModel, PopularQuery},
    schema::FilmEntity,
    service::FilmService,
};
use crate::{
    api::{error, success},
    utils::{ValidatedJson, ValidatedQuery},
};

#[post("")]
pub async fn create_film(
    film_service: web::Data<FilmService>,
    film_data: ValidatedJson<FilmModel>,
) -> Result<success::Success<FilmEntity>, error::Error> {
    let film = film_service.create(film_data.0).await?;
    Ok(success::Success::created(Some(film)).message("Film created successfully"))
}

#[put("")]
pub async fn update_film(
    film_service: web::Data<FilmService>,
    film_data: ValidatedJson<FilmModel>,
) -> Result<success::Success<FilmEntity>, error::Error> {
    let film = film_service.update(film_data.0).await?;
    Ok(success::Success::ok(Some(film)).message("Film updated successfully"))
}

#[get("")]
pub async fn list_films(
    film_service: web::Data<FilmService>,
) -> Result<success::Success<Vec<FilmEntity>>, error::Error> {
    let films = film_service.get_all().await?;
    Ok(success::Success::ok(Some(films)).message("Films retrieved successfully"))
}

#[get("/popular")]
pub async fn popular_films(
    film_service: web::Data<FilmService>,
    query: ValidatedQuery<PopularQuery>,
) -> Result<success::Success<Vec<FilmEntity>>, error::Error> {
    let films = film_service.get_popular(query.0.count()).await?;
    Ok(success::Success::ok(Some(films)).message("Popular films retrieved successfully"))
}

#[get(r"/{id:\d+}")]
pub async fn get_film(
    film_service: web::Data<FilmService>,
    film_id: web::Path<u64>,
) -> Result<success::Success<FilmEntity>, error::Error> {
    let film = film_service.get_by_id(film_id.into_inner()).await?;
    Ok(success::Success::ok(Some(film)).message("Film retrieved successfully"))
}

#[delete(r"/{id:\d+}")]
pub async fn delete_film(
    film_service: web::Data<FilmService>,
    film_id: web::Path<u64>,
) -> Result<success::Success<()>, error::Error> {
    film_service.delete(film_id.into_inner()).await?;
    Ok(success::Success::no_content())
}

#[put(r"/{id:\d+}/like/{user_id:\d+}")]
pub async fn add_like(
    film_service: web::Data<FilmService>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<()>, error::Error> {
    let (film_id, user_id) = path.into_inner();
    film_service.add_like(film_id, user_id).await?;
    Ok(success::Success::created(None).message("Like added successfully"))
}

#[delete(r"/{id:\d+}/like/{user_id:\d+}")]
pub async fn remove_like(
    film_service: web::Data<FilmService>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<()>, error::Error> {
    let (film_id, user_id) = path.into_inner();
    film_service.remove_like(film_id, user_id).await?;
    Ok(success::Success::no_content())
}
