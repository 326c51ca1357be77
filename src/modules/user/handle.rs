use actix_web::{delete, get, post, put, web};

use crate::modules::user::{model, schema::UserEntity, service::UserService};
use crate::{
    api::{error, success},
    utils::ValidatedJson,
};

#[post("")]
pub async fn create_user(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<model::UserModel>,
) -> Result<success::Success<UserEntity>, error::Error> {
    let user = user_service.create(user_data.0).await?;
    Ok(success::Success::created(Some(user)).message("User created successfully"))
}

#[put("")]
pub async fn update_user(
    user_service: web::Data<UserService>,
    user_data: ValidatedJson<model::UserModel>,
) -> Result<success::Success<UserEntity>, error::Error> {
    let user = user_service.update(user_data.0).await?;
    Ok(success::Success::ok(Some(user)).message("User updated successfully"))
}

#[get("")]
pub async fn list_users(
    user_service: web::Data<UserService>,
) -> Result<success::Success<Vec<UserEntity>>, error::Error> {
    let users = user_service.get_all().await?;
    Ok(success::Success::ok(Some(users)).message("Users retrieved successfully"))
}

#[get(r"/{id:\d+}")]
pub async fn get_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<u64>,
) -> Result<success::Success<UserEntity>, error::Error> {
    let user = user_service.get_by_id(user_id.into_inner()).await?;
    Ok(success::Success::ok(Some(user)).message("User retrieved successfully"))
}

#[delete(r"/{id:\d+}")]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    user_id: web::Path<u64>,
) -> Result<success::Success<()>, error::Error> {
    user_service.delete(user_id.into_inner()).await?;
    Ok(success::Success::no_content())
}
