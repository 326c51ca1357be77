use actix_web::{delete, get, put, web};

use crate::{
    api::{error, success},
    modules::{
        friend::service::FriendService,
        user::{repository_memory::UserRepositoryMemory, schema::UserEntity},
    },
};

pub type FriendSvc = FriendService<UserRepositoryMemory, UserRepositoryMemory>;

#[get("")]
pub async fn list_friends(
    friend_service: web::Data<FriendSvc>,
    user_id: web::Path<u64>,
) -> Result<success::Success<Vec<UserEntity>>, error::Error> {
    let friends = friend_service.get_friends(user_id.into_inner()).await?;
    Ok(success::Success::ok(Some(friends)).message("Friends retrieved successfully"))
}

#[get(r"/common/{other_id:\d+}")]
pub async fn list_common_friends(
    friend_service: web::Data<FriendSvc>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<Vec<UserEntity>>, error::Error> {
    let (user_id, other_id) = path.into_inner();
    let friends = friend_service.get_common_friends(user_id, other_id).await?;
    Ok(success::Success::ok(Some(friends)).message("Common friends retrieved successfully"))
}

#[put(r"/{friend_id:\d+}")]
pub async fn add_friend(
    friend_service: web::Data<FriendSvc>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<()>, error::Error> {
    let (user_id, friend_id) = path.into_inner();
    friend_service.add_friend(user_id, friend_id).await?;
    Ok(success::Success::created(None).message("Friend added successfully"))
}

#[delete(r"/{friend_id:\d+}")]
pub async fn remove_friend(
    friend_service: web::Data<FriendSvc>,
    path: web::Path<(u64, u64)>,
) -> Result<success::Success<()>, error::Error> {
    let (user_id, friend_id) = path.into_inner();
    friend_service.remove_friend(user_id, friend_id).await?;
    Ok(success::Success::no_content())
}
