use log::{info, warn};
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        friend::repository::FriendRepository,
        user::{repository::UserRepository, schema::UserEntity},
    },
};

#[derive(Clone)]
pub struct FriendService<R, U>
where
    R: FriendRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    friend_repo: Arc<R>,
    user_repo: Arc<U>,
}

impl<R, U> FriendService<R, U>
where
    R: FriendRepository + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(friend_repo: Arc<R>, user_repo: Arc<U>) -> Self {
        FriendService { friend_repo, user_repo }
    }

    async fn ensure_user(&self, user_id: u64) -> Result<(), error::SystemError> {
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            warn!("User {} not found", user_id);
            return Err(error::SystemError::not_found("User not found"));
        }
        Ok(())
    }

    pub async fn get_friends(&self, user_id: u64) -> Result<Vec<UserEntity>, error::SystemError> {
        self.ensure_user(user_id).await?;
        self.friend_repo.find_friends(user_id).await
    }

    pub async fn get_common_friends(
        &self,
        user_id: u64,
        other_id: u64,
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        tokio::try_join!(self.ensure_user(user_id), self.ensure_user(other_id))?;
        self.friend_repo.find_common_friends(user_id, other_id).await
    }

    pub async fn add_friend(&self, user_id: u64, friend_id: u64) -> Result<(), error::SystemError> {
        if user_id == friend_id {
            return Err(error::SystemError::bad_request("Cannot add yourself as a friend"));
        }
        tokio::try_join!(self.ensure_user(user_id), self.ensure_user(friend_id))?;

        self.friend_repo.create_friendship(user_id, friend_id).await?;
        info!("Users {} and {} are now friends", user_id, friend_id);
        Ok(())
    }

    pub async fn remove_friend(
        &self,
        user_id: u64,
        friend_id: u64,
    ) -> Result<(), error::SystemError> {
        if user_id == friend_id {
            return Err(error::SystemError::bad_request("Cannot remove yourself as a friend"));
        }
        tokio::try_join!(self.ensure_user(user_id), self.ensure_user(friend_id))?;

        self.friend_repo.delete_friendship(user_id, friend_id).await?;
        info!("Users {} and {} are no longer friends", user_id, friend_id);
        Ok(())
    }
}
