use log::{info, warn};
use std::sync::Arc;

use crate::api::error;
use crate::modules::film::repository::FilmRepository;
use crate::modules::user::model::{InsertUser, UserModel};
use crate::modules::user::{repository::UserRepository, schema::UserEntity};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
    film_repo: Arc<dyn FilmRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(
        repo: Arc<dyn UserRepository + Send + Sync>,
        film_repo: Arc<dyn FilmRepository + Send + Sync>,
    ) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo, film_repo }
    }

    pub async fn get_all(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: u64) -> Result<UserEntity, error::SystemError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("User {} not found", id);
            error::SystemError::not_found("User not found")
        })
    }

    pub async fn create(&self, user: UserModel) -> Result<UserEntity, error::SystemError> {
        if user.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            info!("No display name given, using login {}", user.login);
        }
        let created = self.repo.create(&InsertUser::from(user)).await?;
        info!("User {} created", created.id);
        Ok(created)
    }

    pub async fn update(&self, user: UserModel) -> Result<UserEntity, error::SystemError> {
        let id = user.id.ok_or_else(|| error::SystemError::bad_request("User id is required"))?;
        let stored = self.get_by_id(id).await?;

        let replacement = UserEntity {
            id,
            name: user.display_name(),
            email: user.email,
            login: user.login,
            birthday: user.birthday,
            friends: stored.friends,
        };
        let updated = self.repo.update(&replacement).await?;
        info!("User {} updated", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<(), error::SystemError> {
        self.repo.delete(id).await?;
        self.film_repo.remove_likes_by_user(id).await?;
        info!("User {} deleted", id);
        Ok(())
    }
}
