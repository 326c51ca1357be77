use log::{info, warn};
use std::sync::Arc;

use crate::api::error;
use crate::modules::film::model::{FilmModel, InsertFilm};
use crate::modules::film::{repository::FilmRepository, schema::FilmEntity};
use crate::modules::user::repository::UserRepository;

#[derive(Clone)]
pub struct FilmService {
    repo: Arc<dyn FilmRepository + Send + Sync>,
    user_repo: Arc<dyn UserRepository + Send + Sync>,
}

impl FilmService {
    pub fn with_dependencies(
        repo: Arc<dyn FilmRepository + Send + Sync>,
        user_repo: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        info!("FilmService initialized with dependencies");
        FilmService { repo, user_repo }
    }

    pub async fn get_all(&self) -> Result<Vec<FilmEntity>, error::SystemError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: u64) -> Result<FilmEntity, error::SystemError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("Film {} not found", id);
            error::SystemError::not_found("Film not found")
        })
    }

    pub async fn create(&self, film: FilmModel) -> Result<FilmEntity, error::SystemError> {
        let created = self.repo.create(&InsertFilm::from(film)).await?;
        info!("Film {} created", created.id);
        Ok(created)
    }

    pub async fn update(&self, film: FilmModel) -> Result<FilmEntity, error::SystemError> {
        let id = film.id.ok_or_else(|| error::SystemError::bad_request("Film id is required"))?;
        let stored = self.get_by_id(id).await?;

        let replacement = FilmEntity {
            id,
            name: film.name,
            description: film.description,
            release_date: film.release_date,
            duration: film.duration,
            likes: stored.likes,
        };
        let updated = self.repo.update(&replacement).await?;
        info!("Film {} updated", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<(), error::SystemError> {
        self.repo.delete(id).await?;
        info!("Film {} deleted", id);
        Ok(())
    }

    pub async fn add_like(&self, film_id: u64, user_id: u64) -> Result<(), error::SystemError> {
        self.ensure_user(user_id).await?;
        self.repo.add_like(film_id, user_id).await?;

        // UserService::delete removes the user before clearing likes, so a
        // like inserted after that sweep is caught by this second lookup.
        if let Err(err) = self.ensure_user(user_id).await {
            self.repo.remove_like(film_id, user_id).await?;
            return Err(err);
        }
        info!("User {} liked film {}", user_id, film_id);
        Ok(())
    }

    pub async fn remove_like(&self, film_id: u64, user_id: u64) -> Result<(), error::SystemError> {
        self.ensure_user(user_id).await?;
        self.repo.remove_like(film_id, user_id).await?;
        info!("User {} removed like from film {}", user_id, film_id);
        Ok(())
    }

    pub async fn get_popular(&self, count: usize) -> Result<Vec<FilmEntity>, error::SystemError> {
        if count == 0 {
            return Err(error::SystemError::bad_request("Count must be at least 1"));
        }
        self.repo.find_popular(count).await
    }

    async fn ensure_user(&self, user_id: u64) -> Result<(), error::SystemError> {
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            warn!("User {} not found", user_id);
            return Err(error::SystemError::not_found("User not found"));
        }
        Ok(())
    }
}
