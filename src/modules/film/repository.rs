use crate::{
    api::error,
    modules::film::{model::InsertFilm, schema::FilmEntity},
};

#[async_trait::async_trait]
pub trait FilmRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<FilmEntity>, error::SystemError>;
    async fn find_all(&self) -> Result<Vec<FilmEntity>, error::SystemError>;
    async fn create(&self, film: &InsertFilm) -> Result<FilmEntity, error::SystemError>;
    /// Replaces every editable field of an existing film. Likes are kept.
    async fn update(&self, film: &FilmEntity) -> Result<FilmEntity, error::SystemError>;
    async fn delete(&self, id: u64) -> Result<(), error::SystemError>;

    async fn add_like(&self, film_id: u64, user_id: u64) -> Result<(), error::SystemError>;
    async fn remove_like(&self, film_id: u64, user_id: u64) -> Result<(), error::SystemError>;
    async fn remove_likes_by_user(&self, user_id: u64) -> Result<(), error::SystemError>;

    /// Films ordered by like count descending, ties by ascending id.
    async fn find_popular(&self, count: usize) -> Result<Vec<FilmEntity>, error::SystemError>;
}
