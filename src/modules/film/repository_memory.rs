use std::{
    cmp::Reverse,
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};
use tokio::sync::RwLock;

use crate::{
    api::error,
    modules::film::{model::InsertFilm, repository::FilmRepository, schema::FilmEntity},
};

struct FilmTable {
    next_id: u64,
    rows: BTreeMap<u64, FilmEntity>,
}

#[derive(Clone)]
pub struct FilmRepositoryMemory {
    table: Arc<RwLock<FilmTable>>,
}

impl FilmRepositoryMemory {
    pub fn new() -> Self {
        Self { table: Arc::new(RwLock::new(FilmTable { next_id: 1, rows: BTreeMap::new() })) }
    }
}

impl Default for FilmRepositoryMemory {
    fn default() -> Self {
        Self::new()
    }
}

fn film_not_found(id: u64) -> error::SystemError {
    error::SystemError::not_found(format!("Film with id {id} not found"))
}

#[async_trait::async_trait]
impl FilmRepository for FilmRepositoryMemory {
    async fn find_by_id(&self, id: u64) -> Result<Option<FilmEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<FilmEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, film: &InsertFilm) -> Result<FilmEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let entity = FilmEntity {
            id,
            name: film.name.clone(),
            description: film.description.clone(),
            release_date: film.release_date,
            duration: film.duration,
            likes: BTreeSet::new(),
        };
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, film: &FilmEntity) -> Result<FilmEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let stored = table.rows.get_mut(&film.id).ok_or_else(|| film_not_found(film.id))?;

        stored.name = film.name.clone();
        stored.description = film.description.clone();
        stored.release_date = film.release_date;
        stored.duration = film.duration;
        Ok(stored.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or_else(|| film_not_found(id))
    }

    async fn add_like(&self, film_id: u64, user_id: u64) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        let film = table.rows.get_mut(&film_id).ok_or_else(|| film_not_found(film_id))?;
        film.likes.insert(user_id);
        Ok(())
    }

    async fn remove_like(&self, film_id: u64, user_id: u64) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        let film = table.rows.get_mut(&film_id).ok_or_else(|| film_not_found(film_id))?;
        film.likes.remove(&user_id);
        Ok(())
    }

    async fn remove_likes_by_user(&self, user_id: u64) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        for film in table.rows.values_mut() {
            film.likes.remove(&user_id);
        }
        Ok(())
    }

    async fn find_popular(&self, count: usize) -> Result<Vec<FilmEntity>, error::SystemError> {
        let table = self.table.read().await;
        let mut films: Vec<&FilmEntity> = table.rows.values().collect();
        // rows are already ascending by id and the sort is stable
        films.sort_by_key(|film| Reverse(film.like_count()));
        Ok(films.into_iter().take(count).cloned().collect())
    }
}
