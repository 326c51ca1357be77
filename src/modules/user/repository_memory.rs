use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};
use tokio::sync::RwLock;

use crate::{
    api::error,
    modules::{
        friend::repository::FriendRepository,
        user::{model::InsertUser, repository::UserRepository, schema::UserEntity},
    },
};

struct UserTable {
    next_id: u64,
    rows: BTreeMap<u64, UserEntity>,
}

impl UserTable {
    fn collect(&self, ids: &BTreeSet<u64>) -> Vec<UserEntity> {
        ids.iter().filter_map(|id| self.rows.get(id)).cloned().collect()
    }

    fn friends_of(&self, id: u64) -> Result<&BTreeSet<u64>, error::SystemError> {
        self.rows.get(&id).map(|user| &user.friends).ok_or_else(|| user_not_found(id))
    }

    fn friends_of_mut(&mut self, id: u64) -> Result<&mut BTreeSet<u64>, error::SystemError> {
        self.rows.get_mut(&id).map(|user| &mut user.friends).ok_or_else(|| user_not_found(id))
    }

    fn ensure_exists(&self, id: u64) -> Result<(), error::SystemError> {
        self.friends_of(id).map(|_| ())
    }
}

#[derive(Clone)]
pub struct UserRepositoryMemory {
    table: Arc<RwLock<UserTable>>,
}

impl UserRepositoryMemory {
    pub fn new() -> Self {
        Self { table: Arc::new(RwLock::new(UserTable { next_id: 1, rows: BTreeMap::new() })) }
    }
}

impl Default for UserRepositoryMemory {
    fn default() -> Self {
        Self::new()
    }
}

fn user_not_found(id: u64) -> error::SystemError {
    error::SystemError::not_found(format!("User with id {id} not found"))
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryMemory {
    async fn find_by_id(&self, id: u64) -> Result<Option<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_ids(&self, ids: &BTreeSet<u64>) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        Ok(table.collect(ids))
    }

    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let entity = UserEntity {
            id,
            email: user.email.clone(),
            login: user.login.clone(),
            name: user.name.clone(),
            birthday: user.birthday,
            friends: BTreeSet::new(),
        };
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, user: &UserEntity) -> Result<UserEntity, error::SystemError> {
        let mut table = self.table.write().await;
        let stored = table.rows.get_mut(&user.id).ok_or_else(|| user_not_found(user.id))?;

        stored.email = user.email.clone();
        stored.login = user.login.clone();
        stored.name = user.name.clone();
        stored.birthday = user.birthday;
        Ok(stored.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).ok_or_else(|| user_not_found(id))?;
        for friend_id in &removed.friends {
            if let Some(friend) = table.rows.get_mut(friend_id) {
                friend.friends.remove(&id);
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FriendRepository for UserRepositoryMemory {
    async fn find_friends(&self, user_id: u64) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        let friends = table.friends_of(user_id)?;
        Ok(table.collect(friends))
    }

    async fn find_common_friends(
        &self,
        user_id_a: u64,
        user_id_b: u64,
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        let table = self.table.read().await;
        let friends_a = table.friends_of(user_id_a)?;
        let friends_b = table.friends_of(user_id_b)?;

        let common: BTreeSet<u64> = friends_a.intersection(friends_b).copied().collect();
        Ok(table.collect(&common))
    }

    async fn create_friendship(
        &self,
        user_id_a: u64,
        user_id_b: u64,
    ) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        // b is checked first so a failure never leaves a one-sided edge
        table.ensure_exists(user_id_b)?;
        table.friends_of_mut(user_id_a)?.insert(user_id_b);
        table.friends_of_mut(user_id_b)?.insert(user_id_a);
        Ok(())
    }

    async fn delete_friendship(
        &self,
        user_id_a: u64,
        user_id_b: u64,
    ) -> Result<(), error::SystemError> {
        let mut table = self.table.write().await;
        table.ensure_exists(user_id_b)?;
        table.friends_of_mut(user_id_a)?.remove(&user_id_b);
        table.friends_of_mut(user_id_b)?.remove(&user_id_a);
        Ok(())
    }
}
