use std::collections::BTreeSet;

use crate::{
    api::error,
    modules::user::{model::InsertUser, schema::UserEntity},
};

#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<UserEntity>, error::SystemError>;
    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError>;
    async fn find_by_ids(&self, ids: &BTreeSet<u64>) -> Result<Vec<UserEntity>, error::SystemError>;
    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError>;
    /// Replaces every editable field of an existing user. Friends are kept.
    async fn update(&self, user: &UserEntity) -> Result<UserEntity, error::SystemError>;
    /// Removes the user and drops it from the friend set of everyone else.
    async fn delete(&self, id: u64) -> Result<(), error::SystemError>;
}
