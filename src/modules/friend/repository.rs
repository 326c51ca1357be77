use crate::{api::error, modules::user::schema::UserEntity};

/// Friendship is stored as mirrored sets on both users. Implementations must
/// update both sides atomically.
#[async_trait::async_trait]
pub trait FriendRepository {
    async fn find_friends(&self, user_id: u64) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn find_common_friends(
        &self,
        user_id_a: u64,
        user_id_b: u64,
    ) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn create_friendship(
        &self,
        user_id_a: u64,
        user_id_b: u64,
    ) -> Result<(), error::SystemError>;

    async fn delete_friendship(
        &self,
        user_id_a: u64,
        user_id_b: u64,
    ) -> Result<(), error::SystemError>;
}
