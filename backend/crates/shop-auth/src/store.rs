use async_trait::async_trait;
use shop_core::User;
use shop_db::{Result as DbErrorResult, UserRepository};
use uuid::Uuid;

/// Persistence operations the identity flow needs.
///
/// Implementations must enforce uniqueness of `external_id` and `email` and
/// report a rejected write as `DbError::UniqueViolation`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>>;

    async fn find_by_external_id(&self, external_id: &str) -> DbErrorResult<Option<User>>;

    /// `email` is expected to be normalized already
    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>>;

    async fn create(&self, user: &User) -> DbErrorResult<()>;

    async fn update(&self, user: &User) -> DbErrorResult<()>;
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        UserRepository::find_by_id(self, id).await
    }

    async fn find_by_external_id(&self, external_id: &str) -> DbErrorResult<Option<User>> {
        UserRepository::find_by_external_id(self, external_id).await
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        UserRepository::find_by_email(self, email).await
    }

    async fn create(&self, user: &User) -> DbErrorResult<()> {
        UserRepository::create(self, user).await
    }

    async fn update(&self, user: &User) -> DbErrorResult<()> {
        UserRepository::update(self, user).await
    }
}
