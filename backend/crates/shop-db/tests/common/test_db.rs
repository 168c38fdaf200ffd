use shop_core::User;
use shop_db::UserRepository;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    shop_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user so products have an owner to reference
pub async fn create_test_user(pool: &SqlitePool, user: &User) {
    UserRepository::new(pool.clone())
        .create(user)
        .await
        .expect("Failed to create test user");
}
