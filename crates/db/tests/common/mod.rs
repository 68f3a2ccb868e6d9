//! Shared fixtures for db integration tests.

#![allow(dead_code)] // each test binary uses a subset of these helpers

use lifeboard_db::models::category::CreateCategory;
use lifeboard_db::models::page::CreatePage;
use lifeboard_db::models::user::{CreateUser, User};
use lifeboard_db::repositories::UserRepo;
use sqlx::PgPool;

/// Create a user to own test rows. Password hash is a placeholder; these
/// tests never authenticate.
pub async fn seed_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$test-placeholder".to_string(),
        },
    )
    .await
    .expect("seed user should insert")
}

pub fn new_category(title: &str) -> CreateCategory {
    CreateCategory {
        title: title.to_string(),
        description: None,
        icon: None,
        color: None,
    }
}

pub fn new_page(title: &str) -> CreatePage {
    CreatePage {
        title: title.to_string(),
        icon: None,
        content: None,
        parent_page_id: None,
    }
}

pub fn new_child_page(title: &str, parent_page_id: i64) -> CreatePage {
    CreatePage {
        title: title.to_string(),
        icon: None,
        content: None,
        parent_page_id: Some(parent_page_id),
    }
}
