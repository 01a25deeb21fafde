//! UserRepository - Lettura degli utenti referenziati dai messaggi

use super::UserStore;
use crate::entities::UserSummary;
use async_trait::async_trait;
use sqlx::{Error, MySqlPool};

// USER REPO
pub struct UserRepository {
    connection_pool: MySqlPool,
}

impl UserRepository {
    pub fn new(connection_pool: MySqlPool) -> UserRepository {
        Self { connection_pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    ///considero l'username univoco
    async fn find_by_username(&self, username: &str) -> Result<Option<UserSummary>, Error> {
        let user = sqlx::query_as::<_, UserSummary>(
            "SELECT username, first_name, last_name, phone FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}
