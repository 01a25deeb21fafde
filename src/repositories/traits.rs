//! Common repository traits
//!
//! This module defines the interfaces the message access service talks to.
//! They are object safe (via `async_trait`) so the application state can hold
//! either the MySQL repositories or the in-memory store.

use crate::dtos::CreateMessageDTO;
use crate::entities::{MessageDetail, ReadReceipt, SentMessage, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence collaborator for messages
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Reads a message together with sender and recipient summaries
    ///
    /// # Returns
    /// * `Ok(Some(MessageDetail))` - Message found
    /// * `Ok(None)` - No message with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn get(&self, id: i32) -> Result<Option<MessageDetail>, sqlx::Error>;

    /// Inserts a new unread message
    ///
    /// # Returns
    /// * `Ok(SentMessage)` - Created message with ID assigned by the store
    /// * `Err(sqlx::Error::RowNotFound)` - Sender or recipient does not exist
    /// * `Err(sqlx::Error)` - Any other error during insertion
    async fn create(&self, data: &CreateMessageDTO) -> Result<SentMessage, sqlx::Error>;

    /// Sets `read_at` to `at` unless it is already set
    ///
    /// An already-read message keeps its original timestamp.
    ///
    /// # Returns
    /// * `Ok(Some(ReadReceipt))` - The stored read timestamp
    /// * `Ok(None)` - No message with that ID
    async fn mark_read(
        &self,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<Option<ReadReceipt>, sqlx::Error>;
}

/// Read-only view over users, owned by another service
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserSummary>, sqlx::Error>;
}
