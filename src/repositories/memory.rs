//! MemoryStore - Implementazione in memoria di `MessageStore` e `UserStore`
//!
//! Usata dai test unitari e di integrazione. Rispetta gli stessi
//! vincoli dello schema: mittente e destinatario devono esistere, `read_at`
//! viene scritto una sola volta.

use super::{MessageStore, UserStore};
use crate::dtos::CreateMessageDTO;
use crate::entities::{Message, MessageDetail, ReadReceipt, SentMessage, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    users: HashMap<String, UserSummary>,
    messages: BTreeMap<i32, Message>,
    next_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea lo store con gli utenti indicati già presenti
    pub fn with_users(users: impl IntoIterator<Item = UserSummary>) -> Self {
        let tables = Tables {
            users: users
                .into_iter()
                .map(|u| (u.username.clone(), u))
                .collect(),
            ..Tables::default()
        };
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub async fn insert_user(&self, user: UserSummary) {
        self.tables
            .write()
            .await
            .users
            .insert(user.username.clone(), user);
    }

    /// Riga grezza del messaggio, utile nei test per controllare lo stato salvato
    pub async fn raw_message(&self, id: i32) -> Option<Message> {
        self.tables.read().await.messages.get(&id).cloned()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn get(&self, id: i32) -> Result<Option<MessageDetail>, sqlx::Error> {
        let tables = self.tables.read().await;
        let Some(message) = tables.messages.get(&id) else {
            return Ok(None);
        };

        // equivalente del JOIN: se un utente manca la riga non esisterebbe
        let (Some(from_user), Some(to_user)) = (
            tables.users.get(&message.from_username),
            tables.users.get(&message.to_username),
        ) else {
            return Ok(None);
        };

        Ok(Some(MessageDetail {
            id: message.id,
            body: message.body.clone(),
            sent_at: message.sent_at,
            read_at: message.read_at,
            from_user: from_user.clone(),
            to_user: to_user.clone(),
        }))
    }

    async fn create(&self, data: &CreateMessageDTO) -> Result<SentMessage, sqlx::Error> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&data.from_username)
            || !tables.users.contains_key(&data.to_username)
        {
            return Err(sqlx::Error::RowNotFound);
        }

        tables.next_id += 1;
        let message = Message {
            id: tables.next_id,
            from_username: data.from_username.clone(),
            to_username: data.to_username.clone(),
            body: data.body.clone(),
            sent_at: data.sent_at,
            read_at: None,
        };
        tables.messages.insert(message.id, message.clone());

        Ok(SentMessage::from(message))
    }

    async fn mark_read(
        &self,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<Option<ReadReceipt>, sqlx::Error> {
        let mut tables = self.tables.write().await;
        let Some(message) = tables.messages.get_mut(&id) else {
            return Ok(None);
        };

        let read_at = *message.read_at.get_or_insert(at);
        Ok(Some(ReadReceipt { id, read_at }))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserSummary>, sqlx::Error> {
        Ok(self.tables.read().await.users.get(username).cloned())
    }
}
