//! Message entity - Entità messaggio e proiezioni restituite dallo store

use super::user::UserSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Riga della tabella `messages`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Message {
    pub id: i32,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    // il server si aspetta una stringa litterale iso8601 che viene parsata in oggetto DateTime di tipo UTC
    pub sent_at: DateTime<Utc>,
    // NULL finché il destinatario non lo segna come letto, poi non cambia più
    pub read_at: Option<DateTime<Utc>>,
}

/// Messaggio completo con i riepiloghi di mittente e destinatario
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageDetail {
    pub id: i32,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserSummary,
    pub to_user: UserSummary,
}

impl MessageDetail {
    /// Vero se `username` è il mittente o il destinatario
    pub fn involves(&self, username: &str) -> bool {
        self.from_user.username == username || self.to_user.username == username
    }

    pub fn is_recipient(&self, username: &str) -> bool {
        self.to_user.username == username
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

/// Proiezione restituita dopo la creazione (senza read_at, che è sempre NULL)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SentMessage {
    pub id: i32,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl From<Message> for SentMessage {
    fn from(value: Message) -> Self {
        Self {
            id: value.id,
            from_username: value.from_username,
            to_username: value.to_username,
            body: value.body,
            sent_at: value.sent_at,
        }
    }
}

/// Proiezione restituita dopo aver segnato un messaggio come letto
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ReadReceipt {
    pub id: i32,
    pub read_at: DateTime<Utc>,
}
