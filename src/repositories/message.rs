//! MessageRepository - Repository per la gestione dei messaggi

use super::MessageStore;
use crate::dtos::CreateMessageDTO;
use crate::entities::{MessageDetail, ReadReceipt, SentMessage, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Error, FromRow, MySqlPool};

/// Riga piatta del join messages ⋈ users ⋈ users
#[derive(FromRow)]
struct MessageDetailRow {
    id: i32,
    body: String,
    sent_at: DateTime<Utc>,
    read_at: Option<DateTime<Utc>>,
    from_username: String,
    from_first_name: String,
    from_last_name: String,
    from_phone: String,
    to_username: String,
    to_first_name: String,
    to_last_name: String,
    to_phone: String,
}

impl From<MessageDetailRow> for MessageDetail {
    fn from(row: MessageDetailRow) -> Self {
        Self {
            id: row.id,
            body: row.body,
            sent_at: row.sent_at,
            read_at: row.read_at,
            from_user: UserSummary {
                username: row.from_username,
                first_name: row.from_first_name,
                last_name: row.from_last_name,
                phone: row.from_phone,
            },
            to_user: UserSummary {
                username: row.to_username,
                first_name: row.to_first_name,
                last_name: row.to_last_name,
                phone: row.to_phone,
            },
        }
    }
}

/// Errore 1452: mittente o destinatario non esiste (più). Lo store lo riporta come RowNotFound.
fn missing_user_as_not_found(err: Error) -> Error {
    match err {
        Error::Database(db) if db.is_foreign_key_violation() => Error::RowNotFound,
        other => other,
    }
}

// MESSAGE REPO
pub struct MessageRepository {
    connection_pool: MySqlPool,
}

impl MessageRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl MessageStore for MessageRepository {
    async fn get(&self, id: i32) -> Result<Option<MessageDetail>, Error> {
        let row = sqlx::query_as::<_, MessageDetailRow>(
            r#"
            SELECT
                m.id,
                m.body,
                m.sent_at,
                m.read_at,
                f.username   AS from_username,
                f.first_name AS from_first_name,
                f.last_name  AS from_last_name,
                f.phone      AS from_phone,
                t.username   AS to_username,
                t.first_name AS to_first_name,
                t.last_name  AS to_last_name,
                t.phone      AS to_phone
            FROM messages AS m
                JOIN users AS f ON m.from_username = f.username
                JOIN users AS t ON m.to_username = t.username
            WHERE m.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(row.map(MessageDetail::from))
    }

    async fn create(&self, data: &CreateMessageDTO) -> Result<SentMessage, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (from_username, to_username, body, sent_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&data.from_username)
        .bind(&data.to_username)
        .bind(&data.body)
        .bind(data.sent_at)
        .execute(&self.connection_pool)
        .await
        .map_err(missing_user_as_not_found)?;

        // Get the last inserted ID
        let new_id = result.last_insert_id() as i32;

        Ok(SentMessage {
            id: new_id,
            from_username: data.from_username.clone(),
            to_username: data.to_username.clone(),
            body: data.body.clone(),
            sent_at: data.sent_at,
        })
    }

    async fn mark_read(
        &self,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<Option<ReadReceipt>, Error> {
        // COALESCE tiene il primo timestamp: read_at non torna mai indietro
        sqlx::query("UPDATE messages SET read_at = COALESCE(read_at, ?) WHERE id = ?")
            .bind(at)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        // In MySQL rows_affected è 0 anche quando il valore non cambia, quindi rileggiamo
        let receipt = sqlx::query_as::<_, ReadReceipt>(
            "SELECT id, read_at FROM messages WHERE id = ? AND read_at IS NOT NULL",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(receipt)
    }
}
