//! Message DTOs - Data Transfer Objects per messaggi

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Corpo di `POST /messages`.
///
/// Il mittente non fa parte del body: arriva sempre dal token. Campi extra
/// come `from_username` vengono ignorati in deserializzazione.
/// Sul destinatario controlliamo solo che non sia vuoto: se esiste lo decide
/// lo `UserStore`.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct SendMessageDTO {
    #[validate(length(min = 1, message = "Recipient username cannot be empty"))]
    pub to_username: String,

    #[validate(
        length(min = 1, max = 5000, message = "Message body must be between 1 and 5000 characters"),
        custom(function = "not_blank")
    )]
    pub body: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Message body cannot be blank".into());
        return Err(err);
    }
    Ok(())
}

/// DTO per creare un nuovo messaggio (senza id, assegnato dal database)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateMessageDTO {
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Tutte le risposte hanno la forma `{ "message": ... }`
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageEnvelope<T> {
    pub message: T,
}

impl<T> From<T> for MessageEnvelope<T> {
    fn from(message: T) -> Self {
        Self { message }
    }
}
