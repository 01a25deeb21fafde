//! Message access - Regole di autorizzazione sui messaggi
//!
//! L'identità del chiamante è sempre un parametro esplicito: nessuna operazione
//! legge stato della richiesta. Ogni controllo fallisce prima di qualsiasi
//! scrittura e gli errori dello store vengono propagati così come sono.

use crate::core::{AppError, AppState};
use crate::dtos::{CreateMessageDTO, SendMessageDTO};
use crate::entities::{MessageDetail, ReadReceipt, SentMessage};
use crate::repositories::{MessageStore, UserStore};
use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

pub const NOT_AUTHORIZED_TO_VIEW: &str = "You are not authorized to view this message";
pub const NOT_AUTHORIZED_TO_MARK_READ: &str = "You are not authorized to mark this message as read";

/// Il chiamante può leggere il messaggio solo se ne è mittente o destinatario
pub fn ensure_can_view(message: &MessageDetail, caller: &str) -> Result<(), AppError> {
    if message.involves(caller) {
        Ok(())
    } else {
        Err(AppError::Authorization(NOT_AUTHORIZED_TO_VIEW))
    }
}

/// Solo il destinatario può segnare il messaggio come letto, il mittente no
pub fn ensure_can_mark_read(message: &MessageDetail, caller: &str) -> Result<(), AppError> {
    if message.is_recipient(caller) {
        Ok(())
    } else {
        Err(AppError::Authorization(NOT_AUTHORIZED_TO_MARK_READ))
    }
}

/// Istante corrente alla precisione di DATETIME(6), così la risposta coincide con la riga salvata
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn no_such_user(username: &str) -> AppError {
    AppError::not_found(format!("No such user: {}", username))
}

pub struct MessageAccess<'a> {
    messages: &'a dyn MessageStore,
    users: &'a dyn UserStore,
}

impl<'a> MessageAccess<'a> {
    pub fn new(messages: &'a dyn MessageStore, users: &'a dyn UserStore) -> Self {
        Self { messages, users }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(state.messages.as_ref(), state.users.as_ref())
    }

    async fn load(&self, id: i32) -> Result<MessageDetail, AppError> {
        self.messages
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("No such message: {}", id)))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32, caller: &str) -> Result<MessageDetail, AppError> {
        let message = self.load(id).await?;
        ensure_can_view(&message, caller).inspect_err(|_| {
            warn!("User {} is neither sender nor recipient of message {}", caller, id);
        })?;

        debug!("Message {} visible to {}", id, caller);
        Ok(message)
    }

    async fn ensure_user_exists(&self, username: &str) -> Result<(), AppError> {
        if self.users.find_by_username(username).await?.is_none() {
            warn!("User {} does not exist", username);
            return Err(no_such_user(username));
        }
        Ok(())
    }

    /// Crea un messaggio con mittente = chiamante
    #[instrument(skip(self, input), fields(to = %input.to_username))]
    pub async fn create(
        &self,
        input: SendMessageDTO,
        caller: &str,
    ) -> Result<SentMessage, AppError> {
        input.validate()?;

        // il token può sopravvivere alla riga dell'utente
        self.ensure_user_exists(caller).await?;
        self.ensure_user_exists(&input.to_username).await?;

        let data = CreateMessageDTO {
            from_username: caller.to_string(),
            to_username: input.to_username,
            body: input.body,
            sent_at: now(),
        };
        // RowNotFound qui vuol dire che un utente è sparito dopo il controllo
        let sent = self.messages.create(&data).await.map_err(|e| match e {
            sqlx::Error::RowNotFound => no_such_user(&data.to_username),
            other => AppError::from(other),
        })?;

        info!("Message {} sent from {} to {}", sent.id, sent.from_username, sent.to_username);
        Ok(sent)
    }

    #[instrument(skip(self))]
    pub async fn mark_read(&self, id: i32, caller: &str) -> Result<ReadReceipt, AppError> {
        let message = self.load(id).await?;
        ensure_can_mark_read(&message, caller).inspect_err(|_| {
            warn!("User {} is not the recipient of message {}", caller, id);
        })?;

        if message.is_read() {
            debug!("Message {} already read, keeping the original timestamp", id);
        }

        let receipt = self
            .messages
            .mark_read(id, now())
            .await?
            // cancellato tra la lettura e l'aggiornamento
            .ok_or_else(|| AppError::not_found(format!("No such message: {}", id)))?;

        info!("Message {} marked as read at {}", id, receipt.read_at);
        Ok(receipt)
    }
}
