//! User entity - Riepilogo di un utente restituito insieme ai messaggi

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Campi denormalizzati dell'utente, in sola lettura per questo servizio
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserSummary {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
