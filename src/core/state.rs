//! Application State - Stato globale dell'applicazione
//!
//! Contiene gli store e la configurazione condivisa necessaria per gestire le richieste.
//! Nessuno stato mutabile vive qui: ogni richiesta è indipendente.

use crate::repositories::{MessageRepository, MessageStore, UserRepository, UserStore};
use sqlx::MySqlPool;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Store dei messaggi
    pub messages: Arc<dyn MessageStore>,

    /// Store (in sola lettura) degli utenti
    pub users: Arc<dyn UserStore>,

    /// Secret key per verificare i token JWT
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState con i repository MySQL
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni MySQL condiviso
    /// * `jwt_secret` - Chiave segreta per la verifica dei token JWT
    pub fn new(pool: MySqlPool, jwt_secret: String) -> Self {
        Self {
            messages: Arc::new(MessageRepository::new(pool.clone())),
            users: Arc::new(UserRepository::new(pool)),
            jwt_secret,
        }
    }

    /// Crea lo stato a partire da store arbitrari (ad esempio `MemoryStore` nei test)
    pub fn with_stores(
        messages: Arc<dyn MessageStore>,
        users: Arc<dyn UserStore>,
        jwt_secret: String,
    ) -> Self {
        Self {
            messages,
            users,
            jwt_secret,
        }
    }
}
