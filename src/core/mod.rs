//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Verifica del token JWT e identità del chiamante
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{AuthUser, Claims, authentication_middleware, decode_jwt};
pub use config::Config;
pub use error::AppError;
pub use extract::AppPath;
pub use state::AppState;
