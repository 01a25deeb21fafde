//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati persistiti nel database.
//! L'utente è gestito da un altro servizio: qui ne leggiamo solo il riepilogo.

pub mod message;
pub mod user;

// Re-exports per facilitare l'import
pub use message::{Message, MessageDetail, ReadReceipt, SentMessage};
pub use user::UserSummary;
