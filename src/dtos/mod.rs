//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod message;

// Re-exports per facilitare l'import
pub use message::{CreateMessageDTO, MessageEnvelope, SendMessageDTO};
