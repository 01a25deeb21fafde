//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query usano `sqlx::query_as` con `FromRow` (controllo a run-time), così il
//! crate compila anche senza un database raggiungibile.

pub mod memory;
pub mod message;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{MessageStore, UserStore};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use memory::MemoryStore;
pub use message::MessageRepository;
pub use user::UserRepository;
