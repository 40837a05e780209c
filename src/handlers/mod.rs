// Handlers module

pub mod chat;
pub mod health;
pub mod history;
pub mod rejection;

pub use chat::chat_handler;
pub use health::health_handler;
pub use history::{clear_history_handler, history_handler};
pub use rejection::handle_rejection;
