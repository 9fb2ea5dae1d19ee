//! Session entities: messages, history, and the menu choice set

pub mod entities;
pub mod history;
pub mod menu;

pub use entities::Message;
pub use history::ConversationHistory;
pub use menu::MenuChoice;
