pub mod acquisition;
pub mod chat_bridge;
