pub mod chat;

pub use chat::render_chat;
