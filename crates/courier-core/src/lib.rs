pub mod channel;
pub mod config;
pub mod contacts;
pub mod events;
pub mod format;
pub mod logging;
pub mod models;
pub mod runtime;
pub mod search;
pub mod store;

pub use channel::{ChannelCommand, ChannelHandle};
pub use config::CoreConfig;
pub use events::ChannelEvent;
pub use models::{Contact, Message, LOCAL_USER_ID};
pub use runtime::CoreRuntime;
pub use store::ConversationStore;
