use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::channel::{ChannelCommand, ChannelHandle, ChannelWorker};
use crate::config::CoreConfig;
use crate::contacts::seed_contacts;
use crate::events::ChannelEvent;
use crate::models::Message;
use crate::store::{ConversationStore, MessageCache};

/// Owns the conversation store and the channel worker. Constructed once at
/// process start; the view layer gets a store reference, a command handle,
/// and the single inbound event receiver.
pub struct CoreRuntime {
    store: Rc<RefCell<ConversationStore>>,
    handle: ChannelHandle,
    event_rx: Option<mpsc::UnboundedReceiver<ChannelEvent>>,
    worker_handle: Option<JoinHandle<()>>,
}

impl CoreRuntime {
    pub fn new(config: CoreConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let cache = MessageCache::new(&config.data_dir);
        let store = Rc::new(RefCell::new(ConversationStore::new(seed_contacts(), cache)));

        let (handle, command_rx) = ChannelHandle::pair();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<ChannelEvent>();

        let worker = ChannelWorker::new(config.server_url.clone(), command_rx, event_tx);
        let worker_handle = tokio::spawn(worker.run());

        Ok(Self {
            store,
            handle,
            event_rx: Some(event_rx),
            worker_handle: Some(worker_handle),
        })
    }

    pub fn store(&self) -> Rc<RefCell<ConversationStore>> {
        self.store.clone()
    }

    pub fn handle(&self) -> ChannelHandle {
        self.handle.clone()
    }

    /// The inbound event receiver. There is exactly one; a second call
    /// returns None. Dropping it stops delivery without touching the
    /// connection.
    pub fn take_event_rx(&mut self) -> Option<mpsc::UnboundedReceiver<ChannelEvent>> {
        self.event_rx.take()
    }

    /// Apply an inbound message: filed under the peer's conversation, via the
    /// store's single mutation path (which also persists and notifies).
    pub fn apply_inbound(&self, message: Message) {
        let conversation_id = message.conversation_id();
        self.store
            .borrow_mut()
            .append_message(conversation_id, message);
    }

    pub async fn shutdown(&mut self) {
        self.handle.send(ChannelCommand::Shutdown);
        if let Some(worker_handle) = self.worker_handle.take() {
            let _ = worker_handle.await;
        }
    }
}
