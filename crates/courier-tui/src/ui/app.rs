use std::cell::RefCell;
use std::rc::Rc;

use courier_core::channel::{ChannelCommand, ChannelHandle};
use courier_core::models::{Contact, Message};
use courier_core::search::filter_contacts;
use courier_core::store::ConversationStore;

/// Which pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Contacts,
    Search,
    Composer,
}

/// Session state: the active conversation, composer text, and search term
/// live here and die with the process; only message logs are persisted.
pub struct App {
    pub store: Rc<RefCell<ConversationStore>>,
    pub handle: ChannelHandle,
    pub running: bool,
    pub focus: Focus,
    pub active_conversation: Option<u32>,
    pub composer: String,
    pub search_term: String,
    /// Index into the filtered contact list.
    pub selected_index: usize,
    /// Line offset into the active conversation; `usize::MAX` pins the view
    /// to the newest message.
    pub scroll_offset: usize,
    /// Largest valid offset as of the last render; lets scrolling leave the
    /// pinned position from the real bottom rather than an arbitrary value.
    pub max_scroll: usize,
    pub connected: bool,
}

impl App {
    pub fn new(store: Rc<RefCell<ConversationStore>>, handle: ChannelHandle) -> Self {
        Self {
            store,
            handle,
            running: true,
            focus: Focus::Contacts,
            active_conversation: None,
            composer: String::new(),
            search_term: String::new(),
            selected_index: 0,
            scroll_offset: usize::MAX,
            max_scroll: 0,
            connected: false,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Contacts matching the current search term, in roster order.
    pub fn filtered_contacts(&self) -> Vec<Contact> {
        let store = self.store.borrow();
        filter_contacts(store.contacts(), &self.search_term)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn select_next(&mut self) {
        let len = self.filtered_contacts().len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Open the conversation under the cursor and move focus to the composer.
    pub fn activate_selected(&mut self) {
        let contacts = self.filtered_contacts();
        if let Some(contact) = contacts.get(self.selected_index) {
            self.active_conversation = Some(contact.id);
            self.scroll_offset = usize::MAX;
            self.focus = Focus::Composer;
        }
    }

    /// Submit the composer. Whitespace-only text or no active conversation is
    /// a silent no-op; otherwise the text is sent verbatim, untrimmed. The
    /// message goes to the channel fire-and-forget and into the local log
    /// immediately; a later server echo is deduplicated by id.
    pub fn submit_composer(&mut self) {
        let Some(active) = self.active_conversation else {
            return;
        };
        if self.composer.trim().is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.composer);
        let message = Message::outbound(active, text);
        self.handle.send(ChannelCommand::Send(message.clone()));
        self.store.borrow_mut().append_message(active, message);

        self.scroll_offset = usize::MAX;
    }

    /// React to a conversation growing: keep the view pinned to the newest
    /// message when it is the one on screen.
    pub fn on_conversation_updated(&mut self, conversation_id: u32) {
        if self.active_conversation == Some(conversation_id) {
            self.scroll_offset = usize::MAX;
        }
    }

    pub fn search_input(&mut self, c: char) {
        self.search_term.push(c);
        self.selected_index = 0;
    }

    pub fn search_backspace(&mut self) {
        self.search_term.pop();
        self.selected_index = 0;
    }

    pub fn handle_paste(&mut self, text: &str) {
        match self.focus {
            Focus::Composer => self.composer.push_str(text),
            Focus::Search => {
                self.search_term.push_str(text);
                self.selected_index = 0;
            }
            Focus::Contacts => {}
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        // Leaving the pinned position: start from the bottom the last render
        // computed, so the first step already moves the view.
        if self.scroll_offset == usize::MAX {
            self.scroll_offset = self.max_scroll;
        }
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    /// Header title: active contact's name, a placeholder prompt when nothing
    /// is selected, or a fallback label for a conversation whose contact is
    /// unknown (orphaned logs are tolerated, not rendered as a crash).
    pub fn header_title(&self) -> String {
        match self.active_conversation {
            None => "Select a conversation".to_string(),
            Some(id) => self
                .store
                .borrow()
                .contact(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown contact".to_string()),
        }
    }

    pub fn header_subtitle(&self) -> Option<String> {
        let id = self.active_conversation?;
        let store = self.store.borrow();
        let contact = store.contact(id)?;
        Some(format!("Last active {}", contact.last_active))
    }
}
