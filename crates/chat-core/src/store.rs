//! Conversation store: client-side cache of the backend's conversations.
//!
//! Every fetch replaces the cached sequence wholesale; nothing is merged.
//! State lives behind `Rc<RefCell<_>>` so the UI can read it each frame
//! while requests are in flight. Borrows never span an `.await`.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use chat_types::{
    ChatError, Result,
    conversation::{Conversation, EntityId},
    message::Message,
};
use crate::ports::BackendPort;
use crate::session::SessionStore;

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    /// Sidebar entries, backend order
    pub conversations: Vec<Conversation>,
    /// At most one conversation is active
    pub selected: Option<Conversation>,
    /// Messages of `selected`, never of an earlier selection
    pub messages: Vec<Message>,
    pub models: Vec<String>,
    /// Model used for the next send
    pub model: String,
    /// Message input text
    pub draft: String,
}

impl ChatState {
    pub fn new(default_model: &str) -> Self {
        Self {
            conversations: Vec::new(),
            selected: None,
            messages: Vec::new(),
            models: Vec::new(),
            model: default_model.to_string(),
            draft: String::new(),
        }
    }

    pub fn selected_id(&self) -> Option<&EntityId> {
        self.selected.as_ref().and_then(|c| c.id.as_ref())
    }

    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected_id() == Some(id)
    }
}

/// Shared handle to the dashboard cache, clone-cheap via Rc.
#[derive(Clone)]
pub struct ConversationStore {
    state: Rc<RefCell<ChatState>>,
    backend: Rc<dyn BackendPort>,
    session: SessionStore,
    default_model: String,
}

impl ConversationStore {
    pub fn new(backend: Rc<dyn BackendPort>, session: SessionStore, default_model: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ChatState::new(default_model))),
            backend,
            session,
            default_model: default_model.to_string(),
        }
    }

    /// Shared state handle for the view layer.
    pub fn state(&self) -> Rc<RefCell<ChatState>> {
        self.state.clone()
    }

    pub fn read(&self) -> Ref<'_, ChatState> {
        self.state.borrow()
    }

    pub fn write(&self) -> RefMut<'_, ChatState> {
        self.state.borrow_mut()
    }

    pub fn snapshot(&self) -> ChatState {
        self.state.borrow().clone()
    }

    pub(crate) fn backend(&self) -> &Rc<dyn BackendPort> {
        &self.backend
    }

    pub(crate) fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Initial dashboard load. Conversations and models are fetched
    /// concurrently and neither waits for the other.
    pub async fn load(&self) -> Result<()> {
        let (conversations, models) =
            futures::join!(self.list_conversations(), self.list_models());
        conversations.and(models)
    }

    /// Replace the conversation list. Auto-selects the first entry when
    /// nothing is selected yet.
    pub async fn list_conversations(&self) -> Result<()> {
        let token = self.session.bearer()?;
        let conversations = self.backend.list_conversations(&token).await?;
        log::debug!("Fetched {} conversations", conversations.len());

        let first = {
            let mut state = self.state.borrow_mut();
            // Titles change server-side; keep the selected copy current
            let refreshed = state
                .selected_id()
                .and_then(|id| conversations.iter().find(|c| c.same_id(id)).cloned());
            if refreshed.is_some() {
                state.selected = refreshed;
            }
            state.conversations = conversations;
            if state.selected.is_none() {
                state.conversations.first().cloned()
            } else {
                None
            }
        };

        if let Some(conv) = first {
            self.settle_selection(self.select_conversation(conv).await)?;
        }
        Ok(())
    }

    /// Make `conv` the active conversation and load its messages.
    pub async fn select_conversation(&self, conv: Conversation) -> Result<()> {
        let id = match conv.id.clone() {
            Some(id) => id,
            None => {
                log::error!("Invalid conversation object: {:?}", conv);
                return Err(ChatError::Validation("conversation has no id".to_string()));
            }
        };

        {
            let mut state = self.state.borrow_mut();
            if !state.is_selected(&id) {
                state.messages.clear();
            }
            state.selected = Some(conv);
        }

        let token = self.session.bearer()?;
        self.fetch_messages(&token, &id).await
    }

    /// Re-fetch the active conversation's messages, if any.
    pub async fn refresh_selected(&self) -> Result<()> {
        let selected = self.state.borrow().selected.clone();
        match selected {
            Some(conv) => self.select_conversation(conv).await,
            None => Ok(()),
        }
    }

    /// Outcome of a selection made on the way to another step. Only a lost
    /// session stops that step; anything else is logged and the message
    /// cache is left as the selection set it.
    pub(crate) fn settle_selection(&self, result: Result<()>) -> Result<()> {
        match result {
            Err(e) if e.is_auth_failure() => Err(e),
            Err(e) => {
                log::error!("Error selecting conversation: {}", e);
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    async fn fetch_messages(&self, token: &str, id: &EntityId) -> Result<()> {
        let result = self.backend.fetch_messages(token, id).await;

        let mut state = self.state.borrow_mut();
        if !state.is_selected(id) {
            // Selection moved on while this request was in flight
            log::debug!("Discarding messages of conversation {}", id);
            return result.map(|_| ());
        }
        match result {
            Ok(messages) => {
                state.messages = messages;
                Ok(())
            }
            Err(e) => {
                state.messages.clear();
                Err(e)
            }
        }
    }

    /// Create an empty conversation, select it, and refresh the sidebar.
    /// The backend assigns the title later, usually from the first message.
    pub async fn create_conversation(&self) -> Result<()> {
        let token = self.session.bearer()?;
        let conv = self.backend.create_conversation(&token, "").await?;
        log::info!("Created conversation {:?}", conv.id);
        self.settle_selection(self.select_conversation(conv).await)?;
        self.list_conversations().await
    }

    pub async fn delete_conversation(&self, id: &EntityId) -> Result<()> {
        let token = self.session.bearer()?;
        self.backend.delete_conversation(&token, id).await?;
        log::info!("Deleted conversation {}", id);

        self.list_conversations().await?;

        let mut state = self.state.borrow_mut();
        if state.is_selected(id) {
            state.selected = None;
            state.messages.clear();
        }
        Ok(())
    }

    /// Refresh the model list. Keeps the current model if the backend still
    /// offers it, otherwise switches to the first one. Falls back to the
    /// default model when the list cannot be fetched.
    pub async fn list_models(&self) -> Result<()> {
        let token = self.session.bearer()?;
        let result = self.backend.list_models(&token).await;

        let mut state = self.state.borrow_mut();
        match result {
            Ok(models) => {
                if let Some(first) = models.first() {
                    if !models.contains(&state.model) {
                        state.model = first.clone();
                    }
                }
                state.models = models;
                Ok(())
            }
            Err(e) => {
                state.models = vec![self.default_model.clone()];
                Err(e)
            }
        }
    }

    /// Drop every cached entry (logout).
    pub fn reset(&self) {
        *self.state.borrow_mut() = ChatState::new(&self.default_model);
    }
}
