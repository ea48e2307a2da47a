//! Optimistic send flow.
//!
//! A send moves through `Idle → Pending → {Committed, Failed}`:
//! 1. Append a provisional message and clear the draft (Pending)
//! 2. POST the prompt; the backend stores both it and the AI reply
//! 3. On acceptance, re-fetch messages and conversations (Committed)
//! 4. On rejection, flag the provisional message in place (Failed)
//!
//! Reconciliation replaces the message cache, so a provisional entry never
//! survives a successful fetch and is never merged with server entries.

use chat_types::{
    Result,
    api::ChatPrompt,
    conversation::EntityId,
    message::Message,
};
use crate::store::ConversationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    /// Nothing was sent
    Idle,
    /// Provisional message shown, request in flight
    Pending,
    /// Backend accepted the prompt and the cache was re-synced
    Committed,
    /// Backend rejected the prompt; the provisional message stays, flagged
    Failed,
}

/// Where a displayed message stands in the send flow.
pub fn message_state(msg: &Message) -> SendState {
    if msg.sending {
        SendState::Pending
    } else if msg.error {
        SendState::Failed
    } else {
        SendState::Committed
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Clone)]
pub struct OptimisticMessageFlow {
    store: ConversationStore,
}

impl OptimisticMessageFlow {
    pub fn new(store: ConversationStore) -> Self {
        Self { store }
    }

    /// Send the current draft to the selected conversation.
    ///
    /// Returns `Idle` without touching any state when nothing is selected or
    /// the draft is blank, and `Unauthenticated` (again without touching
    /// state) when there is no usable access token.
    pub async fn send(&self) -> Result<SendState> {
        let (conversation_id, model_name) = {
            let state = self.store.read();
            match state.selected_id() {
                Some(id) if !state.draft.trim().is_empty() => (id.clone(), state.model.clone()),
                _ => return Ok(SendState::Idle),
            }
        };

        let token = self.store.session().bearer()?;

        let placeholder = now_millis();
        let prompt = {
            let mut state = self.store.write();
            let text = std::mem::take(&mut state.draft);
            state.messages.push(Message::provisional(placeholder, text.clone()));
            text
        };

        let request = ChatPrompt {
            prompt,
            model_name,
            conversation_id,
        };

        match self.store.backend().send_chat(&token, &request).await {
            Ok(()) => {
                log::info!("Message sent, refreshing conversation and list");
                // Titles may change with the first message, so the list is
                // refreshed even when the message fetch fails
                self.store.settle_selection(self.store.refresh_selected().await)?;
                self.store.list_conversations().await?;
                Ok(SendState::Committed)
            }
            Err(e) => {
                log::error!("Error sending message: {}", e);
                self.mark_failed(&EntityId::Int(placeholder));
                Ok(SendState::Failed)
            }
        }
    }

    fn mark_failed(&self, placeholder: &EntityId) {
        let mut state = self.store.write();
        if let Some(msg) = state
            .messages
            .iter_mut()
            .find(|m| &m.id == placeholder && m.sending)
        {
            msg.mark_failed();
        }
    }
}
