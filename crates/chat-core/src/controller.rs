//! Controllers: the async entry points the views call.
//!
//! Each entry point awaits a store or backend operation and settles its
//! outcome here: auth failures become a redirect to the login view, form
//! failures become an inline message, anything else is logged.

use std::future::Future;
use std::rc::Rc;

use chat_types::{
    Result,
    api::{LoginRequest, RegisterRequest},
    conversation::{Conversation, EntityId},
    event::ChatEvent,
    route::Route,
};
use crate::event_bus::EventBus;
use crate::ports::BackendPort;
use crate::send::{OptimisticMessageFlow, SendState};
use crate::session::{SessionGate, SessionStore};
use crate::store::ConversationStore;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed";

// ─── Auth ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AuthController {
    backend: Rc<dyn BackendPort>,
    session: SessionStore,
    events: EventBus,
}

impl AuthController {
    pub fn new(backend: Rc<dyn BackendPort>, session: SessionStore, events: EventBus) -> Self {
        Self { backend, session, events }
    }

    /// Exchange credentials for tokens and enter the dashboard.
    pub async fn login(&self, username: &str, password: &str) {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = match self.backend.login(&req).await {
            Ok(tokens) => self.session.save(&tokens),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                log::info!("Logged in as {}", username);
                self.events.emit(ChatEvent::Navigate(Route::Dashboard));
            }
            Err(e) => {
                log::error!("Login failed: {}", e);
                self.events.emit(ChatEvent::LoginFailed {
                    message: LOGIN_FAILED_MESSAGE.to_string(),
                });
            }
        }
    }

    pub async fn register(&self, req: RegisterRequest) {
        let result = match self.backend.register(&req).await {
            Ok(tokens) => self.session.save(&tokens),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                log::info!("Registered {}", req.username);
                self.events.emit(ChatEvent::Navigate(Route::Dashboard));
            }
            Err(e) => {
                log::error!("Registration failed: {}", e);
                self.events.emit(ChatEvent::RegisterFailed {
                    message: REGISTER_FAILED_MESSAGE.to_string(),
                });
            }
        }
    }
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DashboardController {
    store: ConversationStore,
    flow: OptimisticMessageFlow,
    session: SessionStore,
    events: EventBus,
}

impl DashboardController {
    pub fn new(store: ConversationStore, session: SessionStore, events: EventBus) -> Self {
        Self {
            flow: OptimisticMessageFlow::new(store.clone()),
            store,
            session,
            events,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Dashboard entry. Without a valid session nothing is fetched.
    /// Every entry starts from an empty cache.
    pub async fn init(&self) {
        self.store.reset();
        if !SessionGate::new(self.session.clone()).is_authenticated() {
            self.events.emit(ChatEvent::Navigate(Route::Login));
            return;
        }
        self.settle("initializing dashboard", self.store.load()).await;
    }

    pub async fn select(&self, conv: Conversation) {
        self.settle("fetching messages", self.store.select_conversation(conv))
            .await;
    }

    pub async fn create(&self) {
        self.settle("creating conversation", self.store.create_conversation())
            .await;
    }

    pub async fn delete(&self, id: EntityId) {
        self.settle("deleting conversation", self.store.delete_conversation(&id))
            .await;
    }

    pub async fn send(&self) -> SendState {
        self.settle("sending message", self.flow.send())
            .await
            .unwrap_or(SendState::Idle)
    }

    /// Forget the session and every cached entry.
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            log::warn!("Failed to clear session: {}", e);
        }
        self.store.reset();
        log::info!("Logged out");
        self.events.emit(ChatEvent::Navigate(Route::Login));
    }

    async fn settle<T>(&self, action: &str, op: impl Future<Output = Result<T>>) -> Option<T> {
        self.events.emit(ChatEvent::RequestStarted);
        let result = op.await;
        self.events.emit(ChatEvent::RequestFinished);

        match result {
            Ok(value) => Some(value),
            Err(e) if e.is_auth_failure() => {
                log::warn!("Session missing or expired while {}", action);
                // Nothing cached for this session may outlive it
                self.store.reset();
                self.events.emit(ChatEvent::Navigate(Route::Login));
                None
            }
            Err(e) => {
                log::error!("Error {}: {}", action, e);
                None
            }
        }
    }
}
