//! UI-level state that drives rendering.
//! Holds what the dashboard cache does not: the current view, form
//! fields and inline errors. Updated each frame by draining the EventBus.

use chat_types::{
    api::RegisterRequest,
    conversation::EntityId,
    event::ChatEvent,
    route::Route,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Inline error under the form
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub error: Option<String>,
}

impl RegisterForm {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// State visible to UI panels
pub struct UiState {
    /// View being rendered
    pub route: Route,
    pub login: LoginForm,
    pub register: RegisterForm,
    /// Conversation awaiting delete confirmation
    pub pending_delete: Option<EntityId>,
    /// Requests started but not yet finished
    pub in_flight: usize,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            pending_delete: None,
            in_flight: 0,
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state.
    /// Returns the last route entered, if any event changed it.
    pub fn process_events(&mut self, events: Vec<ChatEvent>) -> Option<Route> {
        let mut entered = None;
        for event in events {
            match event {
                ChatEvent::Navigate(route) => {
                    if self.navigate(route) {
                        entered = Some(route);
                    }
                }
                ChatEvent::LoginFailed { message } => {
                    self.login.error = Some(message);
                }
                ChatEvent::RegisterFailed { message } => {
                    self.register.error = Some(message);
                }
                ChatEvent::RequestStarted => {
                    self.in_flight += 1;
                    self.status_text = "Loading...".to_string();
                }
                ChatEvent::RequestFinished => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    if self.in_flight == 0 {
                        self.status_text = "Ready".to_string();
                    }
                }
            }
        }
        entered
    }

    /// Switch views. Returns false when already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        log::info!("Navigating {} -> {}", self.route.path(), route.path());
        self.route = route;
        match route {
            Route::Dashboard => {
                // Credentials are not kept once the session exists
                self.login = LoginForm::default();
                self.register = RegisterForm::default();
            }
            Route::Login | Route::Register | Route::Root => {
                self.pending_delete = None;
                self.login.error = None;
                self.register.error = None;
            }
        }
        true
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}
