#[cfg(test)]
mod tests {
    use crate::panels::*;
    use crate::panels::chat::{WELCOME_TITLE, header_title, status_marker};
    use crate::panels::sidebar::{UNTITLED, display_title};
    use crate::state::*;
    use chat_core::store::ChatState;
    use chat_types::conversation::{Conversation, EntityId};
    use chat_types::event::ChatEvent;
    use chat_types::message::Message;
    use chat_types::route::Route;

    /// Run one headless frame and hand back whatever the panel returned.
    fn frame<T>(mut render: impl FnMut(&mut egui::Ui) -> T) -> Option<T> {
        let ctx = egui::Context::default();
        let mut out = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                out = Some(render(ui));
            });
        });
        out
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new(Route::Dashboard);
        assert_eq!(state.route, Route::Dashboard);
        assert_eq!(state.login, LoginForm::default());
        assert_eq!(state.register, RegisterForm::default());
        assert!(state.pending_delete.is_none());
        assert_eq!(state.status_text, "Ready");
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_default_is_login() {
        assert_eq!(UiState::default().route, Route::Login);
    }

    #[test]
    fn test_ui_state_navigate_reports_entered_route() {
        let mut state = UiState::new(Route::Login);
        let entered = state.process_events(vec![ChatEvent::Navigate(Route::Dashboard)]);
        assert_eq!(entered, Some(Route::Dashboard));
        assert_eq!(state.route, Route::Dashboard);
    }

    #[test]
    fn test_ui_state_navigate_to_current_route_is_noop() {
        let mut state = UiState::new(Route::Login);
        state.login.error = Some("Invalid credentials".to_string());

        let entered = state.process_events(vec![ChatEvent::Navigate(Route::Login)]);
        assert_eq!(entered, None);
        // The error from the failed attempt stays visible
        assert_eq!(state.login.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_ui_state_last_navigation_wins() {
        let mut state = UiState::new(Route::Login);
        let entered = state.process_events(vec![
            ChatEvent::Navigate(Route::Dashboard),
            ChatEvent::Navigate(Route::Login),
        ]);
        assert_eq!(entered, Some(Route::Login));
        assert_eq!(state.route, Route::Login);
    }

    #[test]
    fn test_ui_state_entering_dashboard_clears_credentials() {
        let mut state = UiState::new(Route::Login);
        state.login.username = "alice".to_string();
        state.login.password = "secret".to_string();
        state.register.password = "secret".to_string();

        state.navigate(Route::Dashboard);

        assert!(state.login.password.is_empty());
        assert!(state.login.username.is_empty());
        assert!(state.register.password.is_empty());
    }

    #[test]
    fn test_ui_state_leaving_dashboard_drops_pending_delete() {
        let mut state = UiState::new(Route::Dashboard);
        state.pending_delete = Some(EntityId::Int(3));
        state.navigate(Route::Login);
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_ui_state_switching_auth_forms_clears_errors() {
        let mut state = UiState::new(Route::Login);
        state.login.error = Some("Invalid credentials".to_string());
        state.navigate(Route::Register);
        assert!(state.login.error.is_none());
        assert!(state.register.error.is_none());
    }

    #[test]
    fn test_ui_state_login_failed_sets_inline_error() {
        let mut state = UiState::new(Route::Login);
        state.process_events(vec![ChatEvent::LoginFailed {
            message: "Invalid credentials".to_string(),
        }]);
        assert_eq!(state.login.error.as_deref(), Some("Invalid credentials"));
        assert!(state.register.error.is_none());
    }

    #[test]
    fn test_ui_state_register_failed_sets_inline_error() {
        let mut state = UiState::new(Route::Register);
        state.process_events(vec![ChatEvent::RegisterFailed {
            message: "Registration failed".to_string(),
        }]);
        assert_eq!(state.register.error.as_deref(), Some("Registration failed"));
    }

    #[test]
    fn test_ui_state_request_counter() {
        let mut state = UiState::new(Route::Dashboard);
        state.process_events(vec![ChatEvent::RequestStarted, ChatEvent::RequestStarted]);
        assert!(state.is_busy());
        assert_eq!(state.status_text, "Loading...");

        state.process_events(vec![ChatEvent::RequestFinished]);
        assert!(state.is_busy());
        assert_eq!(state.status_text, "Loading...");

        state.process_events(vec![ChatEvent::RequestFinished]);
        assert!(!state.is_busy());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_ui_state_unmatched_finish_does_not_underflow() {
        let mut state = UiState::new(Route::Dashboard);
        state.process_events(vec![ChatEvent::RequestFinished]);
        assert_eq!(state.in_flight, 0);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_register_form_to_request() {
        let form = RegisterForm {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: "pw".to_string(),
            phone: "555".to_string(),
            error: Some("old".to_string()),
        };
        let req = form.to_request();
        assert_eq!(req.username, "bob");
        assert_eq!(req.email, "bob@example.com");
        assert_eq!(req.password, "pw");
        assert_eq!(req.phone, "555");
    }

    // ─── Display Helper Tests ────────────────────────────────

    #[test]
    fn test_header_title_without_selection() {
        let chat = ChatState::new("gpt-3.5-turbo");
        assert_eq!(header_title(&chat), WELCOME_TITLE);
    }

    #[test]
    fn test_header_title_with_selection() {
        let mut chat = ChatState::new("gpt-3.5-turbo");
        chat.selected = Some(Conversation::new(1, "Rust questions"));
        assert_eq!(header_title(&chat), "Rust questions");

        chat.selected = Some(Conversation::new(2, ""));
        assert_eq!(header_title(&chat), UNTITLED);
    }

    #[test]
    fn test_display_title_blank() {
        assert_eq!(display_title(&Conversation::new(1, "  ")), UNTITLED);
        assert_eq!(display_title(&Conversation::new(1, "Hi")), "Hi");
    }

    #[test]
    fn test_status_marker_follows_send_state() {
        let mut msg = Message::provisional(1, "hello");
        assert_eq!(status_marker(&msg), Some("Sending..."));

        msg.mark_failed();
        assert_eq!(status_marker(&msg), Some("Failed to send"));

        assert_eq!(status_marker(&Message::new(2, "AI", "hi")), None);
    }

    // ─── Headless Render Tests ───────────────────────────────

    #[test]
    fn test_login_panel_idle_frame() {
        let mut form = LoginForm::default();
        assert_eq!(frame(|ui| login_panel(ui, &mut form)), Some(LoginAction::None));
    }

    #[test]
    fn test_register_panel_idle_frame() {
        let mut form = RegisterForm {
            error: Some("Registration failed".to_string()),
            ..RegisterForm::default()
        };
        assert_eq!(frame(|ui| register_panel(ui, &mut form)), Some(RegisterAction::None));
        // Rendering never clears the error by itself
        assert_eq!(form.error.as_deref(), Some("Registration failed"));
    }

    #[test]
    fn test_sidebar_and_chat_idle_frame() {
        let mut chat = ChatState::new("gpt-3.5-turbo");
        chat.conversations = vec![Conversation::new(1, "First"), Conversation::new(2, "")];
        chat.selected = Some(Conversation::new(1, "First"));
        chat.messages = vec![Message::new(1, "AI", "hello"), Message::provisional(2, "hi")];
        chat.models = vec!["gpt-3.5-turbo".to_string(), "gpt-4".to_string()];

        assert_eq!(frame(|ui| sidebar_panel(ui, &chat)), Some(SidebarAction::None));
        assert_eq!(frame(|ui| chat_panel(ui, &mut chat, "Ready", false)), Some(ChatAction::None));
        assert_eq!(chat.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_delete_modal_hidden_without_pending() {
        let ctx = egui::Context::default();
        let mut choice = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            choice = Some(delete_modal(ctx, None));
        });
        assert_eq!(choice, Some(DeleteChoice::None));
    }

    #[test]
    fn test_delete_modal_open_frame() {
        let ctx = egui::Context::default();
        let id = EntityId::Int(7);
        let mut choice = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            choice = Some(delete_modal(ctx, Some(&id)));
        });
        assert_eq!(choice, Some(DeleteChoice::None));
    }
}
