#[cfg(test)]
mod tests {
    use crate::api::*;
    use crate::config::*;
    use crate::conversation::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::route::*;
    use crate::session::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_from_wire_shape() {
        let json = r#"{"id": 7, "user": {"username": "alice"}, "message": "hi there"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id, EntityId::Int(7));
        assert_eq!(msg.author.username, "alice");
        assert_eq!(msg.body, "hi there");
        assert!(!msg.sending);
        assert!(!msg.error);
        assert!(!msg.is_from_ai());
    }

    #[test]
    fn test_message_ai_author() {
        let msg = Message::new(1, AI_USERNAME, "Hello!");
        assert!(msg.is_from_ai());
    }

    #[test]
    fn test_message_transient_flags_not_serialized() {
        let msg = Message::provisional(1_700_000_000_000, "draft");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("sending"));
        assert!(!json.contains("error"));
        assert!(json.contains(r#""message":"draft""#));
        assert!(json.contains(r#""user":{"username":"You"}"#));
    }

    #[test]
    fn test_message_provisional() {
        let msg = Message::provisional(42, "hello");
        assert_eq!(msg.id, EntityId::Int(42));
        assert_eq!(msg.author.username, LOCAL_USERNAME);
        assert!(msg.sending);
        assert!(!msg.error);
    }

    #[test]
    fn test_message_mark_failed() {
        let mut msg = Message::provisional(42, "hello");
        msg.mark_failed();
        assert!(msg.error);
        assert!(!msg.sending);
        assert_eq!(msg.body, "hello");
    }

    #[test]
    fn test_message_missing_body_defaults_empty() {
        let msg: Message = serde_json::from_str(r#"{"id": 1, "user": {"username": "AI"}}"#).unwrap();
        assert!(msg.body.is_empty());
    }

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_int_id() {
        let conv: Conversation = serde_json::from_str(r#"{"id": 42, "title": "Trip"}"#).unwrap();
        assert_eq!(conv.id, Some(EntityId::Int(42)));
        assert_eq!(conv.title, "Trip");
    }

    #[test]
    fn test_conversation_string_id() {
        let conv: Conversation = serde_json::from_str(r#"{"id": "abc", "title": "x"}"#).unwrap();
        assert_eq!(conv.id, Some(EntityId::Text("abc".to_string())));
    }

    #[test]
    fn test_conversation_null_title() {
        let conv: Conversation = serde_json::from_str(r#"{"id": 1, "title": null}"#).unwrap();
        assert_eq!(conv.title, "");
    }

    #[test]
    fn test_conversation_missing_id() {
        let conv: Conversation = serde_json::from_str(r#"{"title": "orphan"}"#).unwrap();
        assert!(conv.id.is_none());
        assert!(!conv.same_id(&EntityId::Int(1)));
    }

    #[test]
    fn test_conversation_same_id() {
        let conv = Conversation::new(5, "t");
        assert!(conv.same_id(&EntityId::Int(5)));
        assert!(!conv.same_id(&EntityId::Int(6)));
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId::Int(12).to_string(), "12");
        assert_eq!(EntityId::from("a-b").to_string(), "a-b");
    }

    // ─── API Tests ───────────────────────────────────────────

    #[test]
    fn test_api_paths() {
        assert_eq!(conversation_path(&EntityId::Int(3)), "/api/conversation/conversation/3/");
        assert_eq!(
            delete_conversation_path(&EntityId::Int(3)),
            "/api/conversation/deleteconversation/3/"
        );
    }

    #[test]
    fn test_register_response_nested_tokens() {
        let json = r#"{"tokens": {"access": "a", "refresh": "r"}, "user": {"id": 1}}"#;
        let resp: RegisterResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.tokens.access, "a");
        assert_eq!(resp.tokens.refresh, "r");
    }

    #[test]
    fn test_chat_prompt_body() {
        let body = ChatPrompt {
            prompt: "hi".to_string(),
            model_name: "gpt-4".to_string(),
            conversation_id: EntityId::Int(9),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["prompt"], "hi");
        assert_eq!(value["model_name"], "gpt-4");
        assert_eq!(value["conversation_id"], 9);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.default_model, DEFAULT_MODEL);
        assert_eq!(config.endpoint(LOGIN_PATH), "/api/auth/login/");
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = ClientConfig::new("https://chat.example.com/");
        assert_eq!(
            config.endpoint(LIST_MODELS_PATH),
            "https://chat.example.com/api/conversation/listmodels/"
        );
    }

    // ─── Route Tests ─────────────────────────────────────────

    #[test]
    fn test_route_paths() {
        for route in [Route::Root, Route::Login, Route::Register, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_route_unknown_is_root() {
        assert_eq!(Route::from_path("/nowhere"), Route::Root);
        assert_eq!(Route::from_path(""), Route::Root);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
    }

    #[test]
    fn test_only_dashboard_is_protected() {
        assert!(Route::Dashboard.is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Register.is_protected());
        assert!(!Route::Root.is_protected());
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_token_claims_minimal() {
        let claims: TokenClaims = serde_json::from_str(r#"{"exp": 1700000000}"#).unwrap();
        assert_eq!(claims.exp, 1_700_000_000.0);
        assert!(claims.username.is_none());
    }

    #[test]
    fn test_token_claims_missing_exp_fails() {
        let result = serde_json::from_str::<TokenClaims>(r#"{"user_id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(ACCESS_TOKEN_KEY, "access_token");
        assert_eq!(REFRESH_TOKEN_KEY, "refresh_token");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(ChatError::Unauthenticated.to_string(), "Not authenticated");
        let e = ChatError::Http { status: 500, message: "boom".to_string() };
        assert_eq!(e.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn test_error_auth_failure() {
        assert!(ChatError::Unauthenticated.is_auth_failure());
        assert!(!ChatError::Network("down".to_string()).is_auth_failure());
    }

    #[test]
    fn test_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{{").unwrap_err();
        let chat_err: ChatError = err.into();
        assert!(matches!(chat_err, ChatError::Serialization(_)));
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_equality() {
        assert_eq!(
            ChatEvent::Navigate(Route::Login),
            ChatEvent::Navigate(Route::Login)
        );
        assert_ne!(
            ChatEvent::Navigate(Route::Login),
            ChatEvent::Navigate(Route::Dashboard)
        );
    }
}
