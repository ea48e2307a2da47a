//! Main egui application: routes between the auth forms and the dashboard
//! and hands user actions to the controllers.

use std::future::Future;
use std::rc::Rc;

use egui::{self, CentralPanel, SidePanel};

use chat_core::controller::{AuthController, DashboardController};
use chat_core::event_bus::EventBus;
use chat_core::ports::BackendPort;
use chat_core::session::{SessionGate, SessionStore};
use chat_core::store::ConversationStore;
use chat_platform::http::HttpBackend;
use chat_platform::storage::auto_detect_storage;
use chat_types::config::ClientConfig;
use chat_types::route::Route;
use chat_ui::panels::*;
use chat_ui::state::UiState;
use chat_ui::theme;

use crate::history;

pub struct ChatApp {
    ui_state: UiState,
    events: EventBus,
    gate: SessionGate,
    auth: AuthController,
    dashboard: DashboardController,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::from_env();
        log::info!("API base: {}", config.endpoint("/"));

        let session = SessionStore::new(auto_detect_storage());
        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(config.clone()));
        let events = EventBus::new();

        let store = ConversationStore::new(backend.clone(), session.clone(), &config.default_model);
        let auth = AuthController::new(backend, session.clone(), events.clone());
        let dashboard = DashboardController::new(store, session.clone(), events.clone());
        let gate = SessionGate::new(session);

        let requested = history::current_path()
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::Root);
        let route = gate.resolve(requested);
        if route != requested {
            history::replace(route);
        }

        let app = Self {
            ui_state: UiState::new(route),
            events,
            gate,
            auth,
            dashboard,
            first_frame: true,
        };
        if route == Route::Dashboard {
            app.init_dashboard(&cc.egui_ctx);
        }
        app
    }

    /// Run a controller call off the frame loop, repainting when it settles.
    fn spawn(&self, ctx: &egui::Context, task: impl Future<Output = ()> + 'static) {
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            task.await;
            ctx.request_repaint();
        });
    }

    fn init_dashboard(&self, ctx: &egui::Context) {
        let dashboard = self.dashboard.clone();
        self.spawn(ctx, async move { dashboard.init().await });
    }

    /// Switch views through the session gate.
    /// `push` records a history entry; redirects always rewrite the current one.
    fn enter(&mut self, requested: Route, push: bool, ctx: &egui::Context) {
        let route = self.gate.resolve(requested);
        if route != requested {
            log::info!("{} is not reachable, showing {}", requested.path(), route.path());
            history::replace(route);
        } else if push {
            history::push(route);
        }

        self.ui_state.navigate(route);
        if route == Route::Dashboard {
            self.init_dashboard(ctx);
        }
    }

    /// Follow back/forward navigation in the browser.
    fn follow_location(&mut self, ctx: &egui::Context) {
        let Some(path) = history::current_path() else {
            return;
        };
        let requested = Route::from_path(&path);
        if requested != self.ui_state.route {
            self.enter(requested, false, ctx);
        }
    }

    fn show_login(&mut self, ctx: &egui::Context) {
        let action = CentralPanel::default()
            .show(ctx, |ui| login_panel(ui, &mut self.ui_state.login))
            .inner;

        match action {
            LoginAction::None => {}
            LoginAction::Submit { username, password } => {
                let auth = self.auth.clone();
                self.spawn(ctx, async move { auth.login(&username, &password).await });
            }
            LoginAction::ShowRegister => self.enter(Route::Register, true, ctx),
        }
    }

    fn show_register(&mut self, ctx: &egui::Context) {
        let action = CentralPanel::default()
            .show(ctx, |ui| register_panel(ui, &mut self.ui_state.register))
            .inner;

        match action {
            RegisterAction::None => {}
            RegisterAction::Submit(req) => {
                let auth = self.auth.clone();
                self.spawn(ctx, async move { auth.register(req).await });
            }
            RegisterAction::ShowLogin => self.enter(Route::Login, true, ctx),
        }
    }

    fn show_dashboard(&mut self, ctx: &egui::Context) {
        let state = self.dashboard.store().state();

        // ── Sidebar ──────────────────────────────────────────
        let sidebar = SidePanel::left("sidebar")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| sidebar_panel(ui, &state.borrow()))
            .inner;

        // ── Messages ─────────────────────────────────────────
        let status = self.ui_state.status_text.clone();
        let busy = self.ui_state.is_busy();
        let chat = CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| chat_panel(ui, &mut state.borrow_mut(), &status, busy))
            .inner;

        // ── Delete confirmation ──────────────────────────────
        let choice = delete_modal(ctx, self.ui_state.pending_delete.as_ref());

        match sidebar {
            SidebarAction::None => {}
            SidebarAction::Logout => self.dashboard.logout(),
            SidebarAction::NewConversation => {
                let dashboard = self.dashboard.clone();
                self.spawn(ctx, async move { dashboard.create().await });
            }
            SidebarAction::Select(conv) => {
                let dashboard = self.dashboard.clone();
                self.spawn(ctx, async move { dashboard.select(conv).await });
            }
            SidebarAction::RequestDelete(id) => self.ui_state.pending_delete = Some(id),
        }

        match choice {
            DeleteChoice::None => {}
            DeleteChoice::Cancel => self.ui_state.pending_delete = None,
            DeleteChoice::Confirm(id) => {
                self.ui_state.pending_delete = None;
                let dashboard = self.dashboard.clone();
                self.spawn(ctx, async move { dashboard.delete(id).await });
            }
        }

        if chat == ChatAction::Send {
            let dashboard = self.dashboard.clone();
            self.spawn(ctx, async move {
                let outcome = dashboard.send().await;
                log::debug!("Send settled as {:?}", outcome);
            });
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        self.follow_location(ctx);

        // Drain events from the controllers
        let events = self.events.drain();
        if !events.is_empty() {
            if let Some(route) = self.ui_state.process_events(events) {
                self.enter(route, true, ctx);
            }
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        match self.ui_state.route {
            Route::Root | Route::Login => self.show_login(ctx),
            Route::Register => self.show_register(ctx),
            Route::Dashboard => self.show_dashboard(ctx),
        }
    }
}
