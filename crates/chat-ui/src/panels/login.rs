//! Login form.

use egui::{self, RichText, Vec2};
use crate::state::LoginForm;
use crate::theme::*;

/// What the caller should do after rendering the login form
#[derive(Debug, Clone, PartialEq)]
pub enum LoginAction {
    None,
    Submit { username: String, password: String },
    /// "Don't have an account?" link
    ShowRegister,
}

pub fn login_panel(ui: &mut egui::Ui, form: &mut LoginForm) -> LoginAction {
    let mut action = LoginAction::None;

    auth_card(ui, "Login", |ui| {
        let username = ui.add(
            egui::TextEdit::singleline(&mut form.username)
                .hint_text("Username")
                .desired_width(f32::INFINITY),
        );
        let password = ui.add(
            egui::TextEdit::singleline(&mut form.password)
                .password(true)
                .hint_text("Password")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(4.0);
        let submit = submit_button(ui, "Login").clicked()
            || ((username.lost_focus() || password.lost_focus())
                && ui.input(|i| i.key_pressed(egui::Key::Enter)));
        if submit {
            form.error = None;
            action = LoginAction::Submit {
                username: form.username.clone(),
                password: form.password.clone(),
            };
        }

        error_line(ui, form.error.as_deref());

        ui.horizontal(|ui| {
            ui.label(RichText::new("Don't have an account?").color(TEXT_SECONDARY));
            if ui.link("Register").clicked() {
                action = LoginAction::ShowRegister;
            }
        });
    });

    action
}

// ─── Shared auth widgets ─────────────────────────────────────

/// Centered card used by both auth forms.
pub(crate) fn auth_card(ui: &mut egui::Ui, heading: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        egui::Frame::default()
            .fill(BG_SECONDARY)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(PANEL_PADDING * 2.0)
            .show(ui, |ui| {
                ui.set_width(AUTH_FORM_WIDTH);
                ui.heading(RichText::new(heading).color(TEXT_PRIMARY).strong());
                ui.add_space(8.0);
                body(ui);
            });
    });
}

pub(crate) fn submit_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(TEXT_PRIMARY))
            .fill(ACCENT)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(AUTH_FORM_WIDTH, 0.0)),
    )
}

pub(crate) fn error_line(ui: &mut egui::Ui, error: Option<&str>) {
    if let Some(message) = error {
        ui.label(RichText::new(message).color(ERROR));
    }
}
