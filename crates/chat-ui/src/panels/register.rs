//! Registration form.

use egui::{self, RichText};
use chat_types::api::RegisterRequest;
use crate::panels::login::{auth_card, error_line, submit_button};
use crate::state::RegisterForm;
use crate::theme::*;

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterAction {
    None,
    Submit(RegisterRequest),
    /// "Already have an account?" link
    ShowLogin,
}

pub fn register_panel(ui: &mut egui::Ui, form: &mut RegisterForm) -> RegisterAction {
    let mut action = RegisterAction::None;

    auth_card(ui, "Register", |ui| {
        let mut enter = false;
        for (value, hint, password) in [
            (&mut form.username, "Username", false),
            (&mut form.email, "Email", false),
            (&mut form.password, "Password", true),
            (&mut form.phone, "Phone", false),
        ] {
            let response = ui.add(
                egui::TextEdit::singleline(value)
                    .password(password)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            );
            enter |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        }

        ui.add_space(4.0);
        if submit_button(ui, "Register").clicked() || enter {
            form.error = None;
            action = RegisterAction::Submit(form.to_request());
        }

        error_line(ui, form.error.as_deref());

        ui.horizontal(|ui| {
            ui.label(RichText::new("Already have an account?").color(TEXT_SECONDARY));
            if ui.link("Login").clicked() {
                action = RegisterAction::ShowLogin;
            }
        });
    });

    action
}
