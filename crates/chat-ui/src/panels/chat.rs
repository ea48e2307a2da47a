//! Chat panel: displays the selected conversation's messages, the model
//! selector and the input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_core::send::{SendState, message_state};
use chat_core::store::ChatState;
use chat_types::message::Message;
use crate::panels::sidebar::display_title;
use crate::theme::*;

pub const WELCOME_TITLE: &str = "Welcome to AI Chat";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    None,
    /// Send `chat.draft` to the selected conversation
    Send,
}

/// Header text for the message pane.
pub fn header_title(chat: &ChatState) -> &str {
    chat.selected.as_ref().map_or(WELCOME_TITLE, display_title)
}

/// Inline marker under a message, if its send is unsettled or failed.
pub fn status_marker(msg: &Message) -> Option<&'static str> {
    match message_state(msg) {
        SendState::Pending => Some("Sending..."),
        SendState::Failed => Some("Failed to send"),
        SendState::Idle | SendState::Committed => None,
    }
}

/// Render the chat panel. Returns `Send` when the user submits the draft.
pub fn chat_panel(ui: &mut egui::Ui, chat: &mut ChatState, status: &str, busy: bool) -> ChatAction {
    let mut action = ChatAction::None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(header_title(chat)).color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = if busy { WARNING } else { SUCCESS };
                        ui.label(RichText::new(status).color(status_color).small());
                    });
                });

                ui.separator();

                if chat.selected.is_none() {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new("Select a conversation or create a new one to start chatting")
                                .color(TEXT_SECONDARY),
                        );
                    });
                    return;
                }

                // Messages area
                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if chat.messages.is_empty() {
                            ui.label(
                                RichText::new("No messages yet. Start a conversation!")
                                    .color(TEXT_SECONDARY),
                            );
                        }
                        for msg in &chat.messages {
                            render_message(ui, msg);
                            ui.add_space(4.0);
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    model_selector(ui, chat);

                    let input = egui::TextEdit::singleline(&mut chat.draft)
                        .hint_text("Type your message")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add(input);

                    let send_enabled = !chat.draft.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        action = ChatAction::Send;
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn model_selector(ui: &mut egui::Ui, chat: &mut ChatState) {
    egui::ComboBox::from_id_salt("model_name")
        .selected_text(chat.model.as_str())
        .width(140.0)
        .show_ui(ui, |ui| {
            for name in &chat.models {
                ui.selectable_value(&mut chat.model, name.clone(), name.as_str());
            }
        });
}

fn render_message(ui: &mut egui::Ui, msg: &Message) {
    let (label_color, bg) = match message_state(msg) {
        SendState::Failed => (ERROR, ERROR_BG),
        _ if msg.is_from_ai() => (SUCCESS, BG_SECONDARY),
        _ => (ACCENT, BG_SURFACE),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(&msg.author.username)
                    .color(label_color)
                    .strong()
                    .small(),
            );
            ui.label(RichText::new(&msg.body).color(TEXT_PRIMARY));
            if let Some(marker) = status_marker(msg) {
                let color = if msg.error { ERROR } else { TEXT_SECONDARY };
                ui.label(RichText::new(marker).color(color).italics().small());
            }
        });
}
