//! Sidebar: session controls and the conversation list.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use chat_core::store::ChatState;
use chat_types::conversation::{Conversation, EntityId};
use crate::theme::*;

/// Shown for conversations the backend has not titled yet
pub const UNTITLED: &str = "New Conversation";

#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    Logout,
    NewConversation,
    Select(Conversation),
    /// Ask for confirmation before deleting
    RequestDelete(EntityId),
}

pub fn display_title(conv: &Conversation) -> &str {
    if conv.title.trim().is_empty() {
        UNTITLED
    } else {
        &conv.title
    }
}

pub fn sidebar_panel(ui: &mut egui::Ui, chat: &ChatState) -> SidebarAction {
    let mut action = SidebarAction::None;

    egui::Frame::default()
        .fill(SIDEBAR_BG)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_min_height(ui.available_height());

            ui.horizontal(|ui| {
                ui.heading(RichText::new("Conversations").color(TEXT_PRIMARY).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.small_button("Logout").clicked() {
                        action = SidebarAction::Logout;
                    }
                });
            });

            ui.add_space(4.0);
            let new_btn = ui.add(
                egui::Button::new(RichText::new("+ New Conversation").color(TEXT_PRIMARY))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(ui.available_width(), 28.0)),
            );
            if new_btn.clicked() {
                action = SidebarAction::NewConversation;
            }

            ui.separator();

            if chat.conversations.is_empty() {
                ui.label(RichText::new("No conversations yet").color(TEXT_SECONDARY).italics());
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for conv in &chat.conversations {
                        let selected = conv.id.as_ref().is_some_and(|id| chat.is_selected(id));
                        ui.horizontal(|ui| {
                            let delete = ui.add_enabled(
                                conv.id.is_some(),
                                egui::Button::new(RichText::new("✖").color(ERROR)).frame(false),
                            );
                            if delete.on_hover_text("Delete conversation").clicked() {
                                if let Some(id) = &conv.id {
                                    action = SidebarAction::RequestDelete(id.clone());
                                }
                            }

                            let text = if selected {
                                RichText::new(display_title(conv)).color(TEXT_PRIMARY).strong()
                            } else {
                                RichText::new(display_title(conv)).color(TEXT_SECONDARY)
                            };
                            if ui.selectable_label(selected, text).clicked() {
                                action = SidebarAction::Select(conv.clone());
                            }
                        });
                    }
                });
        });

    action
}
