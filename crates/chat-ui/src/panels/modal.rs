//! Delete confirmation dialog.

use egui::{self, Align2, RichText, Vec2};
use chat_types::conversation::EntityId;
use crate::theme::*;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteChoice {
    /// Dialog still open or not shown
    None,
    Cancel,
    Confirm(EntityId),
}

/// Render the dialog when a delete is pending.
pub fn delete_modal(ctx: &egui::Context, pending: Option<&EntityId>) -> DeleteChoice {
    let Some(id) = pending else {
        return DeleteChoice::None;
    };
    let mut choice = DeleteChoice::None;

    egui::Window::new("delete_conversation")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(BG_SECONDARY)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(PANEL_PADDING * 2.0),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("⚠").color(WARNING).size(28.0));
                ui.heading(RichText::new("Delete Conversation?").color(TEXT_PRIMARY));
                ui.label(RichText::new("This action cannot be undone.").color(TEXT_SECONDARY));
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    choice = DeleteChoice::Cancel;
                }
                let delete = egui::Button::new(RichText::new("Delete").color(TEXT_PRIMARY))
                    .fill(ERROR)
                    .corner_radius(PANEL_ROUNDING);
                if ui.add(delete).clicked() {
                    choice = DeleteChoice::Confirm(id.clone());
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && choice == DeleteChoice::None {
        choice = DeleteChoice::Cancel;
    }

    choice
}
