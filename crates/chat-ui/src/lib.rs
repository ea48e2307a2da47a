//! egui views for the chat client.
//!
//! Panels render from `UiState` and the shared `ChatState` and report what
//! the user did as an action value; the app layer runs the matching
//! controller call.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
