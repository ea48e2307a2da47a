pub mod chat;
pub mod login;
pub mod modal;
pub mod register;
pub mod sidebar;

pub use chat::{ChatAction, chat_panel};
pub use login::{LoginAction, login_panel};
pub use modal::{DeleteChoice, delete_modal};
pub use register::{RegisterAction, register_panel};
pub use sidebar::{SidebarAction, sidebar_panel};
