//! Chat client core: session gate, conversation cache, and send flow.
//!
//! Platform-free; browser adapters plug in through [`ports`].

pub mod controller;
pub mod event_bus;
pub mod ports;
pub mod router;
pub mod send;
pub mod session;
pub mod store;
pub mod token;
