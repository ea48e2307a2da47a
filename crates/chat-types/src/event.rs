use serde::{Deserialize, Serialize};
use crate::route::Route;

/// Events emitted by the controllers.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// Switch to another view
    Navigate(Route),

    /// Login was rejected; shown inline under the form
    LoginFailed { message: String },

    /// Registration was rejected; shown inline under the form
    RegisterFailed { message: String },

    /// A background request is in flight
    RequestStarted,

    /// A background request finished, successfully or not
    RequestFinished,
}
