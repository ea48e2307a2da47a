use serde::{Deserialize, Serialize};

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// `/`, only ever a redirect
    Root,
    Login,
    Register,
    /// Requires a valid session
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Unknown paths map to `Root` so they redirect like `/`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            _ => Route::Root,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}
