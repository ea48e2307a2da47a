//! Route guard: which view a requested route actually shows.

use chat_types::route::Route;

/// Resolve a requested route against the current session state.
pub fn resolve(requested: Route, authenticated: bool) -> Route {
    match requested {
        Route::Root if authenticated => Route::Dashboard,
        Route::Root => Route::Login,
        route if route.is_protected() && !authenticated => Route::Login,
        route => route,
    }
}
