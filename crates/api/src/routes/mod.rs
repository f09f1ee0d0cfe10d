pub mod cars;
pub mod health;
pub mod parts;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cars                  list (public), create (auth)
/// /cars/{id}             get (public), update, delete (auth)
///
/// /parts                 list (public), create (auth)
/// /parts/{id}            get (public), update, delete (auth)
/// ```
///
/// Which routes are gated is fixed by the handler signatures: every
/// mutating handler takes a `RequireAuth` extractor.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cars", cars::router())
        .nest("/parts", parts::router())
}
