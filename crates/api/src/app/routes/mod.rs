use axum::Router;

pub mod medicines;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new().merge(medicines::router())
}
