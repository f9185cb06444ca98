use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all lendit endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route(
            "/api/items",
            get(handler::list_items_handler)
                .post(handler::create_item_handler)
                .delete(handler::delete_item_handler),
        )
        .route("/api/items/:item_id", put(handler::borrow_item_handler))
        .route("/api/users", post(handler::create_user_handler))
        .route("/api/users/:user_id", get(handler::get_user_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
