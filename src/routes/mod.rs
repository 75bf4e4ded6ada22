use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::state::AppState;

pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(admin_routes())
        .nest("/api", api_routes())
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::site::home))
        .route(
            "/prop-sheet",
            get(handlers::sheet::get_sheet).post(handlers::sheet::submit_sheet),
        )
        .route("/entries", get(handlers::entries::list_entries))
        .route("/entry/{id}", get(handlers::entries::entry_detail))
        .route("/standings", get(handlers::standings::standings))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(handlers::admin::dashboard))
        .route("/admin/login", post(handlers::auth::login))
        .route("/admin/logout", get(handlers::auth::logout))
        .route("/admin/settings", post(handlers::admin::update_settings))
        .route(
            "/admin/props",
            get(handlers::props::list_props).post(handlers::props::create_prop),
        )
        .route(
            "/admin/props/{id}",
            get(handlers::props::get_prop)
                .put(handlers::props::update_prop)
                .delete(handlers::props::delete_prop),
        )
        .route(
            "/admin/props/{id}/move/{direction}",
            post(handlers::props::move_prop),
        )
        .route("/admin/props/{id}/resolve", post(handlers::props::resolve_prop))
        .route("/admin/entries", get(handlers::entries::admin_list_entries))
        .route("/admin/entries/{id}", delete(handlers::entries::delete_entry))
}

fn api_routes() -> Router<AppState> {
    // The polling feed is public read-only data; any origin may poll it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/standings", get(handlers::standings::api_standings))
        .layer(cors)
}
