pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod ordering;
pub mod routes;
pub mod scoring;
pub mod seed;
pub mod state;
pub mod utils;

use utoipa::OpenApi;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Propbowl API",
        version = "1.0.0",
        description = "API for running a prop bet contest: picks, resolution, and live standings"
    ),
    paths(
        handlers::site::home,
        handlers::sheet::get_sheet,
        handlers::sheet::submit_sheet,
        handlers::entries::list_entries,
        handlers::entries::entry_detail,
        handlers::standings::standings,
        handlers::standings::api_standings,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::admin::dashboard,
        handlers::admin::update_settings,
        handlers::props::list_props,
        handlers::props::create_prop,
        handlers::props::get_prop,
        handlers::props::update_prop,
        handlers::props::delete_prop,
        handlers::props::move_prop,
        handlers::props::resolve_prop,
        handlers::entries::admin_list_entries,
        handlers::entries::delete_entry,
    ),
    tags(
        (name = "Public", description = "Submission sheet, entries, and standings"),
        (name = "Admin Session", description = "Shared-secret admin login"),
        (name = "Admin", description = "Dashboard, settings, and entry management"),
        (name = "Props", description = "Prop CRUD, ordering, and resolution"),
    ),
    modifiers(&SecurityAddon),
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();
        components.add_security_scheme(
            "admin_session",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                extractors::auth::SESSION_COOKIE,
            ))),
        );
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .merge(routes::app_routes())
        .with_state(state)
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
}
