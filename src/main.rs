use tracing::{Level, info, warn};

use propbowl::config::{AppConfig, DEFAULT_ADMIN_PASSWORD, DEFAULT_SESSION_SECRET};
use propbowl::state::AppState;
use propbowl::{database, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;
    if config.auth.admin_password == DEFAULT_ADMIN_PASSWORD {
        warn!("Using the default admin password; set PROPBOWL__AUTH__ADMIN_PASSWORD");
    }
    if config.auth.session_secret == DEFAULT_SESSION_SECRET {
        warn!("Using the default session secret; set PROPBOWL__AUTH__SESSION_SECRET");
    }

    let db = database::init_db(&config.database.url).await?;
    seed::ensure_settings(&db).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { db, config };
    let app = propbowl::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("propbowl listening at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
