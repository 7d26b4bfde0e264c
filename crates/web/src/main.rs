use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use checkers_core::GameSession;

mod config;
mod routes;

use config::ServerConfig;

pub struct AppState {
    pub session: Mutex<GameSession>,
}

impl AppState {
    pub fn new(session: GameSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    /// Runs `f` with exclusive access to the session.
    ///
    /// Each select or reset holds the lock for the whole step, so requests
    /// never observe a half-applied move.
    pub fn with_session<T>(&self, f: impl FnOnce(&mut GameSession) -> T) -> Result<T, StatusCode> {
        let mut session = self.session.lock().map_err(|_| {
            error!("game session lock poisoned");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        Ok(f(&mut session))
    }
}

pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/select", post(routes::select))
        .route("/reset", post(routes::reset))
        .route("/health", get(routes::health))
        .route("/api/state", get(routes::api::state))
        .route("/api/select", post(routes::api::select))
        .route("/api/reset", post(routes::api::reset))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::new(GameSession::new()));
    let app = router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(&config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {}", e);
            std::process::exit(1);
        }
    };

    info!("Server running at http://{}", config.addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {}", e);
    }
}
