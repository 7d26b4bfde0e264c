use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use checkers_core::Snapshot;

use crate::AppState;

#[derive(Deserialize)]
pub struct SelectRequest {
    pub row: usize,
    pub col: usize,
}

#[derive(Serialize)]
pub struct SelectResponse {
    pub accepted: bool,
    pub state: Snapshot,
}

pub async fn state(State(state): State<Arc<AppState>>) -> Result<Json<Snapshot>, StatusCode> {
    state.with_session(|session| Json(session.snapshot()))
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, StatusCode> {
    state.with_session(|session| {
        let accepted = session.select(req.row, req.col);
        debug!(row = req.row, col = req.col, accepted, "api select");
        Json(SelectResponse {
            accepted,
            state: session.snapshot(),
        })
    })
}

pub async fn reset(State(state): State<Arc<AppState>>) -> Result<Json<Snapshot>, StatusCode> {
    state.with_session(|session| {
        session.reset();
        Json(session.snapshot())
    })
}
