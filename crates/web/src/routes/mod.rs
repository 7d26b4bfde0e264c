use askama::Template;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use checkers_core::{Color, Snapshot};

use crate::AppState;

pub mod api;

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub title: String,
    pub turn: String,
    pub winner: Option<String>,
    pub rows: Vec<Vec<CellView>>,
    pub red_left: usize,
    pub white_left: usize,
    pub red_kings: usize,
    pub white_kings: usize,
}

pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub dark: bool,
    /// CSS classes of the piece on this square, empty when there is none
    pub piece: String,
    pub highlight: bool,
    pub selected: bool,
}

impl BoardTemplate {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let rows = (0..snapshot.size)
            .map(|row| {
                (0..snapshot.size)
                    .map(|col| CellView {
                        row,
                        col,
                        dark: col % 2 == (row + 1) % 2,
                        piece: snapshot
                            .piece_at(row, col)
                            .map(|p| {
                                let mut class = format!("piece {}", p.color.as_str());
                                if p.is_king {
                                    class.push_str(" king");
                                }
                                class
                            })
                            .unwrap_or_default(),
                        highlight: snapshot.is_highlighted(row, col),
                        selected: snapshot
                            .selected
                            .is_some_and(|s| s.row == row && s.col == col),
                    })
                    .collect()
            })
            .collect();

        Self {
            title: "Checkers".to_string(),
            turn: snapshot.turn.display_name().to_string(),
            winner: snapshot.winner.map(|c: Color| c.display_name().to_string()),
            rows,
            red_left: snapshot.red_left,
            white_left: snapshot.white_left,
            red_kings: snapshot.red_kings,
            white_kings: snapshot.white_kings,
        }
    }
}

#[derive(Deserialize)]
pub struct SelectForm {
    pub row: usize,
    pub col: usize,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match state.with_session(|session| session.snapshot()) {
        Ok(snapshot) => askama_axum::into_response(&BoardTemplate::from_snapshot(&snapshot)),
        Err(status) => status.into_response(),
    }
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SelectForm>,
) -> Response {
    match state.with_session(|session| session.select(form.row, form.col)) {
        Ok(accepted) => {
            debug!(row = form.row, col = form.col, accepted, "board click");
            Redirect::to("/").into_response()
        }
        Err(status) => status.into_response(),
    }
}

pub async fn reset(State(state): State<Arc<AppState>>) -> Response {
    match state.with_session(|session| session.reset()) {
        Ok(()) => Redirect::to("/").into_response(),
        Err(status) => status.into_response(),
    }
}

pub async fn health() -> &'static str {
    "OK"
}
