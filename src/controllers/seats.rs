use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::models::{Occupancy, SeatNumber};
use crate::services::{ClickOutcome, ClickTarget, SeatClickHandler, SeatWidget, SelectionView};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/click", post(click_seat))
        .route("/seats/{seat}/toggle", post(toggle_seat))
}

pub fn reload_route() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats/reload", post(reload_page))
}

/* ---------- responses ---------- */

#[derive(Debug, Serialize)]
pub struct SeatState {
    pub seat: Option<String>,
    pub booked: bool,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct SeatsResponse {
    pub active: bool,
    pub seats: Vec<SeatState>,
    pub view: SelectionView,
    pub occupancy: Occupancy,
}

#[derive(Debug, Serialize)]
pub struct ClickResponse {
    #[serde(flatten)]
    pub outcome: ClickOutcome,
    pub view: SelectionView,
}

/* ---------- handlers ---------- */

// GET /api/seats
async fn get_seats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let widget = state.widget.lock().await;
    Json(seats_response(&state, &widget))
}

// POST /api/seats/click
async fn click_seat(
    State(state): State<Arc<AppState>>,
    Json(target): Json<ClickTarget>,
) -> impl IntoResponse {
    let mut widget = state.widget.lock().await;
    let outcome = widget.click(target);

    Json(ClickResponse {
        outcome,
        view: widget.rendered_view(),
    })
}

// POST /api/seats/{seat}/toggle
async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    Path(seat): Path<SeatNumber>,
) -> impl IntoResponse {
    let mut widget = state.widget.lock().await;
    let outcome = widget.handle(seat);

    Json(ClickResponse {
        outcome,
        view: widget.rendered_view(),
    })
}

// POST /api/seats/reload
async fn reload_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut widget = state.widget.lock().await;
    *widget = state.fresh_widget();
    tracing::info!("Seat page reloaded, selection discarded");

    Json(seats_response(&state, &widget))
}

fn seats_response(state: &AppState, widget: &SeatWidget) -> SeatsResponse {
    let seats = widget
        .page()
        .seat_grid
        .as_ref()
        .map(|grid| {
            grid.buttons
                .iter()
                .map(|b| SeatState {
                    seat: b.data_seat.clone(),
                    booked: b.booked,
                    selected: b.selected,
                })
                .collect()
        })
        .unwrap_or_default();

    SeatsResponse {
        active: widget.is_active(),
        seats,
        view: widget.rendered_view(),
        occupancy: state.layout.occupancy(),
    }
}
