pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use models::{SeatLayout, SeatPage};
use services::{Fare, SeatWidget};

// Shared state для всего приложения
pub struct AppState {
    pub config: config::Config,
    pub layout: SeatLayout,
    // Один виджет, один писатель: клики обрабатываются по очереди
    pub widget: Mutex<SeatWidget>,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let layout = SeatLayout::new(
            config.layout.total_seats,
            &config.layout.booked_seats,
            config.layout.seats_per_row,
        );
        let widget = fresh_widget(&config, &layout);

        info!(
            "Seat layout ready: {} seats, {} booked",
            layout.seats().len(),
            layout.occupancy().booked_seats
        );

        Arc::new(Self {
            config,
            layout,
            widget: Mutex::new(widget),
        })
    }

    /// Страница "после перезагрузки": выбор сброшен, цена заново разобрана.
    pub fn fresh_widget(&self) -> SeatWidget {
        fresh_widget(&self.config, &self.layout)
    }
}

fn fresh_widget(config: &config::Config, layout: &SeatLayout) -> SeatWidget {
    let currency = &config.layout.currency_symbol;
    let fare = Fare::new(currency.as_str(), config.layout.seat_price);
    SeatWidget::mount(SeatPage::from_layout(layout, &fare), currency)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .route("/", get(|| async { "Seat Selector v0.1" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::page::routes())
        .nest("/api", controllers::routes())
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http());

    if state.config.features.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}
