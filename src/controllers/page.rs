use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

use crate::models::page::{
    SeatPage, FARE_DISPLAY_ID, SEAT_GRID_ID, SELECTED_SEATS_DISPLAY_ID, SELECTED_SEATS_INPUT_ID,
};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book", get(book_page))
}

// GET /book
async fn book_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let widget = state.widget.lock().await;
    Html(render_page(widget.page()))
}

/// HTML-разметка страницы; отсутствующие элементы просто не выводятся.
pub fn render_page(page: &SeatPage) -> String {
    let mut html = String::from("<!doctype html>\n<html><body>\n<form method=\"post\">\n");

    if let Some(grid) = &page.seat_grid {
        html.push_str(&format!("<div id=\"{}\">\n", SEAT_GRID_ID));
        for row in grid.buttons.chunks(grid.seats_per_row.max(1)) {
            html.push_str("<div class=\"seat-row\">");
            for button in row {
                let seat_attr = button
                    .data_seat
                    .as_deref()
                    .map(|s| format!(" data-seat=\"{}\"", escape(s)))
                    .unwrap_or_default();
                let label = button.data_seat.as_deref().map(escape).unwrap_or_default();
                let disabled = if button.booked { " disabled" } else { "" };
                html.push_str(&format!(
                    "<button type=\"button\" class=\"{}\"{}{}>{}</button>",
                    button.class_list(),
                    seat_attr,
                    disabled,
                    label
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }

    if let Some(input) = &page.selected_seats_input {
        html.push_str(&format!(
            "<input type=\"hidden\" id=\"{0}\" name=\"{0}\" value=\"{1}\">\n",
            SELECTED_SEATS_INPUT_ID,
            escape(&input.value)
        ));
    }
    if let Some(label) = &page.selected_seats_display {
        html.push_str(&format!(
            "<p>Selected seats: <span id=\"{}\">{}</span></p>\n",
            SELECTED_SEATS_DISPLAY_ID,
            escape(&label.text)
        ));
    }
    if let Some(label) = &page.fare_display {
        html.push_str(&format!(
            "<p>Fare: <span id=\"{}\">{}</span></p>\n",
            FARE_DISPLAY_ID,
            escape(&label.text)
        ));
    }

    html.push_str("</form>\n</body></html>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
