//! Модель страницы выбора мест: те же элементы, что и в разметке
//! (`#seat-grid`, `#selected_seats`, `#selected-seats-display`, `#fare-display`).

use serde::Serialize;

use super::layout::SeatLayout;
use crate::services::fare::Fare;
use crate::services::selector::NONE_PLACEHOLDER;

pub const SEAT_GRID_ID: &str = "seat-grid";
pub const SELECTED_SEATS_INPUT_ID: &str = "selected_seats";
pub const SELECTED_SEATS_DISPLAY_ID: &str = "selected-seats-display";
pub const FARE_DISPLAY_ID: &str = "fare-display";

pub const SEAT_BUTTON_CLASS: &str = "seat-btn";
pub const SEAT_BOOKED_CLASS: &str = "seat-booked";
pub const SEAT_SELECTED_CLASS: &str = "seat-selected";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatButton {
    pub data_seat: Option<String>,
    pub booked: bool,
    pub selected: bool,
}

impl SeatButton {
    pub fn class_list(&self) -> String {
        let mut classes = vec![SEAT_BUTTON_CLASS];
        if self.booked {
            classes.push(SEAT_BOOKED_CLASS);
        }
        if self.selected {
            classes.push(SEAT_SELECTED_CLASS);
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatGrid {
    pub buttons: Vec<SeatButton>,
    pub seats_per_row: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HiddenInput {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextElement {
    pub text: String,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Любой элемент может отсутствовать; тогда виджет не активируется.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeatPage {
    pub seat_grid: Option<SeatGrid>,
    pub selected_seats_input: Option<HiddenInput>,
    pub selected_seats_display: Option<TextElement>,
    pub fare_display: Option<TextElement>,
}

impl SeatPage {
    /// Страница в том виде, в каком её отдаёт сервер: ничего не выбрано,
    /// в `#fare-display` зашита цена за место.
    pub fn from_layout(layout: &SeatLayout, fare: &Fare) -> Self {
        let buttons = layout
            .seats()
            .iter()
            .map(|seat| SeatButton {
                data_seat: Some(seat.number.to_string()),
                booked: seat.booked,
                selected: false,
            })
            .collect();

        Self {
            seat_grid: Some(SeatGrid {
                buttons,
                seats_per_row: layout.seats_per_row(),
            }),
            selected_seats_input: Some(HiddenInput::default()),
            selected_seats_display: Some(TextElement::new(NONE_PLACEHOLDER)),
            fare_display: Some(TextElement::new(fare.label(0))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatNumber;
    use std::collections::BTreeSet;

    #[test]
    fn renders_initial_page_from_layout() {
        let booked: BTreeSet<_> = [SeatNumber(3)].into_iter().collect();
        let layout = SeatLayout::new(3, &booked, 3);
        let page = SeatPage::from_layout(&layout, &Fare::new("₹", 100.0));

        let grid = page.seat_grid.as_ref().unwrap();
        assert_eq!(grid.buttons.len(), 3);
        assert_eq!(grid.buttons[2].class_list(), "seat-btn seat-booked");
        assert_eq!(grid.buttons[0].data_seat.as_deref(), Some("1"));
        assert_eq!(page.selected_seats_input.unwrap().value, "");
        assert_eq!(page.selected_seats_display.unwrap().text, "None");
        assert_eq!(page.fare_display.unwrap().text, "₹100.00 x 0 = ₹0.00");
    }
}
