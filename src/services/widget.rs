use serde::Deserialize;
use tracing::{debug, trace};

use super::fare::Fare;
use super::selector::{ClickOutcome, SeatClickHandler, SeatSelector, SelectionView};
use crate::error::SelectorError;
use crate::models::page::{
    SeatPage, FARE_DISPLAY_ID, SEAT_GRID_ID, SELECTED_SEATS_DISPLAY_ID, SELECTED_SEATS_INPUT_ID,
};
use crate::models::{Seat, SeatNumber};

/// Куда пришёлся клик внутри `#seat-grid`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ClickTarget {
    /// Кнопка места или её потомок
    SeatButton {
        #[serde(default)]
        data_seat: Option<String>,
    },
    /// Пустое место сетки
    Grid,
}

impl ClickTarget {
    pub fn seat(number: impl ToString) -> Self {
        ClickTarget::SeatButton {
            data_seat: Some(number.to_string()),
        }
    }
}

/// Привязка селектора к странице. Страница - только проекция состояния
/// селектора; без обязательных элементов виджет инертен.
#[derive(Debug, Clone)]
pub struct SeatWidget {
    page: SeatPage,
    selector: Option<SeatSelector>,
}

impl SeatWidget {
    /// Монтирует виджет; при отсутствии любого элемента молча остаётся инертным.
    pub fn mount(page: SeatPage, currency: &str) -> Self {
        match bind(&page, currency) {
            Ok(selector) => Self { page, selector: Some(selector) },
            Err(e) => {
                debug!("Seat widget stays inert: {}", e);
                Self { page, selector: None }
            }
        }
    }

    /// Строгий вариант `mount`: сообщает, какого элемента не хватает.
    pub fn try_mount(page: SeatPage, currency: &str) -> Result<Self, SelectorError> {
        let selector = bind(&page, currency)?;
        Ok(Self { page, selector: Some(selector) })
    }

    pub fn is_active(&self) -> bool {
        self.selector.is_some()
    }

    pub fn page(&self) -> &SeatPage {
        &self.page
    }

    pub fn selector(&self) -> Option<&SeatSelector> {
        self.selector.as_ref()
    }

    /// Что сейчас написано в трёх выходных элементах страницы.
    pub fn rendered_view(&self) -> SelectionView {
        SelectionView {
            hidden_value: self
                .page
                .selected_seats_input
                .as_ref()
                .map(|i| i.value.clone())
                .unwrap_or_default(),
            selected_label: self
                .page
                .selected_seats_display
                .as_ref()
                .map(|t| t.text.clone())
                .unwrap_or_default(),
            fare_label: self
                .page
                .fare_display
                .as_ref()
                .map(|t| t.text.clone())
                .unwrap_or_default(),
        }
    }

    pub fn click(&mut self, target: ClickTarget) -> ClickOutcome {
        if !self.is_active() {
            return ClickOutcome::Inactive;
        }

        let seat = match target {
            ClickTarget::SeatButton { data_seat: Some(raw) } => match raw.parse::<SeatNumber>() {
                Ok(seat) => seat,
                Err(_) => {
                    trace!("Seat button with non-numeric data-seat {:?}", raw);
                    return ClickOutcome::Missed;
                }
            },
            ClickTarget::SeatButton { data_seat: None } | ClickTarget::Grid => {
                return ClickOutcome::Missed;
            }
        };

        self.handle(seat)
    }

    // Переносит состояние селектора на страницу за один шаг
    fn project(&mut self, seat: SeatNumber) {
        let Some(selector) = self.selector.as_ref() else {
            return;
        };
        let view = selector.view();

        if let Some(grid) = self.page.seat_grid.as_mut() {
            for button in grid.buttons.iter_mut() {
                let number = button.data_seat.as_deref().and_then(|s| s.parse::<SeatNumber>().ok());
                if number == Some(seat) {
                    button.selected = selector.is_selected(seat);
                }
            }
        }
        if let Some(input) = self.page.selected_seats_input.as_mut() {
            input.value = view.hidden_value;
        }
        if let Some(label) = self.page.selected_seats_display.as_mut() {
            label.text = view.selected_label;
        }
        if let Some(label) = self.page.fare_display.as_mut() {
            label.text = view.fare_label;
        }
    }
}

impl SeatClickHandler for SeatWidget {
    fn handle(&mut self, seat: SeatNumber) -> ClickOutcome {
        let Some(selector) = self.selector.as_mut() else {
            return ClickOutcome::Inactive;
        };

        let outcome = selector.handle(seat);
        if outcome.changed() {
            self.project(seat);
        }
        outcome
    }
}

fn bind(page: &SeatPage, currency: &str) -> Result<SeatSelector, SelectorError> {
    let grid = page
        .seat_grid
        .as_ref()
        .ok_or(SelectorError::MissingElement(SEAT_GRID_ID))?;
    page.selected_seats_input
        .as_ref()
        .ok_or(SelectorError::MissingElement(SELECTED_SEATS_INPUT_ID))?;
    page.selected_seats_display
        .as_ref()
        .ok_or(SelectorError::MissingElement(SELECTED_SEATS_DISPLAY_ID))?;
    let fare_display = page
        .fare_display
        .as_ref()
        .ok_or(SelectorError::MissingElement(FARE_DISPLAY_ID))?;

    let fare = Fare::parse(&fare_display.text, currency);

    // Кнопки без номера кликабельны, но в выбор не попадают
    let numbered: Vec<(Seat, bool)> = grid
        .buttons
        .iter()
        .filter_map(|b| {
            let number = b.data_seat.as_deref()?.parse::<SeatNumber>().ok()?;
            Some((Seat { number, booked: b.booked }, b.selected))
        })
        .collect();

    let preselected: Vec<SeatNumber> = numbered
        .iter()
        .filter(|(_, selected)| *selected)
        .map(|(seat, _)| seat.number)
        .collect();

    let selector = SeatSelector::new(numbered.into_iter().map(|(seat, _)| seat), fare)
        .with_selected(preselected);

    debug!(
        "Seat widget mounted: unit price {:.2}, {} preselected",
        selector.fare().unit_price(),
        selector.selected_count()
    );
    Ok(selector)
}
