use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, trace};

use super::fare::Fare;
use crate::models::{Seat, SeatNumber};

pub const NONE_PLACEHOLDER: &str = "None";

/// Результат одного клика по месту.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "seat", rename_all = "snake_case")]
pub enum ClickOutcome {
    Selected(SeatNumber),
    Deselected(SeatNumber),
    /// Забронированное место, клик игнорируется
    Booked(SeatNumber),
    /// Такого места нет в сетке
    Unknown(SeatNumber),
    /// Клик не попал в кнопку места (или у кнопки нет номера)
    Missed,
    /// Виджет не смонтирован
    Inactive,
}

impl ClickOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, ClickOutcome::Selected(_) | ClickOutcome::Deselected(_))
    }
}

/// One entry point for delivered clicks, whatever layer owns event delivery.
pub trait SeatClickHandler {
    fn handle(&mut self, seat: SeatNumber) -> ClickOutcome;
}

/// Производные значения, которые всегда пересчитываются вместе.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub hidden_value: String,
    pub selected_label: String,
    pub fare_label: String,
}

#[derive(Debug, Clone)]
pub struct SeatSelector {
    seats: BTreeSet<SeatNumber>,
    booked: BTreeSet<SeatNumber>,
    selected: BTreeSet<SeatNumber>,
    fare: Fare,
}

impl SeatSelector {
    pub fn new(seats: impl IntoIterator<Item = Seat>, fare: Fare) -> Self {
        let mut all = BTreeSet::new();
        let mut booked = BTreeSet::new();
        for seat in seats {
            all.insert(seat.number);
            if seat.booked {
                booked.insert(seat.number);
            }
        }

        Self {
            seats: all,
            booked,
            selected: BTreeSet::new(),
            fare,
        }
    }

    /// Начальный выбор, уже отрисованный на странице. Забронированные и
    /// неизвестные места отбрасываются.
    pub fn with_selected(mut self, selected: impl IntoIterator<Item = SeatNumber>) -> Self {
        self.selected = selected
            .into_iter()
            .filter(|n| self.seats.contains(n) && !self.booked.contains(n))
            .collect();
        self
    }

    pub fn fare(&self) -> &Fare {
        &self.fare
    }

    pub fn is_booked(&self, seat: SeatNumber) -> bool {
        self.booked.contains(&seat)
    }

    pub fn is_selected(&self, seat: SeatNumber) -> bool {
        self.selected.contains(&seat)
    }

    /// Выбранные места по возрастанию номера.
    pub fn selected(&self) -> impl Iterator<Item = SeatNumber> + '_ {
        self.selected.iter().copied()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn view(&self) -> SelectionView {
        let numbers: Vec<String> = self.selected.iter().map(|n| n.to_string()).collect();

        let selected_label = if numbers.is_empty() {
            NONE_PLACEHOLDER.to_string()
        } else {
            numbers.join(", ")
        };

        SelectionView {
            hidden_value: numbers.join(","),
            selected_label,
            fare_label: self.fare.label(numbers.len()),
        }
    }
}

impl SeatClickHandler for SeatSelector {
    fn handle(&mut self, seat: SeatNumber) -> ClickOutcome {
        if !self.seats.contains(&seat) {
            trace!("Ignoring click on unknown seat {}", seat);
            return ClickOutcome::Unknown(seat);
        }
        if self.booked.contains(&seat) {
            trace!("Ignoring click on booked seat {}", seat);
            return ClickOutcome::Booked(seat);
        }

        let outcome = if self.selected.remove(&seat) {
            ClickOutcome::Deselected(seat)
        } else {
            self.selected.insert(seat);
            ClickOutcome::Selected(seat)
        };

        debug!("Seat {} -> {:?}, {} selected", seat, outcome, self.selected.len());
        outcome
    }
}
