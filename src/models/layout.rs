use serde::Serialize;
use std::collections::BTreeSet;

use super::seat::{Seat, SeatNumber};

/// Раскладка салона: места `1..=total`, по `seats_per_row` в ряду.
#[derive(Debug, Clone)]
pub struct SeatLayout {
    seats: Vec<Seat>,
    seats_per_row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Occupancy {
    pub booked_seats: usize,
    pub available_seats: usize,
    pub occupancy_percent: f64,
}

impl SeatLayout {
    pub fn new(total_seats: u32, booked: &BTreeSet<SeatNumber>, seats_per_row: usize) -> Self {
        // Номера вне диапазона просто игнорируются
        let seats = (1..=total_seats)
            .map(|n| Seat {
                number: SeatNumber(n),
                booked: booked.contains(&SeatNumber(n)),
            })
            .collect();

        Self {
            seats,
            seats_per_row: seats_per_row.max(1),
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.seats.chunks(self.seats_per_row)
    }

    pub fn occupancy(&self) -> Occupancy {
        let total = self.seats.len();
        let booked = self.seats.iter().filter(|s| s.booked).count();
        let occupancy_percent = if total > 0 {
            round_to_tenth(booked as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        Occupancy {
            booked_seats: booked,
            available_seats: total.saturating_sub(booked),
            occupancy_percent,
        }
    }
}

// Округление до десятых по точному значению, середина - к чётной цифре
fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
