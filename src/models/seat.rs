use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Номер места, как он записан в атрибуте `data-seat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatNumber(pub u32);

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeatNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(SeatNumber)
    }
}

impl From<u32> for SeatNumber {
    fn from(n: u32) -> Self {
        SeatNumber(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub number: SeatNumber,
    pub booked: bool,
}

impl Seat {
    pub fn free(number: u32) -> Self {
        Self { number: SeatNumber(number), booked: false }
    }

    pub fn booked(number: u32) -> Self {
        Self { number: SeatNumber(number), booked: true }
    }
}
