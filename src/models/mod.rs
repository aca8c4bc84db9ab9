pub mod seat;
pub mod layout;
pub mod page;

pub use seat::{Seat, SeatNumber};
pub use layout::{Occupancy, SeatLayout};
pub use page::SeatPage;
