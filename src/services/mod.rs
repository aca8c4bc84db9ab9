pub mod fare;
pub mod selector;
pub mod widget;

pub use fare::Fare;
pub use selector::{ClickOutcome, SeatClickHandler, SeatSelector, SelectionView};
pub use widget::{ClickTarget, SeatWidget};
