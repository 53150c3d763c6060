// crates/promotions/src/domain/value_objects/mod.rs

mod active_days;
mod active_window;

pub use active_days::ActiveDays;
pub use active_window::ActiveWindow;
