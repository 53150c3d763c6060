// crates/promotions/src/application/mod.rs

pub mod ports;
pub mod timezone_context;
pub mod workers;
