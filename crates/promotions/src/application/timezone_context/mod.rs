// crates/promotions/src/application/timezone_context/mod.rs

mod context_snapshot;
mod timezone_context;
mod timezone_context_test;

pub use context_snapshot::ContextSnapshot;
pub use timezone_context::TimezoneContext;
