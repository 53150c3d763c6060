// crates/promotions/src/application/workers/mod.rs

pub mod status_poller;


pub use status_poller::{CachedStatus, StatusPoller};
