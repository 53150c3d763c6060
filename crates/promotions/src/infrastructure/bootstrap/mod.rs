// crates/promotions/src/infrastructure/bootstrap/mod.rs

mod watcher;

pub use watcher::run_promotion_watcher;
