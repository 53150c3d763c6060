// crates/promotions/src/infrastructure/mod.rs

pub mod bootstrap;
pub mod http;
pub mod storage;
