// crates/promotions/src/domain/services/mod.rs

pub mod promotion_evaluator;
pub mod timezone_resolver;

mod timezone_resolver_test;
