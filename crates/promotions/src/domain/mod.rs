// crates/promotions/src/domain/mod.rs

pub mod catalog;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;
