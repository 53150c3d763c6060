// crates/shared-kernel/src/domain/mod.rs

pub mod value_objects;
