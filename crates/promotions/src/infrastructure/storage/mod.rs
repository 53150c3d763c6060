// crates/promotions/src/infrastructure/storage/mod.rs

mod file_preference_repository;

pub use file_preference_repository::FilePreferenceRepository;
