// crates/promotions/src/domain/repositories/mod.rs

mod timezone_preference_repository;
pub mod timezone_preference_repository_stub;

pub use timezone_preference_repository::TimezonePreferenceRepository;
pub use timezone_preference_repository_stub::TimezonePreferenceRepositoryStub;
