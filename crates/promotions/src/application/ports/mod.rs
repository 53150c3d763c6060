// crates/promotions/src/application/ports/mod.rs

mod promotion_status_client;
pub mod promotion_status_client_stub;

pub use promotion_status_client::PromotionStatusClient;
pub use promotion_status_client_stub::PromotionStatusClientStub;
