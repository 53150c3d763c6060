// crates/promotions/src/infrastructure/http/mod.rs

mod http_promotion_status_client;

pub use http_promotion_status_client::HttpPromotionStatusClient;
