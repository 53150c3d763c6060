// crates/promotions/src/domain/entities/mod.rs

mod business_hours;
mod live_promotion_status;
mod promotion_definition;
mod regional_voucher;
mod timezone_descriptor;

pub use business_hours::RegionalBusinessHours;
pub use live_promotion_status::LivePromotionStatus;
pub use promotion_definition::PromotionDefinition;
pub use regional_voucher::RegionalVoucher;
pub use timezone_descriptor::TimezoneDescriptor;
