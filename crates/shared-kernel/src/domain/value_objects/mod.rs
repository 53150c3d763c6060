// crates/shared-kernel/src/domain/value_objects/mod.rs

mod clock_time;
mod discount_percent;
mod timezone;
mod value_object;

pub use clock_time::ClockTime;
pub use discount_percent::DiscountPercent;
pub use timezone::Timezone;
pub use value_object::ValueObject;
