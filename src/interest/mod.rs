pub mod daily;
pub mod forecast;
pub mod monthly;

pub use daily::daily_charge;
pub use forecast::months_to_clear;
pub use monthly::monthly_charge;
