//! Subscription domain module.
//!
//! Recurring billing plans as the provider sees them: an interval unit,
//! an interval count, display texts and a NOK price.
//!
//! # Module Structure
//!
//! - `interval` - IntervalUnit (DAY, WEEK, MONTH)
//! - `plan` - SubscriptionPlan value object
//! - `product` - ProductSubscription read contract
//! - `errors` - SubscriptionError

mod errors;
mod interval;
mod plan;
mod product;

pub use errors::SubscriptionError;
pub use interval::IntervalUnit;
pub use plan::{SubscriptionPlan, CURRENCY};
pub use product::ProductSubscription;
