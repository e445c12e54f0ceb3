//! Read contract for anything that can be sold as a recurring product.

use rust_decimal::Decimal;

use super::errors::SubscriptionError;
use super::interval::IntervalUnit;

/// A product that can back a recurring agreement.
///
/// Agreement drafting only needs these read accessors, so plans coming from
/// different sources (configured plans, catalog products) can share one path.
pub trait ProductSubscription: Send + Sync {
    /// Persistent identity of the product, if it has one.
    fn id(&self) -> Result<i64, SubscriptionError>;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn interval_value(&self) -> IntervalUnit;

    fn interval_count(&self) -> u32;

    /// Price in major units, two decimal places.
    fn price(&self) -> Decimal;

    /// Price in minor units (øre).
    fn integer_price(&self) -> i64;

    fn price_as_string(&self) -> String;

    fn currency(&self) -> &'static str;

    /// Length of one interval unit in days.
    fn interval_in_days(&self) -> u32;
}
