//! Subscription plan value object.
//!
//! The price lives in integer minor units (øre). Every decimal-facing
//! accessor derives from that single field, so repeated read/write cycles
//! never drift.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::errors::SubscriptionError;
use super::interval::IntervalUnit;
use super::product::ProductSubscription;

/// The only currency the provider's recurring API accepts here.
pub const CURRENCY: &str = "NOK";

/// A recurring billing plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPlan {
    interval: IntervalUnit,
    interval_count: u32,
    title: String,
    description: String,
    price_minor_units: i64,
}

impl SubscriptionPlan {
    /// Creates a plan with a zero price.
    ///
    /// # Errors
    ///
    /// - `InvalidIntervalCount` if `interval_count` is zero
    pub fn new(
        interval: IntervalUnit,
        interval_count: u32,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, SubscriptionError> {
        if interval_count == 0 {
            return Err(SubscriptionError::InvalidIntervalCount);
        }

        Ok(Self {
            interval,
            interval_count,
            title: title.into(),
            description: description.into(),
            price_minor_units: 0,
        })
    }

    /// Creates a plan from the provider's interval token (`DAY`, `WEEK`, `MONTH`).
    ///
    /// # Errors
    ///
    /// - `InvalidInterval` for any other token
    /// - `InvalidIntervalCount` if `interval_count` is zero
    pub fn create(
        interval: &str,
        interval_count: u32,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, SubscriptionError> {
        Self::new(interval.parse()?, interval_count, title, description)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the interval unit from a provider token.
    ///
    /// The plan is left unchanged on error.
    pub fn set_interval_value(&mut self, interval: &str) -> Result<(), SubscriptionError> {
        self.interval = interval.parse()?;
        Ok(())
    }

    pub fn set_interval_count(&mut self, interval_count: u32) -> Result<(), SubscriptionError> {
        if interval_count == 0 {
            return Err(SubscriptionError::InvalidIntervalCount);
        }
        self.interval_count = interval_count;
        Ok(())
    }

    /// Sets the price from a decimal amount in major units.
    ///
    /// The amount is rounded to two decimals (half away from zero, on its
    /// shortest decimal representation) and stored as minor units, so
    /// `19.995` becomes `2000`.
    ///
    /// # Errors
    ///
    /// - `MissingPrice` for `None`
    /// - `InvalidPrice` for negative, non-finite or unrepresentable amounts
    pub fn set_price(&mut self, price: Option<f64>) -> Result<(), SubscriptionError> {
        let price = price.ok_or(SubscriptionError::MissingPrice)?;
        self.price_minor_units = to_minor_units(price)?;
        Ok(())
    }

    /// Sets the price directly in minor units.
    pub fn set_integer_price(&mut self, minor_units: i64) -> Result<(), SubscriptionError> {
        if minor_units < 0 {
            return Err(SubscriptionError::InvalidPrice(minor_units.to_string()));
        }
        self.price_minor_units = minor_units;
        Ok(())
    }

    /// Number of days in one full billing cycle (`interval_count` units).
    pub fn cycle_length_days(&self) -> u64 {
        u64::from(self.interval.days()) * u64::from(self.interval_count)
    }
}

fn to_minor_units(price: f64) -> Result<i64, SubscriptionError> {
    let invalid = || SubscriptionError::InvalidPrice(price.to_string());

    if !price.is_finite() || price < 0.0 {
        return Err(invalid());
    }

    // f64's Display is the shortest string that round-trips, so 19.995 is
    // read as exactly 19.995 rather than 19.99499999...
    let decimal = Decimal::from_str(&price.to_string()).map_err(|_| invalid())?;
    let rounded = decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    rounded
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_i64())
        .ok_or_else(invalid)
}

impl ProductSubscription for SubscriptionPlan {
    /// Plans are value objects and have no identity.
    fn id(&self) -> Result<i64, SubscriptionError> {
        Err(SubscriptionError::UnsupportedOperation("id not supported"))
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn interval_value(&self) -> IntervalUnit {
        self.interval
    }

    fn interval_count(&self) -> u32 {
        self.interval_count
    }

    fn price(&self) -> Decimal {
        Decimal::new(self.price_minor_units, 2)
    }

    fn integer_price(&self) -> i64 {
        self.price_minor_units
    }

    fn price_as_string(&self) -> String {
        self.price().normalize().to_string()
    }

    fn currency(&self) -> &'static str {
        CURRENCY
    }

    fn interval_in_days(&self) -> u32 {
        self.interval.days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn monthly() -> SubscriptionPlan {
        SubscriptionPlan::create("MONTH", 1, "Monthly", "Billed every month").unwrap()
    }

    #[test]
    fn create_accepts_all_supported_units() {
        for (token, days) in [("DAY", 1), ("WEEK", 7), ("MONTH", 30)] {
            let plan = SubscriptionPlan::create(token, 1, "t", "d").unwrap();
            assert_eq!(plan.interval_in_days(), days);
            assert_eq!(plan.interval_value().as_str(), token);
        }
    }

    #[test]
    fn create_rejects_unknown_interval() {
        let err = SubscriptionPlan::create("YEAR", 1, "t", "d").unwrap_err();
        assert_eq!(err, SubscriptionError::InvalidInterval("YEAR".into()));
    }

    #[test]
    fn create_rejects_zero_count() {
        let err = SubscriptionPlan::create("WEEK", 0, "t", "d").unwrap_err();
        assert_eq!(err, SubscriptionError::InvalidIntervalCount);
    }

    #[test]
    fn new_plan_has_zero_price() {
        let plan = monthly();
        assert_eq!(plan.integer_price(), 0);
        assert_eq!(plan.price_as_string(), "0");
    }

    #[test]
    fn set_price_rounds_half_away_from_zero() {
        let mut plan = monthly();
        plan.set_price(Some(19.995)).unwrap();
        assert_eq!(plan.integer_price(), 2000);
        assert_eq!(plan.price(), Decimal::new(2000, 2));
        assert_eq!(plan.price().to_string(), "20.00");
        assert_eq!(plan.price_as_string(), "20");
    }

    #[test]
    fn set_price_keeps_two_decimals() {
        let mut plan = monthly();
        plan.set_price(Some(99.9)).unwrap();
        assert_eq!(plan.integer_price(), 9990);
        assert_eq!(plan.price_as_string(), "99.9");

        plan.set_price(Some(0.29)).unwrap();
        assert_eq!(plan.integer_price(), 29);
        assert_eq!(plan.price_as_string(), "0.29");
    }

    #[test]
    fn set_price_none_is_missing_price() {
        let mut plan = monthly();
        plan.set_price(Some(10.0)).unwrap();
        assert_eq!(plan.set_price(None), Err(SubscriptionError::MissingPrice));
        assert_eq!(plan.integer_price(), 1000);
    }

    #[test]
    fn set_price_rejects_negative_and_non_finite() {
        let mut plan = monthly();
        for bad in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                plan.set_price(Some(bad)),
                Err(SubscriptionError::InvalidPrice(_))
            ));
        }
        assert!(plan.set_price(Some(1e30)).is_err());
    }

    #[test]
    fn set_integer_price_rejects_negative() {
        let mut plan = monthly();
        assert!(plan.set_integer_price(-1).is_err());
        plan.set_integer_price(4900).unwrap();
        assert_eq!(plan.price_as_string(), "49");
    }

    #[test]
    fn currency_is_nok() {
        assert_eq!(monthly().currency(), "NOK");
    }

    #[test]
    fn id_is_unsupported() {
        assert!(matches!(
            monthly().id(),
            Err(SubscriptionError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn set_interval_value_validates() {
        let mut plan = monthly();
        plan.set_interval_value("WEEK").unwrap();
        assert_eq!(plan.interval_in_days(), 7);
        assert!(plan.set_interval_value("FORTNIGHT").is_err());
        assert_eq!(plan.interval_value(), IntervalUnit::Week);
    }

    #[test]
    fn cycle_length_multiplies_count() {
        let plan = SubscriptionPlan::new(IntervalUnit::Week, 2, "Biweekly", "").unwrap();
        assert_eq!(plan.cycle_length_days(), 14);
    }

    #[test]
    fn setters_replace_display_fields() {
        let mut plan = monthly();
        plan.set_title("Premium");
        plan.set_description("All content");
        assert_eq!(plan.title(), "Premium");
        assert_eq!(plan.description(), "All content");
    }

    proptest! {
        #[test]
        fn whole_minor_units_survive_round_trip(minor in 0i64..=100_000_000) {
            let mut plan = monthly();
            plan.set_price(Some(minor as f64 / 100.0)).unwrap();
            prop_assert_eq!(plan.integer_price(), minor);
            prop_assert_eq!(plan.price(), Decimal::new(minor, 2));
        }

        #[test]
        fn price_equals_input_rounded_to_two_decimals(x in 0.0f64..=1_000_000.0) {
            let mut plan = monthly();
            plan.set_price(Some(x)).unwrap();

            let expected = Decimal::from_str(&x.to_string())
                .unwrap()
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            prop_assert_eq!(plan.price(), expected);
            prop_assert_eq!(plan.price().scale(), 2);
        }
    }
}
