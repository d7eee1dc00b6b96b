use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::constants::schema::{
    CATEGORIES, COUNTRIES, CUSTOMER_ID_PREFIX, CUSTOMER_ID_RANGE, ORDER_DATE_WINDOW_DAYS,
    PRICE_RANGE, QUANTITY_RANGE, REGIONS,
};
use crate::data::{FieldValue, SalesRecord};
use crate::provider::ValueProvider;
use crate::types::OrderId;
use crate::utils::round_cents;

/// Builds clean records from independent random draws.
#[derive(Clone, Debug)]
pub struct RecordBuilder<P> {
    provider: P,
    anchor_date: NaiveDate,
}

impl<P: ValueProvider> RecordBuilder<P> {
    /// `anchor_date` is the last day of the order-date window.
    pub fn new(provider: P, anchor_date: NaiveDate) -> Self {
        Self {
            provider,
            anchor_date,
        }
    }

    /// Last day of the order-date window.
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    /// Build the clean record for the 1-based `index`, drawing fields in schema order.
    pub fn build_clean<R: Rng + ?Sized>(&self, index: OrderId, rng: &mut R) -> SalesRecord {
        let product = self.provider.product_name(rng);
        let category = *CATEGORIES.choose(rng).expect("categories non-empty");
        let price = draw_price(rng);
        let quantity = rng.random_range(QUANTITY_RANGE.0..=QUANTITY_RANGE.1);
        let order_date = self.draw_order_date(rng);
        let customer_id = format!(
            "{CUSTOMER_ID_PREFIX}{}",
            rng.random_range(CUSTOMER_ID_RANGE.0..=CUSTOMER_ID_RANGE.1)
        );
        let country = *COUNTRIES.choose(rng).expect("countries non-empty");
        let region = *REGIONS.choose(rng).expect("regions non-empty");
        let salesperson = self.provider.person_name(rng);

        SalesRecord::from_values([
            FieldValue::Integer(index),
            product.into(),
            category.into(),
            FieldValue::Decimal(price),
            FieldValue::Integer(quantity),
            FieldValue::Date(order_date),
            customer_id.into(),
            country.into(),
            region.into(),
            salesperson.into(),
        ])
    }

    fn draw_order_date<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let offset = rng.random_range(0..=ORDER_DATE_WINDOW_DAYS);
        self.anchor_date
            .checked_sub_signed(Duration::days(offset))
            .unwrap_or(self.anchor_date)
    }
}

/// Uniform price in the clean range, rounded to cents.
pub fn draw_price<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    round_cents(rng.random_range(PRICE_RANGE.0..=PRICE_RANGE.1))
}
