use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::builder::draw_price;
use crate::config::DefectRates;
use crate::constants::corruption::{
    DATE_FORMATS, LABEL_COUNTRY_WHITESPACE, LABEL_DATE_FORMAT, LABEL_PRICE_SENTINEL,
    LABEL_PRODUCT_WHITESPACE, LABEL_QUANTITY_OUTLIER, LABEL_QUANTITY_SENTINEL, PRICE_OPTION_COUNT,
    PRICE_SENTINELS, QUANTITY_OUTLIER_RANGE, QUANTITY_SENTINELS,
};
use crate::data::{Field, FieldValue, SalesRecord};
use crate::types::PolicyLabel;
use crate::utils::pad_whitespace;

/// Replaces a clean value with a dirty representation.
pub type CorruptFn = fn(&FieldValue, &mut dyn RngCore) -> FieldValue;

/// When a policy entry fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Every record, without consuming a draw.
    Always,
    /// Independent Bernoulli draw with this probability.
    Chance(f64),
}

/// One row of the corruption policy table.
#[derive(Clone, Copy, Debug)]
pub struct FieldPolicy {
    /// Field the entry rewrites.
    pub field: Field,
    /// Name reported when the entry fires.
    pub label: PolicyLabel,
    pub trigger: Trigger,
    pub corrupt: CorruptFn,
}

impl FieldPolicy {
    pub const fn new(field: Field, label: PolicyLabel, trigger: Trigger, corrupt: CorruptFn) -> Self {
        Self {
            field,
            label,
            trigger,
            corrupt,
        }
    }

    fn fires(&self, rng: &mut dyn RngCore) -> bool {
        match self.trigger {
            Trigger::Always => true,
            Trigger::Chance(probability) => rng.random_bool(probability),
        }
    }
}

/// Ordered per-field corruption table.
///
/// Entries are evaluated in order with independent draws. A later entry for
/// the same field overwrites whatever an earlier one produced, so the two
/// `Quantity` entries are not mutually exclusive.
#[derive(Clone, Debug)]
pub struct CorruptionPolicy {
    entries: Vec<FieldPolicy>,
}

impl Default for CorruptionPolicy {
    fn default() -> Self {
        Self::from_rates(&DefectRates::default())
    }
}

impl CorruptionPolicy {
    /// Standard table with probabilities taken from `rates`.
    pub fn from_rates(rates: &DefectRates) -> Self {
        Self {
            entries: vec![
                FieldPolicy::new(
                    Field::Product,
                    LABEL_PRODUCT_WHITESPACE,
                    Trigger::Chance(rates.product_whitespace),
                    pad_text,
                ),
                FieldPolicy::new(
                    Field::Price,
                    LABEL_PRICE_SENTINEL,
                    Trigger::Chance(rates.price_sentinel),
                    price_sentinel,
                ),
                FieldPolicy::new(
                    Field::Quantity,
                    LABEL_QUANTITY_SENTINEL,
                    Trigger::Chance(rates.quantity_sentinel),
                    quantity_sentinel,
                ),
                FieldPolicy::new(
                    Field::Quantity,
                    LABEL_QUANTITY_OUTLIER,
                    Trigger::Chance(rates.quantity_outlier),
                    quantity_outlier,
                ),
                FieldPolicy::new(
                    Field::OrderDate,
                    LABEL_DATE_FORMAT,
                    Trigger::Always,
                    reformat_date,
                ),
                FieldPolicy::new(
                    Field::Country,
                    LABEL_COUNTRY_WHITESPACE,
                    Trigger::Chance(rates.country_whitespace),
                    pad_text,
                ),
            ],
        }
    }

    /// Build a table from explicit entries.
    pub fn with_entries(entries: Vec<FieldPolicy>) -> Self {
        Self { entries }
    }

    /// Entries in evaluation order.
    pub fn entries(&self) -> &[FieldPolicy] {
        &self.entries
    }

    /// Apply every entry to `record`, returning the labels that fired.
    pub fn apply<R: Rng>(&self, record: &mut SalesRecord, rng: &mut R) -> Vec<PolicyLabel> {
        let rng: &mut dyn RngCore = rng;
        let mut fired = Vec::new();
        for policy in &self.entries {
            if !policy.fires(rng) {
                continue;
            }
            if let Some(value) = record.get_mut(policy.field) {
                *value = (policy.corrupt)(value, rng);
                fired.push(policy.label);
            }
        }
        fired
    }
}

fn pad_text(value: &FieldValue, _rng: &mut dyn RngCore) -> FieldValue {
    FieldValue::Text(pad_whitespace(&value.render()))
}

fn price_sentinel(_value: &FieldValue, rng: &mut dyn RngCore) -> FieldValue {
    let option = rng.random_range(0..PRICE_OPTION_COUNT);
    match PRICE_SENTINELS.get(option) {
        Some(sentinel) => (*sentinel).into(),
        None => FieldValue::Text(format!("${:.2}", draw_price(rng))),
    }
}

fn quantity_sentinel(_value: &FieldValue, rng: &mut dyn RngCore) -> FieldValue {
    QUANTITY_SENTINELS
        .choose(rng)
        .map(|sentinel| (*sentinel).into())
        .unwrap_or(FieldValue::Empty)
}

fn quantity_outlier(_value: &FieldValue, rng: &mut dyn RngCore) -> FieldValue {
    FieldValue::Integer(rng.random_range(QUANTITY_OUTLIER_RANGE.0..=QUANTITY_OUTLIER_RANGE.1))
}

fn reformat_date(value: &FieldValue, rng: &mut dyn RngCore) -> FieldValue {
    match (value, DATE_FORMATS.choose(rng)) {
        (FieldValue::Date(date), Some(format)) => {
            FieldValue::Text(date.format(format).to_string())
        }
        (other, _) => other.clone(),
    }
}
