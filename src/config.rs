use chrono::NaiveDate;
use std::path::PathBuf;

use crate::constants::config::{DEFAULT_BATCH_SIZE, DEFAULT_OUTPUT_PATH, DEFAULT_RECORDS};
use crate::constants::corruption::{
    COUNTRY_WHITESPACE_RATE, PRICE_SENTINEL_RATE, PRODUCT_WHITESPACE_RATE,
    QUANTITY_OUTLIER_RATE, QUANTITY_SENTINEL_RATE,
};
use crate::constants::defects::{BLANK_FIELD_RATE, DUPLICATE_ROW_RATE};
use crate::errors::SynthError;
use crate::types::Seed;

/// Probabilities for every probabilistic defect.
///
/// `OrderDate` reformatting is unconditional and has no rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefectRates {
    /// Chance of padding `Product` with whitespace.
    pub product_whitespace: f64,
    /// Chance of replacing `Price` with a sentinel.
    pub price_sentinel: f64,
    /// Chance of replacing `Quantity` with a sentinel.
    pub quantity_sentinel: f64,
    /// Chance of replacing `Quantity` with an outlier, drawn after the sentinel check.
    pub quantity_outlier: f64,
    /// Chance of padding `Country` with whitespace.
    pub country_whitespace: f64,
    /// Chance of blanking one uniformly chosen field.
    pub blank_field: f64,
    /// Chance of emitting the record twice.
    pub duplicate_row: f64,
}

impl Default for DefectRates {
    fn default() -> Self {
        Self {
            product_whitespace: PRODUCT_WHITESPACE_RATE,
            price_sentinel: PRICE_SENTINEL_RATE,
            quantity_sentinel: QUANTITY_SENTINEL_RATE,
            quantity_outlier: QUANTITY_OUTLIER_RATE,
            country_whitespace: COUNTRY_WHITESPACE_RATE,
            blank_field: BLANK_FIELD_RATE,
            duplicate_row: DUPLICATE_ROW_RATE,
        }
    }
}

impl DefectRates {
    /// All probabilistic defects disabled; only date reformatting remains.
    pub fn none() -> Self {
        Self {
            product_whitespace: 0.0,
            price_sentinel: 0.0,
            quantity_sentinel: 0.0,
            quantity_outlier: 0.0,
            country_whitespace: 0.0,
            blank_field: 0.0,
            duplicate_row: 0.0,
        }
    }

    fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("product_whitespace", self.product_whitespace),
            ("price_sentinel", self.price_sentinel),
            ("quantity_sentinel", self.quantity_sentinel),
            ("quantity_outlier", self.quantity_outlier),
            ("country_whitespace", self.country_whitespace),
            ("blank_field", self.blank_field),
            ("duplicate_row", self.duplicate_row),
        ]
    }
}

/// How random draws are distributed across records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RngMode {
    /// One stream threaded through every record in order.
    #[default]
    Sequential,
    /// Each record owns a substream derived from the seed and its index.
    ///
    /// Records are built in parallel batches; output does not depend on batch size.
    PerRecord,
}

/// Top-level synthesizer configuration.
#[derive(Clone, Debug)]
pub struct SynthesizerConfig {
    /// Number of logical records to generate (duplicates excluded).
    pub records: usize,
    /// CSV output path used by the CLI.
    pub output: PathBuf,
    /// RNG seed; `None` draws one from OS entropy.
    pub seed: Option<Seed>,
    /// Last day of the order-date window; `None` uses today's local date.
    pub anchor_date: Option<NaiveDate>,
    /// Random stream layout.
    pub rng_mode: RngMode,
    /// Records built per parallel batch in [`RngMode::PerRecord`].
    pub batch_size: usize,
    /// Defect probabilities.
    pub rates: DefectRates,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            records: DEFAULT_RECORDS,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
            anchor_date: None,
            rng_mode: RngMode::Sequential,
            batch_size: DEFAULT_BATCH_SIZE,
            rates: DefectRates::default(),
        }
    }
}

impl SynthesizerConfig {
    /// Reject probabilities outside `[0, 1]` and a zero batch size.
    pub fn validate(&self) -> Result<(), SynthError> {
        for (name, rate) in self.rates.named() {
            if !(0.0..=1.0).contains(&rate) {
                return Err(SynthError::Configuration(format!(
                    "{name} rate must be within [0, 1], got {rate}"
                )));
            }
        }
        if self.batch_size == 0 {
            return Err(SynthError::Configuration(
                "batch_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_rates() {
        let config = SynthesizerConfig::default();
        assert_eq!(config.records, 5000);
        assert_eq!(config.output, PathBuf::from("sales_data.csv"));
        assert_eq!(config.rates.price_sentinel, 0.10);
        assert_eq!(config.rates.quantity_outlier, 0.05);
        assert_eq!(config.rates.duplicate_row, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let config = SynthesizerConfig {
            rates: DefectRates {
                blank_field: 1.5,
                ..DefectRates::default()
            },
            ..SynthesizerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("blank_field"));

        let nan = SynthesizerConfig {
            rates: DefectRates {
                price_sentinel: f64::NAN,
                ..DefectRates::default()
            },
            ..SynthesizerConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn rejects_zero_batch_size() {
        let config = SynthesizerConfig {
            batch_size: 0,
            ..SynthesizerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SynthError::Configuration(_))
        ));
    }

    #[test]
    fn none_disables_every_rate() {
        let rates = DefectRates::none();
        assert!(rates.named().iter().all(|(_, rate)| *rate == 0.0));
    }
}
