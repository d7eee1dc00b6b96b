use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::DefectRates;
use crate::data::{Field, FieldValue, SalesRecord};

/// Whole-row defects applied after field corruption.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowDefects {
    blank_field: f64,
    duplicate_row: f64,
}

/// Row-level decisions taken for one record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowOutcome {
    /// Field forcibly emptied, if any.
    pub blanked: Option<Field>,
    /// Whether the record is written a second time.
    pub duplicate: bool,
}

impl Default for RowDefects {
    fn default() -> Self {
        Self::from_rates(&DefectRates::default())
    }
}

impl RowDefects {
    /// Blank-out and duplicate probabilities taken from `rates`.
    pub fn from_rates(rates: &DefectRates) -> Self {
        Self {
            blank_field: rates.blank_field,
            duplicate_row: rates.duplicate_row,
        }
    }

    /// Draw the blank-out, then the duplicate decision, in that order.
    ///
    /// The blank-out overwrites any value, including one corruption already
    /// emptied.
    pub fn apply<R: Rng + ?Sized>(&self, record: &mut SalesRecord, rng: &mut R) -> RowOutcome {
        let mut outcome = RowOutcome::default();
        if rng.random_bool(self.blank_field) {
            if let Some(&field) = Field::ALL.choose(rng) {
                record.set(field, FieldValue::Empty);
                outcome.blanked = Some(field);
            }
        }
        outcome.duplicate = rng.random_bool(self.duplicate_row);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record() -> SalesRecord {
        SalesRecord::from_values([
            FieldValue::Integer(3),
            "Generic Wool Shirt".into(),
            "Sports".into(),
            FieldValue::Decimal(88.0),
            FieldValue::Integer(2),
            FieldValue::Date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            "CUS1000".into(),
            "Canada".into(),
            "West".into(),
            "Alan Turing".into(),
        ])
    }

    #[test]
    fn certain_blank_empties_exactly_one_field() {
        let defects = RowDefects::from_rates(&DefectRates {
            blank_field: 1.0,
            duplicate_row: 0.0,
            ..DefectRates::none()
        });
        let mut rng = StdRng::seed_from_u64(10);
        let mut fields_hit = std::collections::HashSet::new();
        for _ in 0..300 {
            let mut row = record();
            let outcome = defects.apply(&mut row, &mut rng);
            let blanked = outcome.blanked.expect("blank always fires");
            fields_hit.insert(blanked);
            assert_eq!(row.get(blanked), Some(&FieldValue::Empty));
            let empties = row.iter().filter(|(_, value)| value.is_empty()).count();
            assert_eq!(empties, 1);
            assert!(!outcome.duplicate);
        }
        assert_eq!(fields_hit.len(), Field::ALL.len());
    }

    #[test]
    fn disabled_defects_leave_record_untouched() {
        let defects = RowDefects::from_rates(&DefectRates::none());
        let mut rng = StdRng::seed_from_u64(10);
        let mut row = record();
        let outcome = defects.apply(&mut row, &mut rng);
        assert_eq!(outcome, RowOutcome::default());
        assert_eq!(row, record());
    }

    #[test]
    fn certain_duplicate_is_reported() {
        let defects = RowDefects::from_rates(&DefectRates {
            duplicate_row: 1.0,
            ..DefectRates::none()
        });
        let outcome = defects.apply(&mut record(), &mut StdRng::seed_from_u64(1));
        assert!(outcome.duplicate);
        assert_eq!(outcome.blanked, None);
    }
}
