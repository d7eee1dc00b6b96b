//! Realistic fake values consumed by the clean record builder.

use fake::Fake;
use fake::faker::name::en::Name;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::constants::provider::{PRODUCT_ADJECTIVES, PRODUCT_MATERIALS, PRODUCT_NOUNS};

/// Source of plausible values whose exact distribution is not part of the contract.
pub trait ValueProvider: Send + Sync {
    /// A commerce product name such as `Ergonomic Steel Chair`.
    fn product_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
    /// A full person name such as `Ada Lovelace`.
    fn person_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

/// Default provider backed by the `fake` crate and built-in commerce word lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct FakerProvider;

impl ValueProvider for FakerProvider {
    fn product_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let adjective = PRODUCT_ADJECTIVES.choose(rng).expect("adjectives non-empty");
        let material = PRODUCT_MATERIALS.choose(rng).expect("materials non-empty");
        let noun = PRODUCT_NOUNS.choose(rng).expect("nouns non-empty");
        format!("{adjective} {material} {noun}")
    }

    fn person_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        Name().fake_with_rng(rng)
    }
}
