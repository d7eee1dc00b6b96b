use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::builder::RecordBuilder;
use crate::config::{RngMode, SynthesizerConfig};
use crate::corruption::CorruptionPolicy;
use crate::data::SalesRecord;
use crate::defects::{RowDefects, RowOutcome};
use crate::errors::SynthError;
use crate::hash::record_seed;
use crate::provider::{FakerProvider, ValueProvider};
use crate::report::SynthesisReport;
use crate::sink::RecordSink;
use crate::types::{OrderId, PolicyLabel, Seed};

/// A fully processed record plus the decisions taken for it.
#[derive(Clone, Debug)]
pub struct Emission {
    /// Record as written to the sink.
    pub record: SalesRecord,
    /// Labels of the corruption entries that fired, in table order.
    pub corruptions: Vec<PolicyLabel>,
    /// Blank-out and duplicate decisions.
    pub row: RowOutcome,
}

/// Messy record synthesizer: clean build, field corruption, row defects, emit.
#[derive(Clone, Debug)]
pub struct Synthesizer<P = FakerProvider> {
    seed: Seed,
    rng_mode: RngMode,
    batch_size: usize,
    builder: RecordBuilder<P>,
    corruption: CorruptionPolicy,
    defects: RowDefects,
}

impl Synthesizer<FakerProvider> {
    /// Synthesizer using the default fake-value provider.
    pub fn new(config: &SynthesizerConfig) -> Result<Self, SynthError> {
        Self::with_provider(config, FakerProvider)
    }
}

impl<P: ValueProvider> Synthesizer<P> {
    /// Validate `config` and resolve the seed and anchor date.
    pub fn with_provider(config: &SynthesizerConfig, provider: P) -> Result<Self, SynthError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| {
            let seed = rand::rng().random::<Seed>();
            warn!(seed, "no seed configured; drew one from entropy");
            seed
        });
        let anchor_date = config
            .anchor_date
            .unwrap_or_else(|| Local::now().date_naive());
        Ok(Self {
            seed,
            rng_mode: config.rng_mode,
            batch_size: config.batch_size,
            builder: RecordBuilder::new(provider, anchor_date),
            corruption: CorruptionPolicy::from_rates(&config.rates),
            defects: RowDefects::from_rates(&config.rates),
        })
    }

    /// Seed that reproduces this synthesizer's output.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Last day of the order-date window.
    pub fn anchor_date(&self) -> NaiveDate {
        self.builder.anchor_date()
    }

    /// Build, corrupt, and apply row defects to record `index` using `rng`.
    pub fn synthesize_one<R: Rng>(&self, index: OrderId, rng: &mut R) -> Emission {
        let mut record = self.builder.build_clean(index, rng);
        let corruptions = self.corruption.apply(&mut record, rng);
        let row = self.defects.apply(&mut record, rng);
        Emission {
            record,
            corruptions,
            row,
        }
    }

    /// Emit `n` logical records (plus duplicates) into `sink`.
    ///
    /// Stops at the first sink error; rows already written stay written.
    pub fn synthesize<S: RecordSink>(
        &self,
        n: usize,
        mut sink: S,
    ) -> Result<SynthesisReport, SynthError> {
        info!(
            records = n,
            seed = self.seed,
            anchor_date = %self.anchor_date(),
            mode = ?self.rng_mode,
            "synthesizing messy sales records"
        );
        let mut report = SynthesisReport::new(self.seed, n);
        match self.rng_mode {
            RngMode::Sequential => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                for index in 1..=n {
                    let emission = self.synthesize_one(index as OrderId, &mut rng);
                    emit(emission, &mut sink, &mut report)?;
                }
            }
            RngMode::PerRecord => {
                for start in (1..=n).step_by(self.batch_size) {
                    let end = n.min(start.saturating_add(self.batch_size - 1));
                    let batch: Vec<Emission> = (start..=end)
                        .into_par_iter()
                        .map(|index| {
                            let index = index as OrderId;
                            let mut rng = StdRng::seed_from_u64(record_seed(self.seed, index));
                            self.synthesize_one(index, &mut rng)
                        })
                        .collect();
                    debug!(start, end, "built record batch");
                    for emission in batch {
                        emit(emission, &mut sink, &mut report)?;
                    }
                }
            }
        }
        sink.finish()?;
        info!(
            emitted = report.emitted,
            duplicates = report.duplicates,
            blanked = report.blanked,
            "synthesis complete"
        );
        Ok(report)
    }
}

fn emit<S: RecordSink>(
    emission: Emission,
    sink: &mut S,
    report: &mut SynthesisReport,
) -> Result<(), SynthError> {
    sink.write_record(&emission.record)?;
    report.emitted += 1;
    report.record_corruptions(&emission.corruptions);
    if emission.row.blanked.is_some() {
        report.blanked += 1;
    }
    if emission.row.duplicate {
        sink.write_record(&emission.record)?;
        report.emitted += 1;
        report.duplicates += 1;
    }
    Ok(())
}
