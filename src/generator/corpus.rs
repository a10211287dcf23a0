//! Generation of a complete labelled corpus

use std::time::Instant;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::GeneratorConfig;
use crate::dataset::Dataset;
use crate::models::FeatureRecord;
use crate::utils::{create_main_progress_bar, finish_progress_bar};
use crate::vocabulary::Disease;

use super::case::CaseGenerator;

/// Generate `samples_per_disease` cases for every disease and shuffle them
///
/// Cases are produced in rounds, one case per disease per round in
/// [`Disease::all`] order, from a single RNG. With a fixed `seed` the whole
/// corpus, including its final order, is reproducible.
#[must_use]
pub fn generate_corpus(config: &GeneratorConfig) -> Dataset {
    let start = Instant::now();
    let generator = CaseGenerator::new(config);
    let diseases = Disease::all();
    let total = config.samples_per_disease * diseases.len();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pb = create_main_progress_bar(total as u64, Some("generating cases"));

    let mut records: Vec<FeatureRecord> = Vec::with_capacity(total);
    for _ in 0..config.samples_per_disease {
        for disease in diseases {
            records.push(generator.generate_case(*disease, &mut rng));
        }
        pb.inc(diseases.len() as u64);
    }
    finish_progress_bar(&pb, Some("done"));

    shuffle_records(&mut records, config.shuffle_seed);
    info!(
        "Generated {} samples for {} diseases in {:?}",
        records.len(),
        diseases.len(),
        start.elapsed()
    );

    Dataset::new(std::sync::Arc::clone(generator.schema()), records)
}

/// Apply one seeded permutation to the corpus
pub fn shuffle_records(records: &mut [FeatureRecord], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    records.shuffle(&mut rng);
}
