use std::path::Path;

use medi_predict::config::{ArtifactPaths, GeneratorConfig, TrainingConfig};
use medi_predict::{Dataset, Result, generate_corpus, train};

/// Small, seeded generator settings for fast tests
#[must_use]
pub fn small_generator_config(samples_per_disease: usize, seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        samples_per_disease,
        seed: Some(seed),
        ..GeneratorConfig::default()
    }
}

/// Generate, persist and train a small model inside `dir`
pub fn train_into(dir: &Path, samples_per_disease: usize) -> Result<ArtifactPaths> {
    let paths = ArtifactPaths::in_dir(dir);
    let dataset = generate_corpus(&small_generator_config(samples_per_disease, 7));
    dataset.write_csv(&paths.dataset_path())?;

    let dataset = Dataset::read_csv(&paths.dataset_path())?;
    let (artifacts, _report) = train(&dataset, &TrainingConfig::default())?;
    artifacts.save(&paths)?;
    Ok(paths)
}
