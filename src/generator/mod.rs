//! Synthetic case generation
//!
//! This module produces labelled feature rows that encode, per disease,
//! realistic correlations between demographics, vital signs, history and
//! symptom presence:
//!
//! 1. Population baseline sampling of demographics, vitals and history
//! 2. Disease-specific overrides from the static profile table
//! 3. Symptom presence patterns, signature symptoms and triggers
//! 4. Background noise that models symptom overlap between diseases

pub mod case;
pub mod corpus;
pub mod profile;

// Re-export key types
pub use case::CaseGenerator;
pub use corpus::{generate_corpus, shuffle_records};
pub use profile::{Band, DiseaseProfile, PROFILES, Trigger, profile};

use rand::Rng;

use crate::models::FeatureRecord;
use crate::vocabulary::Disease;

/// Generate one labelled case with the default generator settings
pub fn generate_case<R: Rng + ?Sized>(disease: Disease, rng: &mut R) -> FeatureRecord {
    CaseGenerator::default().generate_case(disease, rng)
}
