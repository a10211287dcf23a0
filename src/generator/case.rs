//! Sampling of a single labelled case

use std::sync::Arc;

use rand::Rng;

use crate::config::GeneratorConfig;
use crate::models::{Demographics, FeatureRecord, Gender, HistoryFlags, VitalSigns};
use crate::schema::FeatureSchema;
use crate::vocabulary::{Disease, SYMPTOMS};

use super::profile::{Band, DiseaseProfile, Trigger, profile};

/// Population-wide baseline ranges
const AGE: Band<u32> = Band::always(5, 85);
const TEMPERATURE: Band<f64> = Band::always(36.1, 37.2);
const SYSTOLIC: Band<u32> = Band::always(110, 125);
const DIASTOLIC: Band<u32> = Band::always(70, 85);
const HEART_RATE: Band<u32> = Band::always(60, 90);
const SMOKING: f64 = 0.2;
const ALCOHOL: f64 = 0.3;
const OBESITY: f64 = 0.2;
const FEMALE: f64 = 0.5;

fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.random::<f64>() < probability
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn sample_int<R: Rng + ?Sized>(rng: &mut R, band: Band<u32>) -> u32 {
    rng.random_range(band.low..=band.high)
}

fn sample_temperature<R: Rng + ?Sized>(rng: &mut R, band: Band<f64>) -> f64 {
    round_tenth(rng.random_range(band.low..=band.high))
}

/// Replace `value` with a draw from the band when it applies
fn override_int<R: Rng + ?Sized>(rng: &mut R, value: &mut u32, band: Option<Band<u32>>) {
    if let Some(band) = band {
        if band.chance >= 1.0 || chance(rng, band.chance) {
            *value = sample_int(rng, band);
        }
    }
}

/// Labelled case generator over a fixed schema
#[derive(Debug, Clone)]
pub struct CaseGenerator {
    schema: Arc<FeatureSchema>,
    noise_draws: usize,
    noise_probability: f64,
}

impl Default for CaseGenerator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl CaseGenerator {
    /// Create a generator over the canonical schema
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            schema: Arc::new(FeatureSchema::canonical()),
            noise_draws: config.noise_draws,
            noise_probability: config.noise_probability,
        }
    }

    /// Schema of generated rows
    #[must_use]
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Generate one labelled case for a disease
    pub fn generate_case<R: Rng + ?Sized>(&self, disease: Disease, rng: &mut R) -> FeatureRecord {
        let profile = profile(disease);

        let (mut demographics, mut vitals) = sample_baseline(rng);
        let mut history = sample_history(rng);
        apply_overrides(profile, rng, &mut demographics, &mut vitals, &mut history);

        let mut record = FeatureRecord::zeroed(Arc::clone(&self.schema));
        record.set_patient(&demographics, &vitals, &history);

        for &(symptom, probability) in profile.symptoms {
            let present = chance(rng, probability) || profile.signature == Some(symptom);
            record.set(symptom, if present { 1.0 } else { 0.0 });
        }
        for trigger in profile.triggers {
            if let Trigger::Symptom { name, probability } = *trigger {
                if chance(rng, probability) {
                    record.set(name, 1.0);
                }
            }
        }

        self.inject_noise(&mut record, rng);
        record.with_label(disease.name())
    }

    /// Switch on randomly chosen symptoms to model overlap between diseases
    fn inject_noise<R: Rng + ?Sized>(&self, record: &mut FeatureRecord, rng: &mut R) {
        for _ in 0..self.noise_draws {
            let symptom = SYMPTOMS[rng.random_range(0..SYMPTOMS.len())];
            if chance(rng, self.noise_probability) {
                record.set(symptom, 1.0);
            }
        }
    }
}

fn sample_baseline<R: Rng + ?Sized>(rng: &mut R) -> (Demographics, VitalSigns) {
    let demographics = Demographics {
        age: sample_int(rng, AGE),
        gender: if chance(rng, FEMALE) {
            Gender::Female
        } else {
            Gender::Male
        },
    };
    let vitals = VitalSigns {
        temperature: sample_temperature(rng, TEMPERATURE),
        systolic_bp: sample_int(rng, SYSTOLIC),
        diastolic_bp: sample_int(rng, DIASTOLIC),
        heart_rate: sample_int(rng, HEART_RATE),
    };
    (demographics, vitals)
}

fn sample_history<R: Rng + ?Sized>(rng: &mut R) -> HistoryFlags {
    HistoryFlags {
        smoking: chance(rng, SMOKING),
        alcohol: chance(rng, ALCOHOL),
        exercise_frequency: rng.random_range(0..=HistoryFlags::MAX_EXERCISE),
        obesity: chance(rng, OBESITY),
    }
}

/// Replace baseline values with the disease's overrides
fn apply_overrides<R: Rng + ?Sized>(
    profile: &DiseaseProfile,
    rng: &mut R,
    demographics: &mut Demographics,
    vitals: &mut VitalSigns,
    history: &mut HistoryFlags,
) {
    override_int(rng, &mut demographics.age, profile.age);
    if let Some(p) = profile.female_probability {
        demographics.gender = if chance(rng, p) {
            Gender::Female
        } else {
            Gender::Male
        };
    }
    if let Some(band) = profile.temperature {
        if band.chance >= 1.0 || chance(rng, band.chance) {
            vitals.temperature = sample_temperature(rng, band);
        }
    }
    override_int(rng, &mut vitals.systolic_bp, profile.systolic);
    override_int(rng, &mut vitals.diastolic_bp, profile.diastolic);
    override_int(rng, &mut vitals.heart_rate, profile.heart_rate);
    if let Some(p) = profile.smoking_probability {
        history.smoking = chance(rng, p);
    }
    if let Some(p) = profile.obesity_probability {
        history.obesity = chance(rng, p);
    }
    if let Some(band) = profile.exercise {
        history.exercise_frequency = rng.random_range(band.low..=band.high);
    }

    for trigger in profile.triggers {
        if let Trigger::SmokerHeartRate(band) = *trigger {
            if history.smoking {
                vitals.heart_rate = sample_int(rng, band);
            }
        }
    }
}
