//! Doctor recommendations and disease guidance
//!
//! Both tables are process-wide immutable data. Lookups never fail: a disease
//! without doctors yields an empty list and a disease without guidance yields
//! [`FALLBACK_INFO`].

pub mod diseases;
pub mod doctors;

pub use diseases::{DISEASE_KNOWLEDGE, DiseaseInfo, FALLBACK_INFO};
pub use doctors::{DOCTORS, Doctor};

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

lazy_static! {
    static ref KNOWLEDGE_INDEX: FxHashMap<&'static str, &'static DiseaseInfo> = DISEASE_KNOWLEDGE
        .iter()
        .map(|(name, info)| (*name, info))
        .collect();
}

/// Doctors and guidance attached to one disease
#[derive(Debug, Clone)]
pub struct Guidance {
    pub doctors: Vec<&'static Doctor>,
    pub info: &'static DiseaseInfo,
}

/// Doctors treating a disease, sorted by descending rating
///
/// Doctors with equal ratings keep their table order.
#[must_use]
pub fn doctors_for(disease: &str) -> Vec<&'static Doctor> {
    let mut doctors: Vec<&'static Doctor> = DOCTORS.iter().filter(|d| d.treats(disease)).collect();
    doctors.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    doctors
}

/// Guidance for a disease, or the fallback record on an unknown name
#[must_use]
pub fn disease_info(disease: &str) -> &'static DiseaseInfo {
    KNOWLEDGE_INDEX.get(disease).copied().unwrap_or(&FALLBACK_INFO)
}

/// Attach doctors and guidance to a disease name
#[must_use]
pub fn enrich(disease: &str) -> Guidance {
    let doctors = doctors_for(disease);
    if doctors.is_empty() {
        log::debug!("No doctors listed for '{disease}'");
    }
    Guidance {
        doctors,
        info: disease_info(disease),
    }
}
