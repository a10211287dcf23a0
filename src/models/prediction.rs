//! Ranked predictions and their enriched form

use serde::Serialize;

use crate::knowledge::{DiseaseInfo, Doctor, Guidance};

/// One ranked candidate disease
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub disease: String,
    /// Raw classifier probability in [0, 1], not renormalized over the top-k
    pub confidence: f64,
}

impl PredictionResult {
    /// Confidence rendered as a percentage with one decimal
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// A ranked prediction joined with doctors and care guidance
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub disease: String,
    pub confidence: f64,
    /// Doctors treating the disease, best rated first
    pub doctors: Vec<&'static Doctor>,
    pub info: &'static DiseaseInfo,
}

impl Diagnosis {
    /// Combine a ranked prediction with its knowledge lookup
    #[must_use]
    pub fn new(prediction: PredictionResult, guidance: Guidance) -> Self {
        Self {
            disease: prediction.disease,
            confidence: prediction.confidence,
            doctors: guidance.doctors,
            info: guidance.info,
        }
    }

    /// Confidence rendered as a percentage with one decimal
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_percent() {
        let result = PredictionResult {
            disease: "Influenza".to_string(),
            confidence: 0.4567,
        };
        assert_eq!(result.confidence_percent(), "45.7%");
    }
}
