//! Top-k ranking of classifier output

use std::cmp::Ordering;

use crate::error::{PredictError, Result};
use crate::models::PredictionResult;

/// Descending by probability, with NaN after every number
fn by_probability_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

/// Rank classes by probability and keep the best `top_k`
///
/// Ties keep the classifier's native class order. Fewer than `top_k` results
/// are returned only when there are fewer classes. Confidences are the raw
/// probabilities.
///
/// # Errors
/// Returns [`PredictError::SchemaMismatch`] when the probability vector and
/// class list have different lengths.
pub fn rank(probabilities: &[f64], classes: &[String], top_k: usize) -> Result<Vec<PredictionResult>> {
    if probabilities.len() != classes.len() {
        return Err(PredictError::SchemaMismatch(format!(
            "{} probabilities for {} classes",
            probabilities.len(),
            classes.len()
        )));
    }

    let mut order: Vec<usize> = (0..probabilities.len()).collect();
    order.sort_by(|&a, &b| by_probability_desc(probabilities[a], probabilities[b]));

    Ok(order
        .into_iter()
        .take(top_k)
        .map(|i| PredictionResult {
            disease: classes[i].clone(),
            confidence: probabilities[i],
        })
        .collect())
}
