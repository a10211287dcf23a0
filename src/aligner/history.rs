//! Keyword rules turning history tokens into flags

use crate::models::HistoryFlags;

const SMOKER: &str = "Current smoker";
const ALCOHOL: [&str; 2] = ["Moderate", "Heavy"];
/// Exercise keywords in priority order; the first present one wins
const EXERCISE: [(&str, u8); 3] = [("Very Active", 3), ("Moderate", 2), ("Light", 1)];
const OBESITY: &str = "Obesity";

/// Map history tokens to flags by exact token membership
///
/// "Moderate" counts both as alcohol use and as moderate exercise.
#[must_use]
pub fn parse_history<S: AsRef<str>>(tokens: &[S]) -> HistoryFlags {
    let has = |keyword: &str| tokens.iter().any(|t| t.as_ref() == keyword);

    let exercise = EXERCISE
        .iter()
        .find(|(keyword, _)| has(keyword))
        .map_or(0, |&(_, level)| level);

    HistoryFlags {
        smoking: has(SMOKER),
        alcohol: ALCOHOL.iter().any(|keyword| has(keyword)),
        exercise_frequency: exercise,
        obesity: has(OBESITY),
    }
}
