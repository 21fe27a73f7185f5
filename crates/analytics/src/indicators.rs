use crate::error::AnalyticsError;
use core_types::IndicatorReading;
use std::collections::BTreeMap;

/// Σ(impact score × weight × confidence) / Σ(weight), rounded to two decimals.
///
/// Fails when the weights do not sum to a positive number.
pub fn overall_score(
    breakdown: &BTreeMap<String, IndicatorReading>,
) -> Result<f64, AnalyticsError> {
    if breakdown.is_empty() {
        return Err(AnalyticsError::NotEnoughData(
            "indicator breakdown is empty".to_string(),
        ));
    }

    let total_weight: f64 = breakdown.values().map(|r| r.weight).sum();
    if !(total_weight > 0.0) {
        return Err(AnalyticsError::DivisionByZero("overall_score".to_string()));
    }

    let weighted: f64 = breakdown
        .values()
        .map(|r| r.impact.score() * r.weight * r.confidence)
        .sum();

    Ok((weighted / total_weight * 100.0).round() / 100.0)
}
