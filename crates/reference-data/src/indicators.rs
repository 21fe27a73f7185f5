use core_types::{Impact, IndicatorReading, Trend};
use std::collections::BTreeMap;

/// Indicator name, value, weight, confidence, trend, impact, unit, provider.
type Row = (&'static str, f64, f64, f64, Trend, Impact, &'static str, &'static str);

const FALLBACK: [Row; 7] = [
    ("electricity", 102.3, 0.25, 0.85, Trend::Up, Impact::Positive, "TWh", "EIA"),
    ("copper", 8420.50, 0.20, 0.92, Trend::Up, Impact::Positive, "USD/t", "Alpha Vantage"),
    ("pmi", 51.2, 0.20, 0.90, Trend::Up, Impact::Positive, "index", "FRED"),
    ("oil", 73.85, 0.15, 0.90, Trend::Down, Impact::Positive, "USD/bbl", "Alpha Vantage"),
    ("natural_gas", 3.42, 0.10, 0.85, Trend::Stable, Impact::Neutral, "USD/MMBtu", "Alpha Vantage"),
    ("gold", 1945.20, 0.05, 0.90, Trend::Up, Impact::Positive, "USD/oz", "Alpha Vantage"),
    ("silver", 24.85, 0.05, 0.85, Trend::Stable, Impact::Neutral, "USD/oz", "Alpha Vantage"),
];

/// The seven-indicator table served when the upstream service is unavailable.
/// Each source is tagged "(fallback)".
pub fn fallback_breakdown() -> BTreeMap<String, IndicatorReading> {
    FALLBACK
        .iter()
        .map(|&(name, value, weight, confidence, trend, impact, unit, provider)| {
            let reading = IndicatorReading {
                current_value: value,
                weight,
                confidence,
                trend,
                impact,
                unit: unit.to_string(),
                source: format!("{provider} (fallback)"),
            };
            (name.to_string(), reading)
        })
        .collect()
}
