use core_types::{SectorRecord, SectorStats};

/// Inverted Herfindahl-Hirschman index on percent allocations.
///
/// One sector at 100% scores 0; N equal sectors score 100 * (1 - 1/N).
pub fn diversification_score(allocations: &[f64]) -> f64 {
    let hhi: f64 = allocations
        .iter()
        .map(|allocation| {
            let weight = allocation / 100.0;
            weight * weight
        })
        .sum();
    ((1.0 - hhi) * 100.0).max(0.0)
}

/// Allocation-weighted aggregates over a set of records, or `None` when empty.
pub fn sector_stats(records: &[SectorRecord]) -> Option<SectorStats> {
    if records.is_empty() {
        return None;
    }

    let allocations: Vec<f64> = records.iter().map(|r| r.metrics.allocation).collect();
    let weighted = |value: fn(&SectorRecord) -> f64| -> f64 {
        records
            .iter()
            .map(|r| value(r) * r.metrics.allocation / 100.0)
            .sum()
    };

    Some(SectorStats {
        total_allocation: allocations.iter().sum(),
        average_performance: weighted(|r| r.metrics.performance),
        average_risk: weighted(|r| r.metrics.risk_score),
        diversification_score: diversification_score(&allocations),
        sectors_count: records.len(),
    })
}
