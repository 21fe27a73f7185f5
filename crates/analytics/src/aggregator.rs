use crate::random::RandomSource;
use crate::series::analyze_closes;
use chrono::{DateTime, Utc};
use core_types::{
    CountryMultipliers, Grade, HistoricalPoint, PriceSeries, SectorCategory, SectorMetrics,
    SectorRecord, Trend,
};
use reference_data::{multipliers_for, profile, SectorProfile, DEFAULT_SECTOR_COUNTRY};
use std::collections::HashMap;
use std::sync::Arc;

/// Risk score is volatility scaled by this factor, capped at 100.
const RISK_PER_VOLATILITY_POINT: f64 = 2.5;
/// Number of closes kept in each record's history.
const HISTORY_LENGTH: usize = 30;
const LIVE_SOURCE: &str = "Yahoo Finance";

/// Builds the sector records for a country.
///
/// Stateless apart from the randomness source, so one instance is shared by
/// every request.
pub struct SectorAggregator {
    random: Arc<dyn RandomSource>,
}

impl SectorAggregator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Computes every sector for `country`.
    ///
    /// `live` maps ETF symbols to their fetched series. A symbol that is missing,
    /// or whose series is unusable, gets the static figures for its sector; the
    /// other sectors are unaffected. Allocations of the result sum to 100.
    pub fn aggregate(
        &self,
        country: &str,
        live: &HashMap<String, PriceSeries>,
        now: DateTime<Utc>,
    ) -> Vec<SectorRecord> {
        let multipliers = resolve_multipliers(country);

        let mut records: Vec<SectorRecord> = SectorCategory::ALL
            .iter()
            .map(|&category| {
                let profile = profile(category);
                let multiplier = sector_multiplier(category, &multipliers);
                match live.get(profile.etf_symbol) {
                    Some(series) => self
                        .live_record(profile, multiplier, series, now)
                        .unwrap_or_else(|| {
                            tracing::warn!(
                                symbol = profile.etf_symbol,
                                points = series.points.len(),
                                "Unusable price series, using static sector figures."
                            );
                            self.fallback_record(profile, multiplier, now)
                        }),
                    None => self.fallback_record(profile, multiplier, now),
                }
            })
            .collect();

        normalize_allocations(&mut records);
        records
    }

    fn live_record(
        &self,
        profile: &SectorProfile,
        multiplier: f64,
        series: &PriceSeries,
        now: DateTime<Utc>,
    ) -> Option<SectorRecord> {
        let metrics = analyze_closes(&series.closes())?;
        let performance = metrics.performance * multiplier;
        let risk = (metrics.volatility * RISK_PER_VOLATILITY_POINT).min(100.0);

        let history_start = series.points.len().saturating_sub(HISTORY_LENGTH);
        let historical_data = series.points[history_start..]
            .iter()
            .map(|point| HistoricalPoint {
                date: point.timestamp,
                price: point.close,
                volume: point.volume.unwrap_or_else(|| self.synthetic_volume()),
            })
            .collect();

        Some(SectorRecord {
            metadata: profile.to_sector(),
            metrics: SectorMetrics {
                allocation: profile.base_allocation * multiplier,
                performance,
                risk_score: risk,
                volatility: metrics.volatility,
                confidence: 85.0 + self.random.next_unit() * 10.0,
                trend: Trend::from_performance(performance),
                sharpe_ratio: metrics.sharpe_ratio,
                beta: self.beta(),
                last_updated: now,
            },
            grade: Grade::from_performance(performance),
            recommendations: recommendations(profile.name, performance, risk),
            historical_data,
            source: LIVE_SOURCE.to_string(),
        })
    }

    fn fallback_record(
        &self,
        profile: &SectorProfile,
        multiplier: f64,
        now: DateTime<Utc>,
    ) -> SectorRecord {
        let performance = profile.base_performance * multiplier;
        let risk = profile.base_risk;

        SectorRecord {
            metadata: profile.to_sector(),
            metrics: SectorMetrics {
                allocation: profile.base_allocation * multiplier,
                performance,
                risk_score: risk,
                volatility: risk / RISK_PER_VOLATILITY_POINT,
                confidence: 75.0 + self.random.next_unit() * 15.0,
                trend: Trend::from_performance(performance),
                sharpe_ratio: 0.8 + self.random.next_unit() * 1.2,
                beta: self.beta(),
                last_updated: now,
            },
            grade: Grade::from_performance(performance),
            recommendations: recommendations(profile.name, performance, risk),
            historical_data: Vec::new(),
            source: format!("{} (fallback)", profile.etf_symbol),
        }
    }

    /// No benchmark series is fetched, so beta is presentation jitter around 1.
    fn beta(&self) -> f64 {
        0.7 + self.random.next_unit() * 0.8
    }

    fn synthetic_volume(&self) -> u64 {
        500_000 + (self.random.next_unit() * 1_000_000.0) as u64
    }
}

/// Multiplier table for a country; countries without one use the US table.
pub fn resolve_multipliers(country: &str) -> CountryMultipliers {
    multipliers_for(country)
        .or_else(|| multipliers_for(DEFAULT_SECTOR_COUNTRY))
        .unwrap_or(CountryMultipliers {
            tech: 1.0,
            finance: 1.0,
            healthcare: 1.0,
            industrials: 1.0,
            energy: 1.0,
        })
}

/// The anchor families use their factor directly; the others derive a
/// fraction of a related family's factor.
pub fn sector_multiplier(category: SectorCategory, m: &CountryMultipliers) -> f64 {
    match category {
        SectorCategory::Technology => m.tech,
        SectorCategory::Finance => m.finance,
        SectorCategory::Healthcare => m.healthcare,
        SectorCategory::Industry => m.industrials,
        SectorCategory::Energy => m.energy,
        SectorCategory::Consumer => m.tech * 0.8,
        SectorCategory::Communication => m.tech * 0.9,
        SectorCategory::Materials => m.industrials * 0.8,
        SectorCategory::Utilities => m.energy * 0.7,
        SectorCategory::RealEstate => m.finance * 0.8,
        SectorCategory::Services => m.industrials * 0.9,
    }
}

/// Rescales allocations so they sum to 100. A zero total is left untouched.
fn normalize_allocations(records: &mut [SectorRecord]) {
    let total: f64 = records.iter().map(|r| r.metrics.allocation).sum();
    if total > 0.0 {
        for record in records.iter_mut() {
            record.metrics.allocation = record.metrics.allocation / total * 100.0;
        }
    }
}

/// Advisory lines for a sector, keyed on performance and risk thresholds.
pub fn recommendations(name: &str, performance: f64, risk: f64) -> Vec<String> {
    let mut lines = Vec::new();

    if performance > 10.0 {
        lines.push(format!(
            "Excellent secteur {name} avec {performance:.1}% de performance"
        ));
    } else if performance < -5.0 {
        lines.push(format!(
            "Attention: secteur {name} en baisse ({performance:.1}%)"
        ));
    }

    if risk > 80.0 {
        lines.push(format!("Secteur à haut risque ({risk:.0}) - Surveiller de près"));
    }

    if lines.is_empty() {
        lines.push(format!("Secteur {name} stable - Performance modérée"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;
    use approx::assert_relative_eq;
    use chrono::Duration;
    use core_types::PricePoint;

    fn aggregator() -> SectorAggregator {
        SectorAggregator::new(Arc::new(FixedRandom(0.5)))
    }

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn series(symbol: &str, closes: &[f64]) -> PriceSeries {
        let start = now() - Duration::days(closes.len() as i64);
        PriceSeries {
            symbol: symbol.to_string(),
            points: closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    timestamp: start + Duration::days(i as i64),
                    close,
                    volume: Some(1_000 + i as u64),
                })
                .collect(),
        }
    }

    fn total_allocation(records: &[SectorRecord]) -> f64 {
        records.iter().map(|r| r.metrics.allocation).sum()
    }

    #[test]
    fn allocations_sum_to_one_hundred_for_every_table() {
        let countries = [
            "FRA", "USA", "CHN", "DEU", "GBR", "JPN", "CAN", "AUS", "IND", "ITA", "BRA", "Atlantis",
        ];
        for country in countries {
            let records = aggregator().aggregate(country, &HashMap::new(), now());
            assert_eq!(records.len(), 11);
            assert_relative_eq!(total_allocation(&records), 100.0, epsilon = 0.1);
        }
    }

    #[test]
    fn unknown_country_uses_the_us_table() {
        let usa = aggregator().aggregate("USA", &HashMap::new(), now());
        let unknown = aggregator().aggregate("Atlantis", &HashMap::new(), now());
        assert_eq!(usa, unknown);
    }

    #[test]
    fn derived_multipliers() {
        let m = resolve_multipliers("FRA");
        assert_relative_eq!(sector_multiplier(SectorCategory::Consumer, &m), 0.8);
        assert_relative_eq!(sector_multiplier(SectorCategory::Utilities, &m), 0.9 * 0.7);
        assert_relative_eq!(sector_multiplier(SectorCategory::RealEstate, &m), 1.2 * 0.8);
        assert_relative_eq!(sector_multiplier(SectorCategory::Services, &m), 1.1 * 0.9);
    }

    #[test]
    fn fallback_record_uses_static_figures() {
        let records = aggregator().aggregate("USA", &HashMap::new(), now());
        let tech = &records[0];
        assert_eq!(tech.metadata.id, "technology");
        // 12.5 base performance times the US tech factor.
        assert_relative_eq!(tech.metrics.performance, 18.75, epsilon = 1e-9);
        assert_eq!(tech.grade, Grade::A);
        assert_eq!(tech.metrics.risk_score, 78.0);
        assert_relative_eq!(tech.metrics.volatility, 78.0 / 2.5);
        assert_relative_eq!(tech.metrics.confidence, 82.5);
        assert_eq!(tech.metrics.trend, Trend::Up);
        assert_eq!(tech.source, "XLK (fallback)");
        assert!(tech.historical_data.is_empty());
    }

    #[test]
    fn live_series_replaces_static_figures_for_that_symbol_only() {
        let mut live = HashMap::new();
        live.insert("XLK".to_string(), series("XLK", &[100.0, 100.0, 90.0]));

        let records = aggregator().aggregate("FRA", &live, now());
        let tech = &records[0];
        // -10% raw, FRA tech factor 1.0.
        assert_relative_eq!(tech.metrics.performance, -10.0, epsilon = 1e-9);
        assert_eq!(tech.grade, Grade::F);
        assert_eq!(tech.metrics.trend, Trend::Down);
        assert_relative_eq!(tech.metrics.confidence, 90.0);
        assert_eq!(tech.source, "Yahoo Finance");
        assert_eq!(tech.historical_data.len(), 3);
        assert!(tech.recommendations[0].starts_with("Attention"));

        let finance = &records[1];
        assert_eq!(finance.source, "XLF (fallback)");
        assert_relative_eq!(total_allocation(&records), 100.0, epsilon = 0.1);
    }

    #[test]
    fn live_risk_is_capped_at_one_hundred() {
        let mut live = HashMap::new();
        live.insert("XLE".to_string(), series("XLE", &[100.0, 150.0, 75.0, 150.0]));
        let records = aggregator().aggregate("USA", &live, now());
        let energy = records.iter().find(|r| r.metadata.id == "energy").unwrap();
        assert_eq!(energy.metrics.risk_score, 100.0);
    }

    #[test]
    fn history_keeps_the_last_thirty_closes() {
        let closes: Vec<f64> = (1..=40).map(|i| 100.0 + i as f64).collect();
        let mut live = HashMap::new();
        live.insert("XLV".to_string(), series("XLV", &closes));
        let records = aggregator().aggregate("USA", &live, now());
        let health = records.iter().find(|r| r.metadata.id == "healthcare").unwrap();
        assert_eq!(health.historical_data.len(), 30);
        assert_eq!(health.historical_data.last().map(|p| p.price), Some(140.0));
    }

    #[test]
    fn unusable_series_degrades_to_fallback() {
        let mut live = HashMap::new();
        live.insert("XLK".to_string(), series("XLK", &[101.0]));
        let records = aggregator().aggregate("USA", &live, now());
        assert_eq!(records[0].source, "XLK (fallback)");
    }

    #[test]
    fn recommendation_templates() {
        assert_eq!(
            recommendations("Finance", 12.34, 50.0),
            vec!["Excellent secteur Finance avec 12.3% de performance".to_string()]
        );
        assert_eq!(
            recommendations("Énergie", -6.0, 85.0),
            vec![
                "Attention: secteur Énergie en baisse (-6.0%)".to_string(),
                "Secteur à haut risque (85) - Surveiller de près".to_string(),
            ]
        );
        assert_eq!(
            recommendations("Santé", 4.0, 40.0),
            vec!["Secteur Santé stable - Performance modérée".to_string()]
        );
    }
}
