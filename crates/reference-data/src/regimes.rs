use crate::countries::resolve_country;
use core_types::{CountryRegimeRecord, Regime, RegimeIndicators};

struct RegimeRow {
    code: &'static str,
    regime: Regime,
    confidence: u8,
    croissance: f64,
    inflation: f64,
    chomage: f64,
}

const fn row(
    code: &'static str,
    regime: Regime,
    confidence: u8,
    croissance: f64,
    inflation: f64,
    chomage: f64,
) -> RegimeRow {
    RegimeRow { code, regime, confidence, croissance, inflation, chomage }
}

const REGIMES: [RegimeRow; 15] = [
    row("FRA", Regime::Expansion, 85, 2.5, 2.8, 7.5),
    row("USA", Regime::Expansion, 90, 3.2, 3.1, 6.5),
    row("CHN", Regime::Recovery, 75, 5.5, 2.2, 5.5),
    row("JPN", Regime::Stagflation, 70, 1.2, 3.5, 2.8),
    row("DEU", Regime::Expansion, 82, 2.8, 2.9, 5.8),
    row("IND", Regime::Expansion, 88, 6.8, 4.2, 8.2),
    row("GBR", Regime::Recovery, 78, 2.1, 4.8, 4.2),
    row("ITA", Regime::Stagflation, 65, 1.8, 5.2, 9.1),
    row("BRA", Regime::Recovery, 72, 3.8, 6.5, 11.2),
    row("CAN", Regime::Expansion, 86, 2.9, 2.4, 5.2),
    row("RUS", Regime::Recession, 80, -1.5, 8.8, 4.8),
    row("KOR", Regime::Expansion, 86, 3.1, 2.5, 3.5),
    row("ESP", Regime::Recovery, 74, 2.4, 3.2, 12.5),
    row("AUS", Regime::Expansion, 81, 2.6, 3.0, 3.8),
    row("MEX", Regime::Recovery, 73, 3.3, 4.2, 3.5),
];

/// The macro snapshot for a country, or `None` when it is not in the table.
pub fn regime_for(country: &str) -> Option<CountryRegimeRecord> {
    let country = resolve_country(country)?;
    REGIMES.iter().find(|r| r.code == country.code).map(|r| CountryRegimeRecord {
        code: country.code.to_string(),
        name: country.name_fr.to_string(),
        regime: r.regime,
        confidence: r.confidence,
        indicators: RegimeIndicators {
            croissance: r.croissance,
            inflation: r.inflation,
            chomage: r.chomage,
        },
        badge_color: r.regime.badge_color(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::DEFAULT_COUNTRY;
    use core_types::BadgeColor;

    #[test]
    fn every_known_country_has_a_regime() {
        let codes = [
            "FRA", "USA", "CHN", "JPN", "DEU", "IND", "GBR", "ITA", "BRA", "CAN", "RUS", "KOR",
            "ESP", "AUS", "MEX",
        ];
        for code in codes {
            assert!(regime_for(code).is_some(), "missing {code}");
        }
    }

    #[test]
    fn france_record() {
        let record = regime_for(DEFAULT_COUNTRY).unwrap();
        assert_eq!(record.name, "France");
        assert_eq!(record.regime, Regime::Expansion);
        assert_eq!(record.confidence, 85);
        assert_eq!(record.indicators.chomage, 7.5);
        assert_eq!(record.badge_color, BadgeColor::Green);
    }

    #[test]
    fn japan_is_in_stagflation_with_an_orange_badge() {
        let record = regime_for("Japon").unwrap();
        assert_eq!(record.regime, Regime::Stagflation);
        assert_eq!(record.badge_color, BadgeColor::Orange);
    }
}
