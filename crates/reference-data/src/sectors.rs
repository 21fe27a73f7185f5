use crate::countries::resolve_country;
use core_types::{CountryMultipliers, RiskLevel, Sector, SectorCategory};

/// Sector endpoints default to the US market.
pub const DEFAULT_SECTOR_COUNTRY: &str = "USA";

/// Catalogue entry for one sector category, with the constants used when no
/// live series is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorProfile {
    pub category: SectorCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Representative ETF. Services has no dedicated fund and proxies on industrials.
    pub etf_symbol: &'static str,
    /// Allocation weight before country multipliers and normalisation.
    pub base_allocation: f64,
    /// Performance in percent used when the live series is unavailable.
    pub base_performance: f64,
    /// Risk score (0-100) used when the live series is unavailable.
    pub base_risk: f64,
}

impl SectorProfile {
    pub fn to_sector(&self) -> Sector {
        Sector {
            id: self.category.slug().to_string(),
            category: self.category,
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            color: self.color.to_string(),
            risk_level: RiskLevel::from_risk_score(self.base_risk),
            etf_symbol: self.etf_symbol.to_string(),
        }
    }
}

const PROFILES: [SectorProfile; 11] = [
    SectorProfile {
        category: SectorCategory::Technology,
        name: "Technologies",
        description: "IT, Software, Hardware, Intelligence Artificielle",
        icon: "💻",
        color: "#00d4ff",
        etf_symbol: "XLK",
        base_allocation: 18.0,
        base_performance: 12.5,
        base_risk: 78.0,
    },
    SectorProfile {
        category: SectorCategory::Finance,
        name: "Finance",
        description: "Banque, Assurance, Investissement, Fintech",
        icon: "🏦",
        color: "#00ff88",
        etf_symbol: "XLF",
        base_allocation: 16.0,
        base_performance: 8.2,
        base_risk: 69.0,
    },
    SectorProfile {
        category: SectorCategory::Healthcare,
        name: "Santé",
        description: "Médical, Pharmaceutique, Biotech, Équipement médical",
        icon: "🏥",
        color: "#ff6b6b",
        etf_symbol: "XLV",
        base_allocation: 14.0,
        base_performance: 9.8,
        base_risk: 47.0,
    },
    SectorProfile {
        category: SectorCategory::Industry,
        name: "Industrie",
        description: "Manufacture, Automobile, Aéronautique, Défense",
        icon: "🏭",
        color: "#ffa500",
        etf_symbol: "XLI",
        base_allocation: 12.0,
        base_performance: 7.1,
        base_risk: 63.0,
    },
    SectorProfile {
        category: SectorCategory::Energy,
        name: "Énergie",
        description: "Pétrole, Gaz, Renouvelables, Nucléaire",
        icon: "⚡",
        color: "#ffeb3b",
        etf_symbol: "XLE",
        base_allocation: 10.0,
        base_performance: 15.3,
        base_risk: 82.0,
    },
    SectorProfile {
        category: SectorCategory::Consumer,
        name: "Consommation",
        description: "Retail, E-commerce, Biens de consommation",
        icon: "🛒",
        color: "#9c27b0",
        etf_symbol: "XLP",
        base_allocation: 8.0,
        base_performance: 6.9,
        base_risk: 58.0,
    },
    SectorProfile {
        category: SectorCategory::Communication,
        name: "Communication",
        description: "Télécom, Média, Internet, Réseaux sociaux",
        icon: "📡",
        color: "#2196f3",
        etf_symbol: "XLC",
        base_allocation: 7.0,
        base_performance: 11.2,
        base_risk: 71.0,
    },
    SectorProfile {
        category: SectorCategory::Materials,
        name: "Matériaux",
        description: "Chimie, Construction, Métaux, Mines",
        icon: "🏗️",
        color: "#795548",
        etf_symbol: "XLB",
        base_allocation: 6.0,
        base_performance: 4.8,
        base_risk: 76.0,
    },
    SectorProfile {
        category: SectorCategory::Utilities,
        name: "Services publics",
        description: "Électricité, Eau, Gaz, Infrastructure",
        icon: "🔌",
        color: "#607d8b",
        etf_symbol: "XLU",
        base_allocation: 4.0,
        base_performance: 3.2,
        base_risk: 32.0,
    },
    SectorProfile {
        category: SectorCategory::RealEstate,
        name: "Immobilier",
        description: "Construction, Gestion immobilière, REITs",
        icon: "🏠",
        color: "#4caf50",
        etf_symbol: "XLRE",
        base_allocation: 3.0,
        base_performance: 5.7,
        base_risk: 54.0,
    },
    SectorProfile {
        category: SectorCategory::Services,
        name: "Services",
        description: "Consulting, Transport, Logistique, Services aux entreprises",
        icon: "🚚",
        color: "#ff9800",
        etf_symbol: "XLI",
        base_allocation: 2.0,
        base_performance: 8.9,
        base_risk: 61.0,
    },
];

/// Catalogue entry for a category.
pub fn profile(category: SectorCategory) -> &'static SectorProfile {
    let index = match category {
        SectorCategory::Technology => 0,
        SectorCategory::Finance => 1,
        SectorCategory::Healthcare => 2,
        SectorCategory::Industry => 3,
        SectorCategory::Energy => 4,
        SectorCategory::Consumer => 5,
        SectorCategory::Communication => 6,
        SectorCategory::Materials => 7,
        SectorCategory::Utilities => 8,
        SectorCategory::RealEstate => 9,
        SectorCategory::Services => 10,
    };
    &PROFILES[index]
}

const fn m(
    tech: f64,
    finance: f64,
    healthcare: f64,
    industrials: f64,
    energy: f64,
) -> CountryMultipliers {
    CountryMultipliers { tech, finance, healthcare, industrials, energy }
}

const MULTIPLIERS: [(&str, CountryMultipliers); 11] = [
    ("FRA", m(1.0, 1.2, 1.1, 1.1, 0.9)),
    ("USA", m(1.5, 1.3, 1.2, 1.0, 1.1)),
    ("CHN", m(1.2, 1.0, 0.9, 1.4, 1.2)),
    ("DEU", m(1.1, 1.1, 1.2, 1.3, 1.0)),
    ("GBR", m(1.2, 1.4, 1.1, 0.9, 1.0)),
    ("JPN", m(1.3, 1.0, 1.1, 1.2, 0.8)),
    ("CAN", m(1.0, 1.2, 1.0, 1.1, 1.3)),
    ("AUS", m(0.9, 1.1, 1.0, 1.2, 1.4)),
    ("IND", m(1.1, 0.8, 0.9, 1.2, 1.0)),
    ("ITA", m(0.9, 1.0, 1.0, 1.1, 0.8)),
    ("BRA", m(0.7, 0.9, 0.8, 1.0, 1.2)),
];

/// Country weighting factors, or `None` if the country has no table.
pub fn multipliers_for(country: &str) -> Option<CountryMultipliers> {
    let code = resolve_country(country)?.code;
    MULTIPLIERS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, multipliers)| *multipliers)
}
