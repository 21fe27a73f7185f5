use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven sector categories tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorCategory {
    Technology,
    Finance,
    Healthcare,
    Industry,
    Energy,
    Consumer,
    Communication,
    Materials,
    Utilities,
    RealEstate,
    Services,
}

impl SectorCategory {
    /// Every category, in the order sector responses are built.
    pub const ALL: [SectorCategory; 11] = [
        SectorCategory::Technology,
        SectorCategory::Finance,
        SectorCategory::Healthcare,
        SectorCategory::Industry,
        SectorCategory::Energy,
        SectorCategory::Consumer,
        SectorCategory::Communication,
        SectorCategory::Materials,
        SectorCategory::Utilities,
        SectorCategory::RealEstate,
        SectorCategory::Services,
    ];

    /// The lowercase slug used as the sector `id` in API payloads.
    pub fn slug(&self) -> &'static str {
        match self {
            SectorCategory::Technology => "technology",
            SectorCategory::Finance => "finance",
            SectorCategory::Healthcare => "healthcare",
            SectorCategory::Industry => "industry",
            SectorCategory::Energy => "energy",
            SectorCategory::Consumer => "consumer",
            SectorCategory::Communication => "communication",
            SectorCategory::Materials => "materials",
            SectorCategory::Utilities => "utilities",
            SectorCategory::RealEstate => "real_estate",
            SectorCategory::Services => "services",
        }
    }
}

impl fmt::Display for SectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a 0-100 risk score: below 50 is low, below 70 medium, otherwise high.
    pub fn from_risk_score(score: f64) -> Self {
        if score < 50.0 {
            RiskLevel::Low
        } else if score < 70.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Positive performance trends up; anything below -2% trends down.
    pub fn from_performance(performance: f64) -> Self {
        if performance > 0.0 {
            Trend::Up
        } else if performance < -2.0 {
            Trend::Down
        } else {
            Trend::Stable
        }
    }

    /// Ordinal used when sorting by trend.
    pub fn rank(&self) -> u8 {
        match self {
            Trend::Up => 3,
            Trend::Stable => 2,
            Trend::Down => 1,
        }
    }
}

/// Letter bucket derived from adjusted performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Threshold bucketing: >=15 A, >=10 B, >=5 C, >=0 D, else F.
    ///
    /// NaN performance lands in F.
    pub fn from_performance(performance: f64) -> Self {
        if performance >= 15.0 {
            Grade::A
        } else if performance >= 10.0 {
            Grade::B
        } else if performance >= 5.0 {
            Grade::C
        } else if performance >= 0.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// Ordinal used when sorting by grade (A highest).
    pub fn rank(&self) -> u8 {
        match self {
            Grade::A => 5,
            Grade::B => 4,
            Grade::C => 3,
            Grade::D => 2,
            Grade::F => 1,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Categorical macroeconomic state of a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Regime {
    Expansion,
    Recovery,
    Recession,
    Stagflation,
}

impl Regime {
    pub fn badge_color(&self) -> BadgeColor {
        match self {
            Regime::Expansion => BadgeColor::Green,
            Regime::Recovery => BadgeColor::Blue,
            Regime::Recession => BadgeColor::Red,
            Regime::Stagflation => BadgeColor::Orange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Blue,
    Red,
    Orange,
}

/// Provenance of an indicators payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataStatus {
    Live,
    Fallback,
    Error,
    NoData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub fn score(&self) -> f64 {
        match self {
            Impact::Positive => 1.0,
            Impact::Negative => 0.0,
            Impact::Neutral => 0.5,
        }
    }
}
