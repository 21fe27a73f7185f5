use reference_data::MarketStressSnapshot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StressLevel {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "MODÉRÉ")]
    Moderate,
    #[serde(rename = "EXTRÊME")]
    Extreme,
}

impl StressLevel {
    pub fn color(&self) -> &'static str {
        match self {
            StressLevel::Normal => "#00d4ff",
            StressLevel::Moderate => "#ffa500",
            StressLevel::Extreme => "#ff0000",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GaugeStatus {
    Normal,
    Elevated,
}

impl GaugeStatus {
    /// A reading at or above its threshold is elevated.
    fn from_reading(value: f64, threshold: f64) -> Self {
        if value >= threshold {
            GaugeStatus::Elevated
        } else {
            GaugeStatus::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StressAssessment {
    pub level: StressLevel,
    pub color: &'static str,
    pub vix_status: GaugeStatus,
    pub hy_status: GaugeStatus,
}

/// VIX under this reads as a calm market.
const CALM_VIX: f64 = 15.0;

pub fn assess_stress(snapshot: &MarketStressSnapshot) -> StressAssessment {
    let vix_status = GaugeStatus::from_reading(snapshot.vix, snapshot.vix_threshold);
    let hy_status = GaugeStatus::from_reading(snapshot.hy_spread, snapshot.hy_threshold);

    let level = if vix_status == GaugeStatus::Elevated || hy_status == GaugeStatus::Elevated {
        StressLevel::Extreme
    } else if snapshot.vix < CALM_VIX {
        StressLevel::Normal
    } else {
        StressLevel::Moderate
    };

    StressAssessment {
        level,
        color: level.color(),
        vix_status,
        hy_status,
    }
}
