use crate::countries::resolve_country;
use core_types::AllocationMix;
use rust_decimal_macros::dec;

/// One slice of the allocation pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlice {
    pub name: &'static str,
    pub color: &'static str,
}

/// Chart labels in stocks, bonds, commodities, cash order.
pub const CHART_SLICES: [ChartSlice; 4] = [
    ChartSlice { name: "Actions", color: "#00d4ff" },
    ChartSlice { name: "Obligations", color: "#1a1a2e" },
    ChartSlice { name: "Or", color: "#ffd700" },
    ChartSlice { name: "Liquidités", color: "#e5e7eb" },
];

/// Strategic mix for a country, or `None` when it has no dedicated table.
pub fn allocation_for(country: &str) -> Option<AllocationMix> {
    let mix = match resolve_country(country)?.code {
        "FRA" => AllocationMix {
            stocks: dec!(65),
            bonds: dec!(25),
            commodities: dec!(5),
            cash: dec!(5),
        },
        "USA" => AllocationMix {
            stocks: dec!(70),
            bonds: dec!(20),
            commodities: dec!(7),
            cash: dec!(3),
        },
        "DEU" => AllocationMix {
            stocks: dec!(60),
            bonds: dec!(30),
            commodities: dec!(5),
            cash: dec!(5),
        },
        _ => return None,
    };
    Some(mix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_fully_invested() {
        for country in ["France", "USA", "Germany"] {
            let mix = allocation_for(country).unwrap();
            assert!(mix.validate().is_ok(), "{country} does not sum to 100");
        }
    }

    #[test]
    fn countries_without_a_table_are_unresolved() {
        assert!(allocation_for("Japon").is_none());
        assert!(allocation_for("Atlantis").is_none());
    }
}
