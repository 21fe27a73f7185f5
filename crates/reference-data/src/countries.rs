/// A country known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-3.
    pub code: &'static str,
    /// Label used by the dashboard's country selector.
    pub name_fr: &'static str,
    pub name_en: &'static str,
}

/// The dataset served for unknown countries on the macro endpoints.
pub const DEFAULT_COUNTRY: &str = "FRA";

const COUNTRIES: [Country; 15] = [
    Country { code: "FRA", name_fr: "France", name_en: "France" },
    Country { code: "USA", name_fr: "États-Unis", name_en: "United States" },
    Country { code: "CHN", name_fr: "Chine", name_en: "China" },
    Country { code: "JPN", name_fr: "Japon", name_en: "Japan" },
    Country { code: "DEU", name_fr: "Allemagne", name_en: "Germany" },
    Country { code: "IND", name_fr: "Inde", name_en: "India" },
    Country { code: "GBR", name_fr: "Royaume-Uni", name_en: "United Kingdom" },
    Country { code: "ITA", name_fr: "Italie", name_en: "Italy" },
    Country { code: "BRA", name_fr: "Brésil", name_en: "Brazil" },
    Country { code: "CAN", name_fr: "Canada", name_en: "Canada" },
    Country { code: "RUS", name_fr: "Russie", name_en: "Russia" },
    Country { code: "KOR", name_fr: "Corée du Sud", name_en: "South Korea" },
    Country { code: "ESP", name_fr: "Espagne", name_en: "Spain" },
    Country { code: "AUS", name_fr: "Australie", name_en: "Australia" },
    Country { code: "MEX", name_fr: "Mexique", name_en: "Mexico" },
];

/// Resolves a code or a display name to a known country.
pub fn resolve_country(input: &str) -> Option<&'static Country> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    COUNTRIES.iter().find(|c| {
        c.code.to_lowercase() == needle
            || c.name_fr.to_lowercase() == needle
            || c.name_en.to_lowercase() == needle
    })
}
