//! Indexed view over the static geography tables.
//!
//! Built once from `'static` slices and never mutated afterwards. The
//! built-in CGIAR dataset lives behind [`Gazetteer::cgiar`]; tests and
//! embedders can build their own from other tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::data::{CountryEntry, SubnationalEntry, CGIAR_COUNTRIES, CGIAR_REGION_OPTIONS, SUBNATIONAL_UNITS};
use super::resolver::{country_prefix, normalize_code};
use super::types::{CountryOption, RegionCode, SelectOption};

static CGIAR: LazyLock<Gazetteer> =
    LazyLock::new(|| Gazetteer::new(CGIAR_COUNTRIES, SUBNATIONAL_UNITS));

pub struct Gazetteer {
    countries: &'static [CountryEntry],
    units: &'static [SubnationalEntry],
    country_to_region: HashMap<&'static str, RegionCode>,
    country_names: HashMap<&'static str, &'static str>,
    unit_names: HashMap<&'static str, &'static str>,
}

impl Gazetteer {
    pub fn new(countries: &'static [CountryEntry], units: &'static [SubnationalEntry]) -> Self {
        let country_to_region = countries.iter().map(|c| (c.code, c.region)).collect();
        let country_names = countries.iter().map(|c| (c.code, c.name)).collect();
        let unit_names = units.iter().map(|u| (u.code, u.name)).collect();
        Self {
            countries,
            units,
            country_to_region,
            country_names,
            unit_names,
        }
    }

    /// The built-in CGIAR dataset.
    pub fn cgiar() -> &'static Gazetteer {
        &CGIAR
    }

    /// Region of a single country, if catalogued. Case-insensitive.
    pub fn region_of(&self, country: &str) -> Option<RegionCode> {
        self.country_to_region.get(normalize_code(country).as_str()).copied()
    }

    pub fn country_label(&self, country: &str) -> Option<&'static str> {
        self.country_names.get(normalize_code(country).as_str()).copied()
    }

    pub fn subnational_label(&self, code: &str) -> Option<&'static str> {
        self.unit_names.get(normalize_code(code).as_str()).copied()
    }

    /// Country label, or the code itself when it is not catalogued.
    pub fn country_label_or_code(&self, country: &str) -> String {
        self.country_label(country)
            .map(str::to_string)
            .unwrap_or_else(|| country.to_string())
    }

    /// Subnational label, or the code itself when it is not catalogued.
    pub fn subnational_label_or_code(&self, code: &str) -> String {
        self.subnational_label(code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string())
    }

    /// Number of catalogued countries.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Countries ordered by label, optionally restricted to one region.
    pub fn country_options(&self, region: Option<RegionCode>) -> Vec<CountryOption> {
        let mut options: Vec<CountryOption> = self
            .countries
            .iter()
            .filter(|c| region.map_or(true, |r| c.region == r))
            .map(|c| CountryOption {
                value: c.code.to_string(),
                label: c.name.to_string(),
                region: c.region,
            })
            .collect();
        options.sort_by(|a, b| a.label.cmp(&b.label));
        options
    }

    /// Subnational units of one country, in table order.
    pub fn subnational_options(&self, country: &str) -> Vec<SelectOption> {
        let cc = normalize_code(country);
        self.units
            .iter()
            .filter(|u| country_prefix(u.code).as_deref() == Some(cc.as_str()))
            .map(|u| SelectOption {
                value: u.code.to_string(),
                label: u.name.to_string(),
            })
            .collect()
    }
}

/// The region picker catalog, in display order.
pub fn region_options() -> Vec<SelectOption> {
    CGIAR_REGION_OPTIONS
        .iter()
        .map(|r| SelectOption {
            value: r.as_str().to_string(),
            label: r.label().to_string(),
        })
        .collect()
}

/// Region label for a raw code, or the code itself when it is not a region.
pub fn region_label_or_code(code: &str) -> String {
    code.parse::<RegionCode>()
        .map(|r| r.label().to_string())
        .unwrap_or_else(|_| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const TINY_COUNTRIES: &[CountryEntry] = &[
        CountryEntry { code: "KE", name: "Kenya", region: RegionCode::Esa },
        CountryEntry { code: "PE", name: "Peru", region: RegionCode::Lac },
    ];
    const TINY_UNITS: &[SubnationalEntry] = &[SubnationalEntry { code: "PE-LIM", name: "Lima" }];

    #[test]
    fn test_every_mapped_region_is_in_catalog_and_vice_versa() {
        let mapped: HashSet<RegionCode> = CGIAR_COUNTRIES.iter().map(|c| c.region).collect();
        let catalog: HashSet<RegionCode> = CGIAR_REGION_OPTIONS.iter().copied().collect();
        assert_eq!(mapped, catalog);
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_region_catalog_has_no_duplicates() {
        let catalog: HashSet<RegionCode> = CGIAR_REGION_OPTIONS.iter().copied().collect();
        assert_eq!(catalog.len(), CGIAR_REGION_OPTIONS.len());
    }

    #[test]
    fn test_country_codes_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for c in CGIAR_COUNTRIES {
            assert_eq!(c.code.len(), 2, "{} is not two letters", c.code);
            assert!(c.code.chars().all(|ch| ch.is_ascii_uppercase()), "{}", c.code);
            assert!(seen.insert(c.code), "duplicate country {}", c.code);
        }
        assert_eq!(Gazetteer::cgiar().country_count(), CGIAR_COUNTRIES.len());
    }

    #[test]
    fn test_subnational_units_belong_to_catalogued_countries() {
        let g = Gazetteer::cgiar();
        let mut seen = HashSet::new();
        for u in SUBNATIONAL_UNITS {
            let cc = country_prefix(u.code).unwrap_or_else(|| panic!("malformed unit {}", u.code));
            assert!(g.country_label(&cc).is_some(), "{} has uncatalogued country", u.code);
            assert!(seen.insert(u.code), "duplicate unit {}", u.code);
        }
    }

    #[test]
    fn test_region_of() {
        let g = Gazetteer::cgiar();
        assert_eq!(g.region_of("KE"), Some(RegionCode::Esa));
        assert_eq!(g.region_of("br"), Some(RegionCode::Lac));
        assert_eq!(g.region_of("XX"), None);
        assert_eq!(g.region_of(""), None);
    }

    #[test]
    fn test_labels() {
        let g = Gazetteer::cgiar();
        assert_eq!(g.country_label("KE"), Some("Kenya"));
        assert_eq!(g.subnational_label("KE-01"), Some("Baringo"));
        assert_eq!(g.subnational_label("ke-30"), Some("Nairobi City"));
        assert_eq!(g.country_label_or_code("XX"), "XX");
        assert_eq!(g.subnational_label_or_code("UG-314"), "UG-314");
        assert_eq!(region_label_or_code("ESA"), "East and Southern Africa");
        assert_eq!(region_label_or_code("MARS"), "MARS");
    }

    #[test]
    fn test_region_options_order() {
        let opts = region_options();
        assert_eq!(opts.len(), 8);
        assert_eq!(opts[0].value, "ESA");
        assert_eq!(opts[0].label, "East and Southern Africa");
    }

    #[test]
    fn test_country_options_filtered_and_sorted() {
        let g = Gazetteer::cgiar();
        let noa = g.country_options(Some(RegionCode::Noa));
        let codes: Vec<&str> = noa.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(codes, vec!["CA", "US"]);

        let all = g.country_options(None);
        assert_eq!(all.len(), CGIAR_COUNTRIES.len());
        assert!(all.windows(2).all(|w| w[0].label <= w[1].label));
    }

    #[test]
    fn test_subnational_options() {
        let g = Gazetteer::cgiar();
        let ke = g.subnational_options("ke");
        assert_eq!(ke.len(), 47);
        assert_eq!(ke[0].value, "KE-01");
        assert!(g.subnational_options("UG").is_empty());
    }

    #[test]
    fn test_custom_tables() {
        let g = Gazetteer::new(TINY_COUNTRIES, TINY_UNITS);
        assert_eq!(g.regions_for_countries(&["PE", "BR"]), vec![RegionCode::Lac]);
        assert_eq!(g.subnational_label("PE-LIM"), Some("Lima"));
        assert_eq!(g.country_count(), 2);
    }
}
