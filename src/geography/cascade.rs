//! Geographic scope cascade for the study classification section.
//!
//! The scope decides which field the user edits; the others are either
//! derived from it or cleared:
//!
//! | scope          | edited       | derived             | cleared              |
//! |----------------|--------------|---------------------|----------------------|
//! | global         | -            | -                   | all                  |
//! | regional       | regions      | -                   | countries, subnational |
//! | national       | countries    | regions             | subnational          |
//! | sub_national   | subnational  | countries, regions  | -                    |
//! | site_specific  | -            | -                   | all                  |

use serde::{Deserialize, Serialize};

use super::gazetteer::Gazetteer;
use super::resolver::{collect_sorted, country_prefix, normalize_code};
use super::types::{GeographicScope, RegionCode};

/// Raw user selections, as they arrive from a form or request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeographySelection {
    pub regions: Vec<String>,
    pub countries: Vec<String>,
    pub subnational: Vec<String>,
}

/// The geographic fields of a study after the cascade has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGeography {
    pub scope: GeographicScope,
    pub regions: Vec<RegionCode>,
    pub countries: Vec<String>,
    pub subnational: Vec<String>,
}

impl StudyGeography {
    /// Derive the study geography for `scope` using the built-in dataset.
    pub fn derive(scope: GeographicScope, selection: &GeographySelection) -> Self {
        Self::derive_with(Gazetteer::cgiar(), scope, selection)
    }

    pub fn derive_with(g: &Gazetteer, scope: GeographicScope, selection: &GeographySelection) -> Self {
        match scope {
            GeographicScope::Global | GeographicScope::SiteSpecific => Self::empty(scope),
            GeographicScope::Regional => Self {
                regions: collect_sorted(&selection.regions, |r| r.parse::<RegionCode>().ok()),
                ..Self::empty(scope)
            },
            GeographicScope::National => {
                let countries = collect_sorted(&selection.countries, |cc| {
                    let cc = normalize_code(cc);
                    (!cc.is_empty()).then_some(cc)
                });
                Self {
                    regions: g.regions_for_countries(&countries),
                    countries,
                    ..Self::empty(scope)
                }
            }
            GeographicScope::SubNational => {
                let subnational = collect_sorted(&selection.subnational, |code| {
                    country_prefix(code).map(|_| normalize_code(code))
                });
                let countries = g.countries_for_subnational(&subnational);
                Self {
                    scope,
                    regions: g.regions_for_countries(&countries),
                    countries,
                    subnational,
                }
            }
        }
    }

    /// A study with the given scope and every geographic field cleared.
    pub fn empty(scope: GeographicScope) -> Self {
        Self {
            scope,
            regions: Vec::new(),
            countries: Vec::new(),
            subnational: Vec::new(),
        }
    }

    /// Switch to another scope using the built-in dataset.
    pub fn rescope(&self, scope: GeographicScope) -> Self {
        self.rescope_with(Gazetteer::cgiar(), scope)
    }

    /// Switch to another scope. A real change clears every field; keeping the
    /// scope re-derives the current selection against `g`.
    pub fn rescope_with(&self, g: &Gazetteer, scope: GeographicScope) -> Self {
        if scope == self.scope {
            return Self::derive_with(g, scope, &self.selection());
        }
        tracing::debug!(from = %self.scope, to = %scope, "geographic scope changed; clearing selections");
        Self::empty(scope)
    }

    /// The selections this geography was derived from, as strings.
    pub fn selection(&self) -> GeographySelection {
        GeographySelection {
            regions: self.regions.iter().map(|r| r.as_str().to_string()).collect(),
            countries: self.countries.clone(),
            subnational: self.subnational.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(regions: &[&str], countries: &[&str], subnational: &[&str]) -> GeographySelection {
        let owned = |v: &[&str]| -> Vec<String> { v.iter().map(|s| s.to_string()).collect() };
        GeographySelection {
            regions: owned(regions),
            countries: owned(countries),
            subnational: owned(subnational),
        }
    }

    #[test]
    fn test_global_and_site_specific_clear_everything() {
        let sel = selection(&["ESA"], &["KE"], &["KE-01"]);
        for scope in [GeographicScope::Global, GeographicScope::SiteSpecific] {
            let geo = StudyGeography::derive(scope, &sel);
            assert_eq!(geo, StudyGeography::empty(scope));
        }
    }

    #[test]
    fn test_regional_keeps_known_regions_only() {
        let sel = selection(&["wca", "ESA", "ATLANTIS", "ESA"], &["KE"], &["KE-01"]);
        let geo = StudyGeography::derive(GeographicScope::Regional, &sel);
        assert_eq!(geo.regions, vec![RegionCode::Esa, RegionCode::Wca]);
        assert!(geo.countries.is_empty());
        assert!(geo.subnational.is_empty());
    }

    #[test]
    fn test_national_auto_populates_regions() {
        let sel = selection(&["SA"], &["KE"], &["KE-01"]);
        let geo = StudyGeography::derive(GeographicScope::National, &sel);
        assert_eq!(geo.countries, vec!["KE"]);
        assert_eq!(geo.regions, vec![RegionCode::Esa]);
        assert!(geo.subnational.is_empty());
    }

    #[test]
    fn test_national_keeps_uncatalogued_country_without_region() {
        let sel = selection(&[], &["tz", "XX", "TZ", " "], &[]);
        let geo = StudyGeography::derive(GeographicScope::National, &sel);
        assert_eq!(geo.countries, vec!["TZ", "XX"]);
        assert_eq!(geo.regions, vec![RegionCode::Esa]);
    }

    #[test]
    fn test_sub_national_derives_countries_and_regions() {
        let sel = selection(&[], &[], &["KE-01", "BR-AC", "INVALID", "KE-01"]);
        let geo = StudyGeography::derive(GeographicScope::SubNational, &sel);
        assert_eq!(geo.subnational, vec!["BR-AC", "KE-01"]);
        assert_eq!(geo.countries, vec!["BR", "KE"]);
        assert_eq!(geo.regions, vec![RegionCode::Esa, RegionCode::Lac]);
    }

    #[test]
    fn test_rescope_clears_on_change() {
        let national = StudyGeography::derive(GeographicScope::National, &selection(&[], &["KE"], &[]));
        for scope in [
            GeographicScope::Global,
            GeographicScope::Regional,
            GeographicScope::SubNational,
        ] {
            assert_eq!(national.rescope(scope), StudyGeography::empty(scope));
        }
    }

    #[test]
    fn test_rescope_same_scope_is_stable() {
        let geo = StudyGeography::derive(GeographicScope::SubNational, &selection(&[], &[], &["UG-314"]));
        assert_eq!(geo.rescope(GeographicScope::SubNational), geo);
    }

    #[test]
    fn test_rescope_with_keeps_custom_gazetteer() {
        use crate::geography::data::{CountryEntry, SubnationalEntry};

        const COUNTRIES: &[CountryEntry] = &[
            CountryEntry { code: "KE", name: "Kenya", region: RegionCode::Wca },
            CountryEntry { code: "PE", name: "Peru", region: RegionCode::Lac },
        ];
        const UNITS: &[SubnationalEntry] = &[];

        let g = Gazetteer::new(COUNTRIES, UNITS);
        let national = StudyGeography::derive_with(&g, GeographicScope::National, &selection(&[], &["KE", "PE"], &[]));
        assert_eq!(national.regions, vec![RegionCode::Lac, RegionCode::Wca]);
        assert_eq!(national.rescope_with(&g, GeographicScope::National), national);
        assert_eq!(
            national.rescope_with(&g, GeographicScope::Regional),
            StudyGeography::empty(GeographicScope::Regional)
        );

        let sub = StudyGeography::derive_with(&g, GeographicScope::SubNational, &selection(&[], &[], &["KE-01"]));
        assert_eq!(sub.regions, vec![RegionCode::Wca]);
        assert_eq!(sub.rescope_with(&g, GeographicScope::SubNational), sub);
    }

    #[test]
    fn test_selection_deserializes_with_defaults() {
        let sel: GeographySelection = serde_json::from_str(r#"{"countries":["KE"]}"#).unwrap();
        assert_eq!(sel, selection(&[], &["KE"], &[]));
    }

    #[test]
    fn test_geography_serializes_camel_case() {
        let geo = StudyGeography::derive(GeographicScope::National, &selection(&[], &["KE"], &[]));
        let json = serde_json::to_value(&geo).unwrap();
        assert_eq!(json["scope"], "national");
        assert_eq!(json["regions"][0], "ESA");
        assert_eq!(json["countries"][0], "KE");
    }
}
