//! CGIAR geography subsystem for MELIAF studies.
//!
//! Static region, country and subnational tables, the two code resolvers
//! built on them, and the geographic scope cascade used by study intake.

pub mod cascade;
pub mod data;
pub mod gazetteer;
pub mod resolver;
pub mod types;

pub use cascade::{GeographySelection, StudyGeography};
pub use gazetteer::{region_label_or_code, region_options, Gazetteer};
pub use resolver::{countries_for_subnational, regions_for_countries};
pub use types::{CountryOption, GeographicScope, GeographyError, RegionCode, SelectOption};

/// Every geographic scope with its display label.
pub fn scope_options() -> Vec<SelectOption> {
    GeographicScope::ALL
        .iter()
        .map(|s| SelectOption {
            value: s.as_str().to_string(),
            label: s.label().to_string(),
        })
        .collect()
}
