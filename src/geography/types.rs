//! Core types for the geography subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight CGIAR regions.
///
/// Variants are declared in lexical order of their codes, so the derived
/// `Ord` sorts regions the same way their code strings sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegionCode {
    #[serde(rename = "CWANA")]
    Cwana,
    #[serde(rename = "ESA")]
    Esa,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "LAC")]
    Lac,
    #[serde(rename = "NOA")]
    Noa,
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "SEAP")]
    Seap,
    #[serde(rename = "WCA")]
    Wca,
}

impl RegionCode {
    pub const ALL: [RegionCode; 8] = [
        Self::Cwana,
        Self::Esa,
        Self::Eur,
        Self::Lac,
        Self::Noa,
        Self::Sa,
        Self::Seap,
        Self::Wca,
    ];

    /// The stable code used as both value and mapping key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cwana => "CWANA",
            Self::Esa => "ESA",
            Self::Eur => "EUR",
            Self::Lac => "LAC",
            Self::Noa => "NOA",
            Self::Sa => "SA",
            Self::Seap => "SEAP",
            Self::Wca => "WCA",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cwana => "Central and West Asia and North Africa",
            Self::Esa => "East and Southern Africa",
            Self::Eur => "Europe",
            Self::Lac => "Latin America and the Caribbean",
            Self::Noa => "North America",
            Self::Sa => "South Asia",
            Self::Seap => "Southeast Asia and the Pacific",
            Self::Wca => "West and Central Africa",
        }
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionCode {
    type Err = GeographyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == code)
            .ok_or_else(|| GeographyError::UnknownRegion(s.to_string()))
    }
}

/// How far a study reaches geographically. Drives which of the
/// region / country / subnational fields are editable or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeographicScope {
    Global,
    Regional,
    National,
    SubNational,
    SiteSpecific,
}

impl GeographicScope {
    pub const ALL: [GeographicScope; 5] = [
        Self::Global,
        Self::Regional,
        Self::National,
        Self::SubNational,
        Self::SiteSpecific,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Regional => "regional",
            Self::National => "national",
            Self::SubNational => "sub_national",
            Self::SiteSpecific => "site_specific",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Regional => "Regional",
            Self::National => "National",
            Self::SubNational => "Sub-national",
            Self::SiteSpecific => "Site-specific",
        }
    }
}

impl fmt::Display for GeographicScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeographicScope {
    type Err = GeographyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_str() == value)
            .ok_or_else(|| GeographyError::UnknownScope(s.to_string()))
    }
}

/// A `{ value, label }` pair as consumed by select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A catalogued country with the region it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub value: String,
    pub label: String,
    pub region: RegionCode,
}

/// Errors raised when parsing geography values at the edges (CLI, HTTP).
///
/// The resolvers themselves never fail; unknown codes are dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeographyError {
    #[error("Unknown CGIAR region '{0}'")]
    UnknownRegion(String),
    #[error("Unknown geographic scope '{0}'. Use global, regional, national, sub_national or site_specific")]
    UnknownScope(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_ord_matches_code_order() {
        let mut by_code = RegionCode::ALL.to_vec();
        by_code.sort_by_key(|r| r.as_str());
        assert_eq!(by_code, RegionCode::ALL.to_vec());
    }

    #[test]
    fn test_region_from_str() {
        assert_eq!("ESA".parse::<RegionCode>(), Ok(RegionCode::Esa));
        assert_eq!(" seap ".parse::<RegionCode>(), Ok(RegionCode::Seap));
        assert_eq!(
            "XYZ".parse::<RegionCode>(),
            Err(GeographyError::UnknownRegion("XYZ".into()))
        );
    }

    #[test]
    fn test_region_serializes_as_code() {
        let json = serde_json::to_string(&vec![RegionCode::Esa, RegionCode::Cwana]).unwrap();
        assert_eq!(json, r#"["ESA","CWANA"]"#);
        let back: RegionCode = serde_json::from_str(r#""LAC""#).unwrap();
        assert_eq!(back, RegionCode::Lac);
    }

    #[test]
    fn test_scope_from_str() {
        assert_eq!("national".parse::<GeographicScope>(), Ok(GeographicScope::National));
        assert_eq!("Sub-national".parse::<GeographicScope>(), Ok(GeographicScope::SubNational));
        assert_eq!("SITE_SPECIFIC".parse::<GeographicScope>(), Ok(GeographicScope::SiteSpecific));
        assert!("planetary".parse::<GeographicScope>().is_err());
    }

    #[test]
    fn test_scope_serde_snake_case() {
        let json = serde_json::to_string(&GeographicScope::SubNational).unwrap();
        assert_eq!(json, r#""sub_national""#);
    }
}
