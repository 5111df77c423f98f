//! Code resolution: the shared filter → project → dedupe → sort pipeline
//! and the two resolvers built on it.
//!
//! Region flow:      normalise → look up region → drop unknown → dedupe → sort
//! Subnational flow: split on first '-' → drop malformed prefix → dedupe → sort

use std::collections::BTreeSet;

use super::gazetteer::Gazetteer;
use super::types::RegionCode;

/// Minimum length of the country prefix in a subnational code. Shorter
/// prefixes (`"K-1"`) are ambiguous and treated as malformed.
pub const MIN_PREFIX_LEN: usize = 2;

/// Map each item through `resolve`, dropping `None`, and return the distinct
/// results in ascending order.
pub fn collect_sorted<I, T, F>(items: I, resolve: F) -> Vec<T>
where
    I: IntoIterator,
    T: Ord,
    F: FnMut(I::Item) -> Option<T>,
{
    items
        .into_iter()
        .filter_map(resolve)
        .collect::<BTreeSet<T>>()
        .into_iter()
        .collect()
}

/// Canonical form of a country code: surrounding whitespace removed, ASCII
/// uppercased. `"ke "` and `"KE"` are the same country.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Extract the country prefix of a subnational code.
///
/// Splits on the first `-` only, so `"KE-01-X"` yields `"KE"`. The prefix is
/// normalised like a country code. Returns `None` when there is no `-` or the
/// trimmed prefix is shorter than [`MIN_PREFIX_LEN`].
pub fn country_prefix(code: &str) -> Option<String> {
    let (prefix, _suffix) = code.split_once('-')?;
    let prefix = prefix.trim();
    if prefix.chars().count() < MIN_PREFIX_LEN {
        return None;
    }
    Some(prefix.to_ascii_uppercase())
}

impl Gazetteer {
    /// Distinct CGIAR regions of the given countries, sorted by code.
    /// Countries missing from the table are dropped.
    pub fn regions_for_countries<S: AsRef<str>>(&self, countries: &[S]) -> Vec<RegionCode> {
        collect_sorted(countries, |cc| self.region_of(cc.as_ref()))
    }

    /// Distinct country prefixes of the given subnational codes, sorted.
    /// Malformed codes are dropped; prefixes are not checked against the
    /// country table.
    pub fn countries_for_subnational<S: AsRef<str>>(&self, codes: &[S]) -> Vec<String> {
        collect_sorted(codes, |code| country_prefix(code.as_ref()))
    }
}

/// [`Gazetteer::regions_for_countries`] over the built-in CGIAR dataset.
pub fn regions_for_countries<S: AsRef<str>>(countries: &[S]) -> Vec<RegionCode> {
    Gazetteer::cgiar().regions_for_countries(countries)
}

/// [`Gazetteer::countries_for_subnational`] over the built-in CGIAR dataset.
pub fn countries_for_subnational<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    Gazetteer::cgiar().countries_for_subnational(codes)
}
