use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::filter::FilteredView;

/// Country value that cannot be placed on a map.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryTotal {
    pub country: String,
    pub deaths: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionTotal {
    /// `None` groups rows without a WHO region.
    pub region: Option<String>,
    pub deaths: f64,
}

/// Deaths per mappable country, sorted by country name. Rows without a country or with
/// country `"Unknown"` are left out so they cannot skew the map's color scale.
pub fn country_totals(view: &FilteredView<'_>) -> Vec<CountryTotal> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for r in view.iter() {
        match r.country.as_deref() {
            Some(c) if c != UNKNOWN_COUNTRY => *sums.entry(c).or_default() += r.deaths,
            _ => {}
        }
    }
    sums.into_iter()
        .map(|(country, deaths)| CountryTotal {
            country: country.to_string(),
            deaths,
        })
        .collect()
}

/// Number of distinct non-missing countries in the view, `"Unknown"` included.
pub fn distinct_countries(view: &FilteredView<'_>) -> usize {
    view.iter()
        .filter_map(|r| r.country.as_deref())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Deaths per region label, largest first; equal totals keep label order.
pub fn region_totals(view: &FilteredView<'_>) -> Vec<RegionTotal> {
    let mut sums: BTreeMap<Option<&str>, f64> = BTreeMap::new();
    for r in view.iter() {
        *sums.entry(r.region_label.as_deref()).or_default() += r.deaths;
    }
    let mut out: Vec<RegionTotal> = sums
        .into_iter()
        .map(|(region, deaths)| RegionTotal {
            region: region.map(str::to_string),
            deaths,
        })
        .collect();
    out.sort_by(|a, b| b.deaths.partial_cmp(&a.deaths).unwrap_or(Ordering::Equal));
    out
}
