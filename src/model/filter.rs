use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::record::{Dataset, MortalityRecord};

/// UI sentinel meaning "no region restriction".
pub const ALL_REGIONS: &str = "All regions";
/// UI sentinel meaning "no income restriction".
pub const ALL_INCOME_LEVELS: &str = "All income levels";

/// The constraints chosen by the user for one evaluation.
///
/// An empty `countries` set means "any country" while an empty `age_groups` set matches
/// nothing: callers are expected to default `age_groups` to every label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub region: Option<String>,
    pub income_group: Option<String>,
    pub countries: BTreeSet<String>,
    pub age_groups: BTreeSet<String>,
    /// Inclusive (min, max) on `year`.
    pub year_range: (i32, i32),
}

impl FilterSpec {
    /// Maps a single-select value to a predicate, treating `sentinel` as "unrestricted".
    pub fn single_choice(value: Option<&str>, sentinel: &str) -> Option<String> {
        match value.map(str::trim) {
            None | Some("") => None,
            Some(v) if v == sentinel => None,
            Some(v) => Some(v.to_string()),
        }
    }

    pub fn with_region(mut self, region: Option<&str>) -> Self {
        self.region = Self::single_choice(region, ALL_REGIONS);
        self
    }

    pub fn with_income_group(mut self, income_group: Option<&str>) -> Self {
        self.income_group = Self::single_choice(income_group, ALL_INCOME_LEVELS);
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_age_groups<I, S>(mut self, age_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.age_groups = age_groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = (min, max);
        self
    }

    pub fn matches(&self, r: &MortalityRecord) -> bool {
        if let Some(region) = &self.region {
            if r.region_label.as_deref() != Some(region.as_str()) {
                return false;
            }
        }
        if let Some(income) = &self.income_group {
            if r.income_group.as_deref() != Some(income.as_str()) {
                return false;
            }
        }
        if !self.countries.is_empty() {
            match &r.country {
                Some(c) if self.countries.contains(c) => {}
                _ => return false,
            }
        }
        if !self.age_groups.contains(&r.age_group_label) {
            return false;
        }
        let (min, max) = self.year_range;
        r.year >= min && r.year <= max
    }
}

/// The rows of a dataset that pass a [`FilterSpec`], in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a MortalityRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn from_rows(rows: Vec<&'a MortalityRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[&'a MortalityRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MortalityRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// An empty view is a valid outcome; reducers must not be called on it.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_deaths(&self) -> f64 {
        self.iter().map(|r| r.deaths).sum()
    }
}

/// Conjunctive filter over the dataset. Never fails; an empty view is a normal result.
pub fn apply<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> FilteredView<'a> {
    FilteredView::from_rows(dataset.records().iter().filter(|r| spec.matches(r)).collect())
}

/// The choices a UI offers for each control, derived from the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub income_groups: Vec<String>,
    pub countries: Vec<String>,
    pub age_groups: Vec<String>,
    pub year_bounds: Option<(i32, i32)>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut regions = BTreeSet::new();
        let mut income_groups = BTreeSet::new();
        let mut countries = BTreeSet::new();
        let mut age_groups = BTreeSet::new();
        let mut year_bounds: Option<(i32, i32)> = None;

        for r in dataset.records() {
            if let Some(v) = &r.region_label {
                regions.insert(v.clone());
            }
            if let Some(v) = &r.income_group {
                income_groups.insert(v.clone());
            }
            if let Some(v) = &r.country {
                countries.insert(v.clone());
            }
            age_groups.insert(r.age_group_label.clone());
            year_bounds = Some(match year_bounds {
                None => (r.year, r.year),
                Some((lo, hi)) => (lo.min(r.year), hi.max(r.year)),
            });
        }

        Self {
            regions: regions.into_iter().collect(),
            income_groups: income_groups.into_iter().collect(),
            countries: countries.into_iter().collect(),
            age_groups: age_groups.into_iter().collect(),
            year_bounds,
        }
    }

    /// The initial control state: everything selected, full year range.
    pub fn default_spec(&self) -> FilterSpec {
        let (min, max) = self.year_bounds.unwrap_or((i32::MIN, i32::MAX));
        FilterSpec {
            region: None,
            income_group: None,
            countries: BTreeSet::new(),
            age_groups: self.age_groups.iter().cloned().collect(),
            year_range: (min, max),
        }
    }
}
