use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::labels::Enrichment;

/// One row as it appears in the WHO monthly death-by-age CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRow {
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Who_region")]
    pub who_region: Option<String>,
    #[serde(rename = "Wb_income")]
    pub income_group: Option<String>,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: i32,
    #[serde(rename = "Agegroup")]
    pub age_group: String,
    #[serde(rename = "Deaths")]
    pub deaths: Option<f64>,
}

/// A normalized mortality row with its derived fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortalityRecord {
    pub country: Option<String>,
    pub who_region: Option<String>,
    pub income_group: Option<String>,
    pub year: i32,
    pub month: i32,
    pub age_group: String,
    pub deaths: f64,
    /// First day of the month, `None` when (year, month) is not a valid date.
    pub date: Option<NaiveDate>,
    pub age_group_label: String,
    pub region_label: Option<String>,
}

impl MortalityRecord {
    pub fn from_source(row: SourceRow, enrichment: &Enrichment) -> Self {
        let date = month_start(row.year, row.month);
        let age_group_label = enrichment.age_group_label(&row.age_group);
        let region_label = row.who_region.as_deref().map(|c| enrichment.region_label(c));
        Self {
            country: row.country,
            who_region: row.who_region,
            income_group: row.income_group,
            year: row.year,
            month: row.month,
            age_group: row.age_group,
            deaths: row.deaths.unwrap_or(0.0),
            date,
            age_group_label,
            region_label,
        }
    }
}

pub fn month_start(year: i32, month: i32) -> Option<NaiveDate> {
    let month = u32::try_from(month).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// The loaded mortality table. Read-only once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<MortalityRecord>,
}

impl Dataset {
    pub fn new(records: Vec<MortalityRecord>) -> Self {
        Self { records }
    }

    pub fn from_source_rows(rows: Vec<SourceRow>, enrichment: &Enrichment) -> Self {
        Self::new(
            rows.into_iter()
                .map(|r| MortalityRecord::from_source(r, enrichment))
                .collect(),
        )
    }

    pub fn records(&self) -> &[MortalityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_deaths(&self) -> f64 {
        self.records.iter().map(|r| r.deaths).sum()
    }

    /// Number of rows repeating an earlier (country, year, month, age_group) key.
    /// Duplicates are kept; totals double-count them.
    pub fn duplicate_keys(&self) -> usize {
        let mut seen = HashSet::with_capacity(self.records.len());
        self.records
            .iter()
            .filter(|r| !seen.insert((r.country.as_deref(), r.year, r.month, r.age_group.as_str())))
            .count()
    }
}
