#![allow(dead_code)]

use covmort::model::labels::{Enrichment, RegionLabels};
use covmort::model::record::SourceRow;
use covmort::Dataset;

pub fn row(
    country: Option<&str>,
    region: &str,
    income: &str,
    year: i32,
    month: i32,
    age: &str,
    deaths: Option<f64>,
) -> SourceRow {
    SourceRow {
        country: country.map(str::to_string),
        who_region: Some(region.to_string()),
        income_group: Some(income.to_string()),
        year,
        month,
        age_group: age.to_string(),
        deaths,
    }
}

pub fn codes_dataset(rows: Vec<SourceRow>) -> Dataset {
    Dataset::from_source_rows(rows, &Enrichment::with_region_labels(RegionLabels::Codes))
}

pub fn named_dataset(rows: Vec<SourceRow>) -> Dataset {
    Dataset::from_source_rows(rows, &Enrichment::default())
}

/// The three-row US/FR sample: 150 deaths, all in the 65+ group.
pub fn us_fr_sample() -> Dataset {
    codes_dataset(vec![
        row(Some("US"), "AMR", "High", 2021, 1, "65+", Some(100.0)),
        row(Some("US"), "AMR", "High", 2021, 2, "65+", Some(50.0)),
        row(Some("FR"), "EUR", "High", 2021, 1, "65+", Some(0.0)),
    ])
}

/// Several countries, regions, income groups, age groups and years, with a few awkward
/// rows: an invalid month, an "Unknown" country, a missing country and a blank count.
pub fn mixed_sample() -> Dataset {
    named_dataset(vec![
        row(Some("France"), "EUR", "High income", 2020, 5, "65+", Some(10.0)),
        row(Some("France"), "EUR", "High income", 2021, 6, "15_64", Some(20.0)),
        row(Some("Brazil"), "AMR", "Upper middle income", 2021, 7, "65+", Some(30.0)),
        row(Some("India"), "SEAR", "Lower middle income", 2022, 6, "0_4", Some(40.0)),
        row(Some("India"), "SEAR", "Lower middle income", 2022, 13, "65+", Some(5.0)),
        row(Some("Unknown"), "AFR", "Low income", 2022, 1, "5_14", Some(7.0)),
        row(None, "AFR", "Low income", 2022, 2, "5_14", Some(3.0)),
        row(Some("Brazil"), "AMR", "Upper middle income", 2020, 5, "15_64", None),
    ])
}
