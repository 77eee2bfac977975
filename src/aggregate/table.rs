use serde::Serialize;

use crate::model::filter::FilteredView;

/// One line of the optional raw-data table shown under the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTableRow {
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Region")]
    pub region: Option<String>,
    #[serde(rename = "Income")]
    pub income_group: Option<String>,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: i32,
    #[serde(rename = "Age group")]
    pub age_group: String,
    #[serde(rename = "Deaths")]
    pub deaths: f64,
}

/// The filtered rows sorted by (year, month); rows within a month keep source order.
pub fn raw_table(view: &FilteredView<'_>) -> Vec<RawTableRow> {
    let mut rows: Vec<RawTableRow> = view
        .iter()
        .map(|r| RawTableRow {
            country: r.country.clone(),
            region: r.region_label.clone(),
            income_group: r.income_group.clone(),
            year: r.year,
            month: r.month,
            age_group: r.age_group_label.clone(),
            deaths: r.deaths,
        })
        .collect();
    rows.sort_by_key(|r| (r.year, r.month));
    rows
}
