use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::math::stats::{median, mode};
use crate::model::filter::FilteredView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub age_group: String,
    pub deaths: f64,
}

/// Monthly deaths per age group plus the distribution of those bucket totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    /// Sorted by date, then age group.
    pub points: Vec<TimeSeriesPoint>,
    /// Median of the per-(month, age group) totals.
    pub median: Option<f64>,
    /// Most frequent per-(month, age group) total; omitted when there are no points.
    pub mode: Option<f64>,
    pub first_month: Option<NaiveDate>,
    pub last_month: Option<NaiveDate>,
    /// Deaths on rows without a valid month, which cannot be placed on the axis.
    pub undated_deaths: f64,
}

pub fn time_series(view: &FilteredView<'_>) -> TimeSeries {
    let mut buckets: BTreeMap<(NaiveDate, &str), f64> = BTreeMap::new();
    let mut undated_deaths = 0.0;
    for r in view.iter() {
        match r.date {
            Some(d) => *buckets.entry((d, r.age_group_label.as_str())).or_default() += r.deaths,
            None => undated_deaths += r.deaths,
        }
    }

    let points: Vec<TimeSeriesPoint> = buckets
        .into_iter()
        .map(|((date, age_group), deaths)| TimeSeriesPoint {
            date,
            age_group: age_group.to_string(),
            deaths,
        })
        .collect();

    let values: Vec<f64> = points.iter().map(|p| p.deaths).collect();
    TimeSeries {
        median: median(&values),
        mode: mode(&values),
        first_month: points.first().map(|p| p.date),
        last_month: points.last().map(|p| p.date),
        points,
        undated_deaths,
    }
}
