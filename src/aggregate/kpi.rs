use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::model::filter::FilteredView;

/// Length of the "recent" window, counted back from the latest month in the view.
pub const RECENT_WINDOW_MONTHS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_deaths: f64,
    pub recent_deaths: f64,
    /// Latest dated month in the view; the recent window ends here.
    pub latest_month: Option<NaiveDate>,
    pub top_age_group: String,
    pub top_age_group_deaths: f64,
}

/// Headline numbers for the view. `None` for an empty view, where the top age group is
/// undefined.
///
/// Rows dated on or after `latest_month - 12 months` count as recent. The top age group
/// is the one with the most deaths; ties go to the smallest label.
pub fn kpi_summary(view: &FilteredView<'_>) -> Option<KpiSummary> {
    let mut by_age: BTreeMap<&str, f64> = BTreeMap::new();
    for r in view.iter() {
        *by_age.entry(r.age_group_label.as_str()).or_default() += r.deaths;
    }

    // BTreeMap iterates labels ascending; only a strictly larger total replaces the leader.
    let mut top: Option<(&str, f64)> = None;
    for (label, deaths) in &by_age {
        if top.map_or(true, |(_, best)| *deaths > best) {
            top = Some((*label, *deaths));
        }
    }
    let (top_age_group, top_age_group_deaths) = top?;

    let latest_month = view.iter().filter_map(|r| r.date).max();
    let recent_deaths = match latest_month.and_then(|d| d.checked_sub_months(Months::new(RECENT_WINDOW_MONTHS))) {
        Some(start) => view
            .iter()
            .filter(|r| r.date.is_some_and(|d| d >= start))
            .map(|r| r.deaths)
            .sum(),
        None => 0.0,
    };

    Some(KpiSummary {
        total_deaths: view.total_deaths(),
        recent_deaths,
        latest_month,
        top_age_group: top_age_group.to_string(),
        top_age_group_deaths,
    })
}
