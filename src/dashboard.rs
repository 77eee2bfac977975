use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::{
    country_totals, distinct_countries, kpi_summary, raw_table, region_totals, time_series, year_age_heatmap,
    CountryTotal, Heatmap, KpiSummary, RawTableRow, RegionTotal, TimeSeries,
};
use crate::error::ViewError;
use crate::model::filter::FilteredView;

pub const EMPTY_SELECTION_MESSAGE: &str = "No data for the current filter selection. Try widening your filters.";

/// Who the dashboard is being viewed as; echoed in the caption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    WhoRegionalAnalyst,
    NationalHealthMinister,
    HospitalSystemPlanner,
    GeneralPolicyAnalyst,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::WhoRegionalAnalyst => "WHO regional analyst",
            Role::NationalHealthMinister => "National health minister",
            Role::HospitalSystemPlanner => "Hospital system planner",
            Role::GeneralPolicyAnalyst => "General policy analyst",
        }
    }
}

/// A view that either rendered or failed on its own without taking the page down.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready { data: T },
    Unavailable { message: String },
}

impl<T> Panel<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Panel::Ready { data } => Some(data),
            Panel::Unavailable { .. } => None,
        }
    }
}

impl<T> From<Result<T, ViewError>> for Panel<T> {
    fn from(value: Result<T, ViewError>) -> Self {
        match value {
            Ok(data) => Panel::Ready { data },
            Err(e) => {
                warn!(error = %e, "dashboard view unavailable");
                Panel::Unavailable { message: e.to_string() }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub role: Role,
    pub role_label: &'static str,
    pub kpi: KpiSummary,
    pub time_series: TimeSeries,
    pub heatmap: Heatmap,
    pub map: Panel<Vec<CountryTotal>>,
    pub regions: Vec<RegionTotal>,
    pub filtered_rows: usize,
    pub distinct_countries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_table: Option<Vec<RawTableRow>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardOutcome {
    /// Nothing matched; no view was computed.
    Empty { message: String },
    Ready(Box<Dashboard>),
}

impl DashboardOutcome {
    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            DashboardOutcome::Ready(d) => Some(d),
            DashboardOutcome::Empty { .. } => None,
        }
    }
}

/// Country totals for the choropleth; fails when no row can be placed on the map.
pub fn country_map(view: &FilteredView<'_>) -> Result<Vec<CountryTotal>, ViewError> {
    let totals = country_totals(view);
    if totals.is_empty() {
        return Err(ViewError::NoCountryData);
    }
    Ok(totals)
}

/// Run every reducer over `view`. An empty view short-circuits before any reducer runs.
pub fn build(view: &FilteredView<'_>, role: Role, show_raw: bool) -> DashboardOutcome {
    let kpi = match kpi_summary(view) {
        Some(k) => k,
        None => {
            return DashboardOutcome::Empty {
                message: EMPTY_SELECTION_MESSAGE.to_string(),
            }
        }
    };

    DashboardOutcome::Ready(Box::new(Dashboard {
        role,
        role_label: role.label(),
        kpi,
        time_series: time_series(view),
        heatmap: year_age_heatmap(view),
        map: country_map(view).into(),
        regions: region_totals(view),
        filtered_rows: view.len(),
        distinct_countries: distinct_countries(view),
        raw_table: show_raw.then(|| raw_table(view)),
    }))
}
