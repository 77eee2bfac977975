use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use crate::dashboard::{build, DashboardOutcome, Role};
use crate::model::filter::{apply, FilterOptions, FilterSpec, ALL_INCOME_LEVELS, ALL_REGIONS};
use crate::model::record::Dataset;

/// Shared read-only handles; cloning only bumps the reference counts.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub options: Arc<FilterOptions>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let options = Arc::new(FilterOptions::from_dataset(&dataset));
        Self { dataset, options }
    }
}

/// Control values posted by the UI. Absent fields take the UI defaults; an absent
/// `age_groups` means every age group, while an explicit empty list matches nothing.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DashboardRequest {
    pub region: Option<String>,
    pub income_group: Option<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    pub age_groups: Option<Vec<String>>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    #[serde(default)]
    pub show_raw: bool,
    #[serde(default)]
    pub role: Role,
}

impl DashboardRequest {
    pub fn to_spec(&self, options: &FilterOptions) -> FilterSpec {
        let mut spec = options
            .default_spec()
            .with_region(self.region.as_deref())
            .with_income_group(self.income_group.as_deref())
            .with_countries(self.countries.iter().cloned());
        if let Some(ages) = &self.age_groups {
            spec = spec.with_age_groups(ages.iter().cloned());
        }
        let (min, max) = spec.year_range;
        spec.with_year_range(self.year_min.unwrap_or(min), self.year_max.unwrap_or(max))
    }
}

/// Filter and aggregate for one request.
pub fn evaluate(dataset: &Dataset, options: &FilterOptions, req: &DashboardRequest) -> DashboardOutcome {
    let spec = req.to_spec(options);
    let view = apply(dataset, &spec);
    debug!(rows = view.len(), ?spec, "filter applied");
    build(&view, req.role, req.show_raw)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/filters", get(filters))
        .route("/dashboard", post(dashboard))
        .with_state(state)
}

async fn healthz(State(st): State<AppState>) -> impl IntoResponse {
    Json(json!({"ok": true, "rows": st.dataset.len()}))
}

async fn filters(State(st): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "all_regions": ALL_REGIONS,
        "all_income_levels": ALL_INCOME_LEVELS,
        "options": st.options.as_ref(),
    }))
}

async fn dashboard(State(st): State<AppState>, Json(req): Json<DashboardRequest>) -> impl IntoResponse {
    let join = tokio::task::spawn_blocking(move || evaluate(&st.dataset, &st.options, &req));
    match join.await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => {
            error!(error = %e, "dashboard evaluation panicked");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("join error: {e}")})),
            )
                .into_response()
        }
    }
}
