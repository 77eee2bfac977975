use std::env;
use std::path::PathBuf;

use crate::model::labels::{Enrichment, RegionLabels};

pub const DEFAULT_DATA_PATH: &str = "WHO-COVID-19-global-monthly-death-by-age-data.csv";

/// Runtime settings for the dashboard API, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub region_labels: RegionLabels,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: "0.0.0.0".to_string(),
            port: 8000,
            region_labels: RegionLabels::Names,
            log_json: false,
        }
    }
}

impl ServerConfig {
    /// `COVMORT_DATA_PATH`, `HOST`, `PORT`, `COVMORT_REGION_LABELS`, `COVMORT_LOG_JSON`.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            data_path: lookup("COVMORT_DATA_PATH").map(PathBuf::from).unwrap_or(d.data_path),
            host: lookup("HOST").unwrap_or(d.host),
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(d.port),
            region_labels: lookup("COVMORT_REGION_LABELS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(d.region_labels),
            log_json: lookup("COVMORT_LOG_JSON").and_then(|v| parse_bool(&v)).unwrap_or(d.log_json),
        }
    }

    pub fn enrichment(&self) -> Enrichment {
        Enrichment::with_region_labels(self.region_labels)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
