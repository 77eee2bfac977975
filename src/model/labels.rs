use serde::{Deserialize, Serialize};

pub const AGE_GROUP_LABELS: [(&str, &str); 4] = [
    ("0_4", "0–4"),
    ("5_14", "5–14"),
    ("15_64", "15–64"),
    ("65+", "65+"),
];

pub const WHO_REGION_NAMES: [(&str, &str); 6] = [
    ("AFR", "African Region"),
    ("AMR", "Region of the Americas"),
    ("EMR", "Eastern Mediterranean Region"),
    ("EUR", "European Region"),
    ("SEAR", "South-East Asia Region"),
    ("WPR", "Western Pacific Region"),
];

/// How WHO regions are labelled in filters and region totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionLabels {
    /// Full region names, e.g. `EUR` -> `European Region`.
    #[default]
    Names,
    /// Raw WHO codes as found in the source.
    Codes,
}

impl std::str::FromStr for RegionLabels {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "names" | "pretty" => Ok(Self::Names),
            "codes" | "raw" => Ok(Self::Codes),
            other => Err(format!("unknown region label scheme '{other}' (expected names|codes)")),
        }
    }
}

/// Label enrichment applied once by the loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub region_labels: RegionLabels,
}

impl Enrichment {
    pub fn with_region_labels(region_labels: RegionLabels) -> Self {
        Self { region_labels }
    }

    /// Unknown codes pass through unchanged.
    pub fn age_group_label(&self, code: &str) -> String {
        lookup(&AGE_GROUP_LABELS, code)
    }

    pub fn region_label(&self, code: &str) -> String {
        match self.region_labels {
            RegionLabels::Names => lookup(&WHO_REGION_NAMES, code),
            RegionLabels::Codes => code.to_string(),
        }
    }
}

fn lookup(table: &[(&str, &str)], code: &str) -> String {
    table
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, v)| v.to_string())
        .unwrap_or_else(|| code.to_string())
}
