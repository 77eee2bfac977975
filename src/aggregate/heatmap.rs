use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::filter::FilteredView;

/// Deaths by age group (rows) and year (columns).
///
/// The grid is sparse: a combination with no rows in the view is `None`, not zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub age_groups: Vec<String>,
    pub years: Vec<i32>,
    /// `cells[row][col]` for `age_groups[row]` and `years[col]`.
    pub cells: Vec<Vec<Option<f64>>>,
}

impl Heatmap {
    pub fn get(&self, age_group: &str, year: i32) -> Option<f64> {
        let row = self.age_groups.iter().position(|a| a == age_group)?;
        let col = self.years.iter().position(|y| *y == year)?;
        self.cells[row][col]
    }
}

pub fn year_age_heatmap(view: &FilteredView<'_>) -> Heatmap {
    let mut sums: BTreeMap<(&str, i32), f64> = BTreeMap::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();
    for r in view.iter() {
        *sums.entry((r.age_group_label.as_str(), r.year)).or_default() += r.deaths;
        years.insert(r.year);
    }

    let age_groups: BTreeSet<&str> = sums.keys().map(|(a, _)| *a).collect();
    let years: Vec<i32> = years.into_iter().collect();
    let cells: Vec<Vec<Option<f64>>> = age_groups
        .iter()
        .map(|a| years.iter().map(|y| sums.get(&(*a, *y)).copied()).collect())
        .collect();

    Heatmap {
        age_groups: age_groups.into_iter().map(str::to_string).collect(),
        years,
        cells,
    }
}
