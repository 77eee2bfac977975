mod common;

use proptest::prelude::*;

use covmort::aggregate::{country_totals, kpi_summary, region_totals, time_series};
use covmort::model::labels::Enrichment;
use covmort::model::record::SourceRow;
use covmort::{apply, FilterOptions};

use common::{named_dataset, row};

const COUNTRIES: [&str; 4] = ["Chile", "Kenya", "Japan", "Unknown"];
const REGIONS: [&str; 3] = ["AMR", "AFR", "WPR"];
const INCOMES: [&str; 2] = ["High income", "Low income"];
const AGES: [&str; 4] = ["0_4", "5_14", "15_64", "65+"];

fn source_row() -> impl Strategy<Value = SourceRow> {
    (
        prop::option::weighted(0.9, 0..COUNTRIES.len()),
        0..REGIONS.len(),
        0..INCOMES.len(),
        2020..2024i32,
        0..15i32,
        0..AGES.len(),
        prop::option::weighted(0.9, 0u32..500),
    )
        .prop_map(|(c, reg, inc, year, month, age, deaths)| {
            row(
                c.map(|i| COUNTRIES[i]),
                REGIONS[reg],
                INCOMES[inc],
                year,
                month,
                AGES[age],
                deaths.map(f64::from),
            )
        })
}

proptest! {
    #[test]
    fn views_stay_consistent(
        rows in prop::collection::vec(source_row(), 1..60),
        region in prop::option::of(0..REGIONS.len()),
        countries in prop::sample::subsequence(COUNTRIES.to_vec(), 0..=2),
        ages in prop::sample::subsequence(AGES.to_vec(), 0..=4),
        years in (2019..2025i32, 2019..2025i32),
    ) {
        let ds = named_dataset(rows);
        let options = FilterOptions::from_dataset(&ds);
        let everything = apply(&ds, &options.default_spec());
        prop_assert_eq!(everything.len(), ds.len());
        prop_assert_eq!(everything.total_deaths(), ds.total_deaths());

        let labels = Enrichment::default();
        let age_labels: Vec<String> = ages.iter().map(|a| labels.age_group_label(a)).collect();
        let region_label = region.map(|i| labels.region_label(REGIONS[i]));
        let spec = options
            .default_spec()
            .with_region(region_label.as_deref())
            .with_countries(countries.iter().copied())
            .with_age_groups(age_labels)
            .with_year_range(years.0, years.1);

        let view = apply(&ds, &spec);
        prop_assert!(view.total_deaths() <= ds.total_deaths());
        prop_assert_eq!(&view, &apply(&ds, &spec));
        prop_assert!(view.iter().all(|r| spec.matches(r)));

        if ages.is_empty() {
            prop_assert!(view.is_empty());
        }
        if view.is_empty() {
            prop_assert!(kpi_summary(&view).is_none());
            return Ok(());
        }

        let kpi = kpi_summary(&view).unwrap();
        prop_assert_eq!(kpi.total_deaths, view.total_deaths());
        prop_assert!(kpi.recent_deaths <= kpi.total_deaths);

        let region_sum: f64 = region_totals(&view).iter().map(|r| r.deaths).sum();
        prop_assert_eq!(region_sum, kpi.total_deaths);

        let ts = time_series(&view);
        let plotted: f64 = ts.points.iter().map(|p| p.deaths).sum();
        prop_assert_eq!(plotted + ts.undated_deaths, kpi.total_deaths);
        prop_assert!(ts.points.windows(2).all(|w| (w[0].date, &w[0].age_group) < (w[1].date, &w[1].age_group)));

        prop_assert!(country_totals(&view).iter().all(|c| c.country != "Unknown"));
    }
}
