//! Reducers over a [`FilteredView`](crate::model::filter::FilteredView). Each one takes
//! the same post-filter rows and builds the table for a single dashboard view.

pub mod geo;
pub mod heatmap;
pub mod kpi;
pub mod table;
pub mod time_series;

pub use geo::{country_totals, distinct_countries, region_totals, CountryTotal, RegionTotal};
pub use heatmap::{year_age_heatmap, Heatmap};
pub use kpi::{kpi_summary, KpiSummary};
pub use table::{raw_table, RawTableRow};
pub use time_series::{time_series, TimeSeries, TimeSeriesPoint};
