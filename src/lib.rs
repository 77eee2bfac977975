pub mod aggregate;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod io;
pub mod math;
pub mod model;

pub use dashboard::{Dashboard, DashboardOutcome};
pub use error::{LoadError, ViewError};
pub use model::filter::{apply, FilterOptions, FilterSpec, FilteredView};
pub use model::record::{Dataset, MortalityRecord};
