use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::error::LoadError;
use crate::model::labels::Enrichment;
use crate::model::record::{Dataset, MortalityRecord, SourceRow};

/// Load the WHO monthly death-by-age CSV with columns
/// `Country,Who_region,Wb_income,Year,Month,Agegroup,Deaths`.
///
/// Blank `Deaths` become 0 and rows whose (Year, Month) is not a real month are kept
/// without a date. Any unreadable or malformed input fails the whole load.
pub fn load_mortality_csv(path: impl AsRef<Path>, enrichment: &Enrichment) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::Missing { path: path.to_path_buf() });
    }
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_mortality_csv(file, path, enrichment)?;

    let duplicates = dataset.duplicate_keys();
    if duplicates > 0 {
        warn!(
            path = %path.display(),
            duplicates,
            "duplicate (country, year, month, age group) keys; totals will double-count them"
        );
    }
    let undated = dataset.records().iter().filter(|r| r.date.is_none()).count();
    info!(path = %path.display(), rows = dataset.len(), undated, "mortality dataset loaded");
    Ok(dataset)
}

/// Parse mortality rows from any reader. `origin` is only used in error messages.
pub fn read_mortality_csv<R: Read>(reader: R, origin: &Path, enrichment: &Enrichment) -> Result<Dataset, LoadError> {
    let parse_err = |source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers().map_err(parse_err)?.clone();

    let mut records: Vec<MortalityRecord> = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(parse_err)?;
        let row: SourceRow = record.deserialize(Some(&headers)).map_err(parse_err)?;
        if let Some(d) = row.deaths {
            if !d.is_finite() || d < 0.0 {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(LoadError::InvalidDeaths { line, value: d });
            }
        }
        records.push(MortalityRecord::from_source(row, enrichment));
    }

    if records.is_empty() {
        return Err(LoadError::Empty { path: origin.to_path_buf() });
    }
    Ok(Dataset::new(records))
}
