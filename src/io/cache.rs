use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::LoadError;
use crate::io::mortality::load_mortality_csv;
use crate::model::labels::Enrichment;
use crate::model::record::Dataset;

type Slot = Arc<OnceCell<Arc<Dataset>>>;

/// Memoizes loaded datasets by source path.
///
/// Each path owns a slot; concurrent callers for the same path wait on that slot for a
/// single load, while loads of other paths proceed independently. The map lock is only
/// held to look up or insert a slot. Failed loads leave the slot empty so a later call
/// retries.
#[derive(Debug, Default)]
pub struct DatasetCache {
    enrichment: Enrichment,
    entries: Mutex<HashMap<PathBuf, Slot>>,
}

impl DatasetCache {
    pub fn new(enrichment: Enrichment) -> Self {
        Self {
            enrichment,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<Dataset>, LoadError> {
        let path = path.as_ref();
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let slot: Slot = Arc::clone(self.entries.lock().entry(key.clone()).or_default());
        if let Some(ds) = slot.get() {
            debug!(path = %key.display(), "dataset cache hit");
            return Ok(Arc::clone(ds));
        }
        let ds = slot.get_or_try_init(|| load_mortality_csv(path, &self.enrichment).map(Arc::new))?;
        Ok(Arc::clone(ds))
    }

    /// Number of successfully loaded sources.
    pub fn len(&self) -> usize {
        self.entries.lock().values().filter(|s| s.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
