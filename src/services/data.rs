use crate::models::{CalendarEntry, Camper, Dataset, Search, SearchMode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading input collections
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Missing {collection} collection for {mode}")]
    MissingCollection {
        collection: &'static str,
        mode: SearchMode,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Source of the searches, campers and calendars for each API version
pub trait DataProvider: Send + Sync {
    fn searches(&self, mode: SearchMode) -> Result<Vec<Search>, DataError>;

    fn campers(&self, mode: SearchMode) -> Result<Vec<Camper>, DataError>;

    /// `Ok(None)` means no calendar data exists, which is valid
    fn calendars(&self, mode: SearchMode) -> Result<Option<Vec<CalendarEntry>>, DataError>;

    /// Load everything a search in `mode` needs
    ///
    /// Calendars are only loaded for modes that check availability.
    fn dataset(&self, mode: SearchMode) -> Result<Arc<Dataset>, DataError> {
        let searches = self.searches(mode)?;
        let campers = self.campers(mode)?;
        let calendars = if mode.checks_availability() {
            self.calendars(mode)?
        } else {
            None
        };

        Ok(Arc::new(Dataset { searches, campers, calendars }))
    }
}

/// Provider reading `{root}/v{N}/{collection}.json` files
///
/// Each file is a JSON object wrapping its array under the collection name,
/// e.g. `{"campers": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    root: PathBuf,
}

impl JsonFileProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn collection_path(&self, mode: SearchMode, collection: &str) -> PathBuf {
        self.root
            .join(format!("v{}", mode.version()))
            .join(format!("{}.json", collection))
    }

    /// Read one collection, `Ok(None)` if its file does not exist
    fn read_collection<T: DeserializeOwned>(
        &self,
        mode: SearchMode,
        collection: &'static str,
    ) -> Result<Option<Vec<T>>, DataError> {
        let path = self.collection_path(mode, collection);

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No {} file at {}", collection, path.display());
                return Ok(None);
            }
            Err(source) => return Err(DataError::Io { path, source }),
        };

        let mut document: Value = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| DataError::Parse { path: path.clone(), source })?;

        let items = document
            .get_mut(collection)
            .map(Value::take)
            .ok_or_else(|| {
                DataError::InvalidFormat(format!(
                    "{} has no \"{}\" array",
                    path.display(),
                    collection
                ))
            })?;

        let items: Vec<T> = serde_json::from_value(items)
            .map_err(|source| DataError::Parse { path: path.clone(), source })?;

        tracing::debug!("Loaded {} {} from {}", items.len(), collection, path.display());

        Ok(Some(items))
    }

    fn require<T>(
        items: Option<Vec<T>>,
        collection: &'static str,
        mode: SearchMode,
    ) -> Result<Vec<T>, DataError> {
        items.ok_or(DataError::MissingCollection { collection, mode })
    }
}

impl DataProvider for JsonFileProvider {
    fn searches(&self, mode: SearchMode) -> Result<Vec<Search>, DataError> {
        Self::require(self.read_collection(mode, "searches")?, "searches", mode)
    }

    fn campers(&self, mode: SearchMode) -> Result<Vec<Camper>, DataError> {
        Self::require(self.read_collection(mode, "campers")?, "campers", mode)
    }

    fn calendars(&self, mode: SearchMode) -> Result<Option<Vec<CalendarEntry>>, DataError> {
        self.read_collection(mode, "calendars")
    }
}

/// Provider backed by datasets held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    datasets: HashMap<SearchMode, Dataset>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(mut self, mode: SearchMode, dataset: Dataset) -> Self {
        self.datasets.insert(mode, dataset);
        self
    }

    fn get(&self, mode: SearchMode, collection: &'static str) -> Result<&Dataset, DataError> {
        self.datasets
            .get(&mode)
            .ok_or(DataError::MissingCollection { collection, mode })
    }
}

impl DataProvider for InMemoryProvider {
    fn searches(&self, mode: SearchMode) -> Result<Vec<Search>, DataError> {
        Ok(self.get(mode, "searches")?.searches.clone())
    }

    fn campers(&self, mode: SearchMode) -> Result<Vec<Camper>, DataError> {
        Ok(self.get(mode, "campers")?.campers.clone())
    }

    fn calendars(&self, mode: SearchMode) -> Result<Option<Vec<CalendarEntry>>, DataError> {
        Ok(self.get(mode, "calendars")?.calendars.clone())
    }
}
