use std::collections::HashMap;

use tracing::debug;

use shared_config::AppConfig;
use shared_database::JsonFileStore;

use crate::models::{Recommendation, SymptomError};

pub const CATALOG_FILE: &str = "disease_catalog.json";

/// Descriptions and care advice keyed by disease label.
#[derive(Debug, Clone, Default)]
pub struct DiseaseCatalog {
    entries: HashMap<String, Recommendation>,
}

impl DiseaseCatalog {
    pub fn from_entries(entries: HashMap<String, Recommendation>) -> Self {
        Self { entries }
    }

    /// A missing file gives an empty catalog.
    pub async fn load(config: &AppConfig) -> Result<Self, SymptomError> {
        let store = JsonFileStore::new(config.data_file(CATALOG_FILE));
        let entries: HashMap<String, Recommendation> = store.load().await?;
        debug!("Loaded {} disease catalog entries", entries.len());
        Ok(Self { entries })
    }

    pub fn recommendation(&self, disease: &str) -> Recommendation {
        self.entries
            .get(disease)
            .or_else(|| self.entries.get(disease.trim()))
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
