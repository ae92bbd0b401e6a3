use std::collections::HashMap;

use chrono::Local;
use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_database::JsonFileStore;
use shared_models::auth::User;

use crate::models::{MedicalHistoryEntry, Prediction, SymptomError};
use crate::services::{
    catalog::DiseaseCatalog,
    classifier::{DiseaseClassifier, RemoteClassifier},
    parser::{encode, parse_symptoms},
    vocabulary::disease_label,
};

pub const MEDICAL_HISTORY_FILE: &str = "medical_history.json";

type MedicalHistoryDocument = HashMap<String, Vec<MedicalHistoryEntry>>;

/// Past predictions per user, kept in `medical_history.json`.
pub struct MedicalHistory {
    store: JsonFileStore,
}

impl MedicalHistory {
    pub fn new(config: &AppConfig) -> Self {
        Self::from_store(JsonFileStore::new(config.data_file(MEDICAL_HISTORY_FILE)))
    }

    pub fn from_store(store: JsonFileStore) -> Self {
        Self { store }
    }

    pub async fn record(&self, user_id: &str, raw: &str, disease: &str) -> Result<(), SymptomError> {
        let entry = MedicalHistoryEntry {
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            symptoms: raw.to_string(),
            predicted_disease: disease.to_string(),
        };

        self.store
            .update(|document: &mut MedicalHistoryDocument| {
                document.entry(user_id.to_string()).or_default().push(entry);
            })
            .await?;

        debug!("Recorded prediction for user {}", user_id);
        Ok(())
    }

    pub async fn entries(&self, user_id: &str) -> Result<Vec<MedicalHistoryEntry>, SymptomError> {
        let mut document: MedicalHistoryDocument = self.store.load().await?;
        Ok(document.remove(user_id).unwrap_or_default())
    }
}

pub struct PredictionService {
    classifier: Box<dyn DiseaseClassifier>,
    catalog: DiseaseCatalog,
    history: MedicalHistory,
}

impl PredictionService {
    pub async fn new(config: &AppConfig) -> Result<Self, SymptomError> {
        if !config.is_prediction_configured() {
            warn!("Prediction service URL is not configured");
        }

        let catalog = DiseaseCatalog::load(config).await?;
        Ok(Self::with_parts(
            Box::new(RemoteClassifier::new(config)),
            catalog,
            JsonFileStore::new(config.data_file(MEDICAL_HISTORY_FILE)),
        ))
    }

    pub fn with_parts(
        classifier: Box<dyn DiseaseClassifier>,
        catalog: DiseaseCatalog,
        history: JsonFileStore,
    ) -> Self {
        Self {
            classifier,
            catalog,
            history: MedicalHistory::from_store(history),
        }
    }

    /// Classify a raw symptom list. An identified caller gets the result added
    /// to their medical history.
    pub async fn predict(&self, raw: &str, user: Option<&User>) -> Result<Prediction, SymptomError> {
        let symptoms = parse_symptoms(raw)?;
        let features = encode(&symptoms);

        let class = self.classifier.predict(&features).await?;
        let disease = disease_label(class).ok_or(SymptomError::UnknownClass(class))?;
        info!("Predicted {:?} from {} symptoms", disease, symptoms.len());

        if let Some(user) = user {
            self.history.record(&user.id, raw, disease).await?;
        }

        Ok(Prediction {
            symptoms,
            predicted_disease: disease.to_string(),
            recommendation: self.catalog.recommendation(disease),
        })
    }

    pub async fn history(&self, user_id: &str) -> Result<Vec<MedicalHistoryEntry>, SymptomError> {
        self.history.entries(user_id).await
    }
}
