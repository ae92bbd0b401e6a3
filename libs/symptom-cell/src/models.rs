use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub symptoms: String,
}

/// Care advice kept for one disease.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub workouts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub symptoms: Vec<String>,
    pub predicted_disease: String,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistoryEntry {
    pub date: String,
    /// The symptom text as the user submitted it.
    pub symptoms: String,
    pub predicted_disease: String,
}

#[derive(Debug, Serialize)]
pub struct MedicalHistoryResponse {
    pub success: bool,
    pub history: Vec<MedicalHistoryEntry>,
}

/// Body sent to the external prediction service.
#[derive(Debug, Serialize)]
pub struct ClassifierRequest<'a> {
    pub features: &'a [u8],
}

#[derive(Debug, Deserialize)]
pub struct ClassifierResponse {
    pub class: usize,
}

#[derive(Error, Debug)]
pub enum SymptomError {
    #[error("Please enter valid symptoms")]
    EmptyInput,

    #[error("Invalid symptoms: {}", .0.join(", "))]
    InvalidSymptoms(Vec<String>),

    #[error("Prediction service failed: {0}")]
    Classifier(String),

    #[error("Prediction service returned unknown class {0}")]
    UnknownClass(usize),

    #[error("Medical history storage failed: {0}")]
    Storage(String),
}

impl From<anyhow::Error> for SymptomError {
    fn from(e: anyhow::Error) -> Self {
        SymptomError::Storage(format!("{:#}", e))
    }
}

impl From<reqwest::Error> for SymptomError {
    fn from(e: reqwest::Error) -> Self {
        SymptomError::Classifier(e.to_string())
    }
}

impl From<SymptomError> for AppError {
    fn from(e: SymptomError) -> Self {
        match e {
            SymptomError::EmptyInput | SymptomError::InvalidSymptoms(_) => {
                AppError::ValidationError(e.to_string())
            }
            SymptomError::Classifier(_) | SymptomError::UnknownClass(_) => {
                AppError::ExternalService(e.to_string())
            }
            SymptomError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
