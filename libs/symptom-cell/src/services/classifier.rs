use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::{ClassifierRequest, ClassifierResponse, SymptomError};
use crate::services::vocabulary::DISEASES;

/// Maps an encoded symptom vector to a disease class index.
#[async_trait]
pub trait DiseaseClassifier: Send + Sync {
    async fn predict(&self, features: &[u8]) -> Result<usize, SymptomError>;
}

/// Client for the model served over HTTP at `<base_url>/predict`.
pub struct RemoteClassifier {
    base_url: String,
    http_client: Client,
}

impl RemoteClassifier {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(&config.prediction_service_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl DiseaseClassifier for RemoteClassifier {
    async fn predict(&self, features: &[u8]) -> Result<usize, SymptomError> {
        let url = format!("{}/predict", self.base_url);
        debug!("Requesting prediction from {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&ClassifierRequest { features })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Prediction service error ({}): {}", status, body);
            return Err(SymptomError::Classifier(format!("status {}", status)));
        }

        let ClassifierResponse { class } = response.json().await?;
        if class >= DISEASES.len() {
            return Err(SymptomError::UnknownClass(class));
        }

        Ok(class)
    }
}
