use std::env;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub data_dir: PathBuf,
    pub prediction_service_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            jwt_secret: env::var("PASMA_JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("PASMA_JWT_SECRET not set, using empty value");
                    String::new()
                }),
            data_dir: env::var("PASMA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("PASMA_DATA_DIR not set, using default");
                    PathBuf::from("data")
                }),
            prediction_service_url: env::var("PREDICTION_SERVICE_URL")
                .unwrap_or_else(|_| {
                    warn!("PREDICTION_SERVICE_URL not set, using default");
                    "http://localhost:5001".to_string()
                }),
            bind_addr: env::var("PASMA_BIND_ADDR")
                .unwrap_or_else(|_| {
                    warn!("PASMA_BIND_ADDR not set, using default");
                    "0.0.0.0:3000".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - authenticated endpoints will reject every token");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.jwt_secret.is_empty()
    }

    pub fn is_prediction_configured(&self) -> bool {
        !self.prediction_service_url.is_empty()
    }

    /// Location of a JSON data file inside the configured data directory.
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}
