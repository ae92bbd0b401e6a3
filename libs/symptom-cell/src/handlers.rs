use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{MedicalHistoryResponse, PredictRequest, Prediction};
use crate::services::{
    prediction::{MedicalHistory, PredictionService},
    vocabulary::SymptomVocabulary,
};

pub async fn predict(
    State(state): State<Arc<AppConfig>>,
    user: Option<Extension<User>>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<Prediction>, AppError> {
    let service = PredictionService::new(&state).await?;
    let user = user.map(|Extension(user)| user);

    let prediction = service.predict(&payload.symptoms, user.as_ref()).await?;
    Ok(Json(prediction))
}

pub async fn list_symptoms() -> Json<Value> {
    let symptoms = SymptomVocabulary::global().names();

    Json(json!({
        "count": symptoms.len(),
        "symptoms": symptoms,
    }))
}

pub async fn get_medical_history(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<User>,
) -> Result<Json<MedicalHistoryResponse>, AppError> {
    let history = MedicalHistory::new(&state).entries(&user.id).await?;

    Ok(Json(MedicalHistoryResponse {
        success: true,
        history,
    }))
}
