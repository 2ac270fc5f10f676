//! Prediction API Client

use agripredict_core::{FieldParameters, PredictionResult};
use thiserror::Error;

/// Fixed endpoint of the external yield model
pub const PREDICT_URL: &str = "https://predictive-agriculture-app.onrender.com/predict";

/// Notice shown when a submission fails; the backend sleeps between uses and
/// can take ~30 s to wake
pub const COLD_START_NOTICE: &str = "System Latency: The AI engine is currently \
waking up from standby. Please wait 30 seconds and try again.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("prediction service returned status {0}")]
    Status(u16),

    #[error("malformed prediction body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Submit field parameters to the external prediction service
pub async fn predict(params: &FieldParameters) -> Result<PredictionResult, ApiError> {
    let client = reqwest::Client::new();

    let response = client.post(PREDICT_URL).json(params).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
