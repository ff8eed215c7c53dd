use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::profile_score::{score_profile, ProfileScore};

#[derive(Debug, Deserialize)]
pub struct ProfileScoreRequest {
    pub url: String,
    #[serde(default)]
    pub about: String,
}

/// POST /api/v1/profile-score
pub async fn handle_score_profile(
    Json(req): Json<ProfileScoreRequest>,
) -> Result<Json<ProfileScore>, AppError> {
    if req.url.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste your LinkedIn profile URL.".to_string(),
        ));
    }
    let score = score_profile(&req.url, &req.about);
    debug!(overall = score.overall, url = score.details.url, "Scored profile");
    Ok(Json(score))
}
