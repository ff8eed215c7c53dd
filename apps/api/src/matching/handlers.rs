use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{CareerPath, Skill, Step};
use crate::errors::AppError;
use crate::matching::{
    analyze_gap, next_steps, owned_skill_ids, recommend, step_progress, SkillGap, StepProgress,
};
use crate::profile::handlers::UserIdQuery;
use crate::profile::store::{get_completed_steps, get_user_skills, list_custom_skills};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub extra_skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
pub struct StepsQuery {
    #[serde(default)]
    pub high_priority: bool,
}

#[derive(Debug, Serialize)]
pub struct CareerRecommendation {
    #[serde(flatten)]
    pub career: CareerPath,
    pub skill_gap: SkillGap,
    pub progress: StepProgress,
}

/// POST /api/v1/recommendations
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Json<Vec<CareerPath>> {
    Json(recommend(&state.catalog, &req.skills, &req.extra_skills))
}

/// GET /api/v1/recommendations
/// Ranks careers against the stored skill set and attaches gap and progress.
pub async fn handle_user_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CareerRecommendation>>, AppError> {
    let skills = get_user_skills(&state.db, params.user_id).await?;
    let custom = list_custom_skills(&state.db, params.user_id).await?;
    let completed = get_completed_steps(&state.db, params.user_id).await?;

    let owned = owned_skill_ids(&skills, &custom);

    let recommendations = recommend(&state.catalog, &skills, &custom)
        .into_iter()
        .map(|career| CareerRecommendation {
            skill_gap: analyze_gap(&state.catalog, &career, &owned),
            progress: step_progress(&career, &completed),
            career,
        })
        .collect();

    Ok(Json(recommendations))
}

/// GET /api/v1/careers/:career_id/steps
pub async fn handle_next_steps(
    State(state): State<AppState>,
    Path(career_id): Path<String>,
    Query(params): Query<StepsQuery>,
) -> Result<Json<Vec<Step>>, AppError> {
    let career = state
        .catalog
        .career(&career_id)
        .ok_or_else(|| AppError::NotFound(format!("Career {career_id} not found")))?;
    let steps = next_steps(career, params.high_priority)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(steps))
}
