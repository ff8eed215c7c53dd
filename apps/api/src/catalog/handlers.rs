use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::{group_by_category, search_skills, CareerPath, Skill, SkillGroup};
use crate::errors::AppError;
use crate::profile::store::list_custom_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillSearchQuery {
    pub user_id: Option<Uuid>,
    /// Case-insensitive substring of the skill name.
    pub q: Option<String>,
    /// Comma-separated ids to leave out, usually the ones already selected.
    pub exclude: Option<String>,
}

impl SkillSearchQuery {
    fn excluded_ids(&self) -> Vec<String> {
        self.exclude
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

async fn find_skills(state: &AppState, params: &SkillSearchQuery) -> Result<Vec<Skill>, AppError> {
    let custom = match params.user_id {
        Some(user_id) => list_custom_skills(&state.db, user_id).await?,
        None => Vec::new(),
    };
    Ok(search_skills(
        state.catalog.skills().iter().chain(&custom),
        params.q.as_deref().unwrap_or_default(),
        &params.excluded_ids(),
    ))
}

/// GET /api/v1/skills
/// Catalog skills, followed by the user's custom skills when `user_id` is given.
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchQuery>,
) -> Result<Json<Vec<Skill>>, AppError> {
    Ok(Json(find_skills(&state, &params).await?))
}

/// GET /api/v1/skills/grouped
pub async fn handle_list_skill_groups(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchQuery>,
) -> Result<Json<Vec<SkillGroup>>, AppError> {
    let skills = find_skills(&state, &params).await?;
    Ok(Json(group_by_category(skills)))
}

/// GET /api/v1/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<Vec<CareerPath>> {
    Json(state.catalog.careers().to_vec())
}
