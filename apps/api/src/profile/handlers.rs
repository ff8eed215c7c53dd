use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Catalog, Skill};
use crate::errors::AppError;
use crate::profile::models::{
    UserProfile, CUSTOM_SKILL_DEFAULT_CATEGORY, CUSTOM_SKILL_MAX_CHARS, CUSTOM_SKILL_PREFIX,
};
use crate::profile::store::{
    add_custom_skill, get_completed_steps, get_profile, get_user_skills, list_custom_skills,
    save_profile, save_user_skills, set_step_completed, set_user_skill, SkillSetChange,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct OptionalUserQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Deserialize)]
pub struct SaveSkillsRequest {
    pub user_id: Uuid,
    pub skills: Vec<String>,
}

#[derive(Deserialize)]
pub struct SkillToggle {
    pub user_id: Uuid,
    pub has: bool,
}

#[derive(Deserialize)]
pub struct CustomSkillRequest {
    pub user_id: Uuid,
    pub name: String,
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct CompletedStepsResponse {
    pub completed_steps: Vec<String>,
}

#[derive(Deserialize)]
pub struct StepToggle {
    pub user_id: Uuid,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct SaveProfileRequest {
    pub user_id: Uuid,
    pub profile: UserProfile,
}

/// True when some id can only be resolved against the user's custom skills.
fn needs_custom_lookup(catalog: &Catalog, skill_ids: &[String]) -> bool {
    skill_ids
        .iter()
        .any(|id| catalog.skill(id).is_none() && id.starts_with(CUSTOM_SKILL_PREFIX))
}

/// Every id must be a catalog skill or one of the user's own custom skills.
fn check_skill_ids(catalog: &Catalog, skill_ids: &[String], custom: &[Skill]) -> Result<(), AppError> {
    let unknown = skill_ids
        .iter()
        .find(|id| catalog.skill(id).is_none() && !custom.iter().any(|s| &s.id == *id));
    match unknown {
        Some(id) => Err(AppError::Validation(format!("Unknown skill '{id}'"))),
        None => Ok(()),
    }
}

async fn validate_skill_ids(
    state: &AppState,
    user_id: Uuid,
    skill_ids: &[String],
) -> Result<(), AppError> {
    let custom = if needs_custom_lookup(&state.catalog, skill_ids) {
        list_custom_skills(&state.db, user_id).await?
    } else {
        Vec::new()
    };
    check_skill_ids(&state.catalog, skill_ids, &custom)
}

fn validate_step_id(catalog: &Catalog, step_id: &str) -> Result<(), AppError> {
    let known = catalog
        .careers()
        .iter()
        .any(|career| career.next_steps.iter().any(|step| step.id == step_id));
    if known {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Unknown step '{step_id}'")))
    }
}

fn validate_custom_skill_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Skill name must not be empty".to_string()));
    }
    if name.chars().count() > CUSTOM_SKILL_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "Skill name must be at most {CUSTOM_SKILL_MAX_CHARS} characters"
        )));
    }
    Ok(name)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SkillsResponse>, AppError> {
    let skills = get_user_skills(&state.db, params.user_id).await?;
    Ok(Json(SkillsResponse { skills }))
}

/// PUT /api/v1/profile/skills
pub async fn handle_save_skills(
    State(state): State<AppState>,
    Json(req): Json<SaveSkillsRequest>,
) -> Result<Json<SkillSetChange>, AppError> {
    validate_skill_ids(&state, req.user_id, &req.skills).await?;
    let change = save_user_skills(&state.db, req.user_id, &req.skills).await?;
    Ok(Json(change))
}

/// PATCH /api/v1/profile/skills/:skill_id
pub async fn handle_toggle_skill(
    State(state): State<AppState>,
    Path(skill_id): Path<String>,
    Json(req): Json<SkillToggle>,
) -> Result<StatusCode, AppError> {
    validate_skill_ids(&state, req.user_id, std::slice::from_ref(&skill_id)).await?;
    set_user_skill(&state.db, req.user_id, &skill_id, req.has).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Custom skills
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profile/custom-skills
pub async fn handle_add_custom_skill(
    State(state): State<AppState>,
    Json(req): Json<CustomSkillRequest>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    let name = validate_custom_skill_name(&req.name)?;
    let category = req
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(CUSTOM_SKILL_DEFAULT_CATEGORY);

    let skill = add_custom_skill(&state.db, req.user_id, name, category).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// GET /api/v1/profile/custom-skills
pub async fn handle_list_custom_skills(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let skills = list_custom_skills(&state.db, params.user_id).await?;
    Ok(Json(skills))
}

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile/steps
pub async fn handle_get_steps(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CompletedStepsResponse>, AppError> {
    let completed_steps = get_completed_steps(&state.db, params.user_id).await?;
    Ok(Json(CompletedStepsResponse { completed_steps }))
}

/// PATCH /api/v1/profile/steps/:step_id
pub async fn handle_toggle_step(
    State(state): State<AppState>,
    Path(step_id): Path<String>,
    Json(req): Json<StepToggle>,
) -> Result<StatusCode, AppError> {
    validate_step_id(&state.catalog, &step_id)?;
    set_step_completed(&state.db, req.user_id, &step_id, req.completed).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Profile document
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = get_profile(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", params.user_id)))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Json(req): Json<SaveProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    save_profile(&state.db, req.user_id, &req.profile).await?;
    Ok(Json(req.profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalog_and_owned_custom_skill_ids_accepted() {
        let catalog = Catalog::builtin();
        let custom = vec![Skill::new("custom-0f3a", "Ham Radio", "Custom")];
        assert!(check_skill_ids(&catalog, &ids(&["rust", "custom-0f3a"]), &custom).is_ok());
    }

    #[test]
    fn test_custom_id_not_owned_by_user_rejected() {
        let catalog = Catalog::builtin();
        let custom = vec![Skill::new("custom-0f3a", "Ham Radio", "Custom")];
        assert!(matches!(
            check_skill_ids(&catalog, &ids(&["rust", "custom-bogus"]), &custom),
            Err(AppError::Validation(_))
        ));
        assert!(check_skill_ids(&catalog, &ids(&["custom-0f3a"]), &[]).is_err());
    }

    #[test]
    fn test_unknown_skill_id_rejected() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            check_skill_ids(&catalog, &ids(&["cobol"]), &[]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_custom_lookup_only_for_custom_prefix() {
        let catalog = Catalog::builtin();
        assert!(!needs_custom_lookup(&catalog, &ids(&["rust", "cobol"])));
        assert!(needs_custom_lookup(&catalog, &ids(&["rust", "custom-0f3a"])));
    }

    #[test]
    fn test_step_ids_come_from_catalog_careers() {
        let catalog = Catalog::builtin();
        let step_id = catalog.careers()[0].next_steps[0].id.clone();
        assert!(validate_step_id(&catalog, &step_id).is_ok());
        assert!(validate_step_id(&catalog, "no-such-step").is_err());
    }

    #[test]
    fn test_custom_skill_name_trimmed() {
        assert_eq!(validate_custom_skill_name("  Ham Radio ").unwrap(), "Ham Radio");
    }

    #[test]
    fn test_blank_custom_skill_name_rejected() {
        assert!(validate_custom_skill_name("   ").is_err());
        assert!(validate_custom_skill_name(&"x".repeat(CUSTOM_SKILL_MAX_CHARS + 1)).is_err());
    }
}
