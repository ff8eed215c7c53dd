use std::collections::HashSet;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::CareerPath;
use crate::errors::AppError;
use crate::export::{plan_file_name, render_plan_text, PlanExport};
use crate::matching::{match_percentage, owned_skill_ids};
use crate::profile::store::{get_completed_steps, get_user_skills, list_custom_skills};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExportQuery {
    pub user_id: Uuid,
    pub user_name: Option<String>,
}

/// GET /api/v1/plan/:career_id/export
/// Downloads the user's plan for one career as a text attachment.
pub async fn handle_export_plan(
    State(state): State<AppState>,
    Path(career_id): Path<String>,
    Query(params): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let career = state
        .catalog
        .career(&career_id)
        .ok_or_else(|| AppError::NotFound(format!("Career {career_id} not found")))?;

    let skills = get_user_skills(&state.db, params.user_id).await?;
    let custom = list_custom_skills(&state.db, params.user_id).await?;
    let completed = get_completed_steps(&state.db, params.user_id).await?;

    let owned = owned_skill_ids(&skills, &custom);
    let owned_set: HashSet<&str> = owned.iter().map(String::as_str).collect();
    let career = CareerPath {
        match_percentage: match_percentage(career, &owned_set),
        ..career.clone()
    };

    let generated_on = Utc::now().date_naive();
    let body = render_plan_text(
        &state.catalog,
        &PlanExport {
            user_name: params.user_name.as_deref(),
            user_skills: &owned,
            custom_skills: &custom,
            career: &career,
            completed_steps: &completed,
            generated_on,
        },
    );
    let disposition = format!(
        "attachment; filename=\"{}\"",
        plan_file_name(&career.title, generated_on)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
