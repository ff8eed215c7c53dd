use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::Skill;
use crate::cv::{parse_cv, ParsedCv, UploadedFile};
use crate::errors::AppError;
use crate::profile::handlers::OptionalUserQuery;
use crate::profile::store::{list_custom_skills, merge_user_skills};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct CvUploadResponse {
    #[serde(flatten)]
    pub parsed: ParsedCv,
    /// Skills newly added to the user's set, present only when a user was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_skills: Option<usize>,
}

async fn custom_skills_for(state: &AppState, user_id: Option<Uuid>) -> Result<Vec<Skill>, AppError> {
    match user_id {
        Some(user_id) => Ok(list_custom_skills(&state.db, user_id).await?),
        None => Ok(Vec::new()),
    }
}

async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok(UploadedFile::new(file_name, content_type, bytes));
    }
    Err(AppError::Validation(format!("Missing '{FILE_FIELD}' field")))
}

/// POST /api/v1/cv/parse
/// With `user_id`, the user's custom skills are searched too and every
/// extracted skill is merged into the stored set.
pub async fn handle_parse_cv(
    State(state): State<AppState>,
    Query(params): Query<OptionalUserQuery>,
    mut multipart: Multipart,
) -> Result<Json<CvUploadResponse>, AppError> {
    let file = read_file_field(&mut multipart).await?;

    let custom = custom_skills_for(&state, params.user_id).await?;
    let parsed = parse_cv(&file, &state.catalog, &custom).await?;
    info!(
        file_name = %file.file_name,
        skills = parsed.skills.len(),
        confidence = parsed.confidence,
        "Parsed CV upload"
    );

    let merged_skills = match params.user_id {
        Some(user_id) => Some(merge_user_skills(&state.db, user_id, &parsed.skills).await?),
        None => None,
    };

    Ok(Json(CvUploadResponse {
        parsed,
        merged_skills,
    }))
}

/// POST /api/v1/cv/parse-text
/// With `user_id`, the user's custom skills are searched too. Nothing is stored.
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Query(params): Query<OptionalUserQuery>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParsedCv>, AppError> {
    let custom = custom_skills_for(&state, params.user_id).await?;
    let parsed = parse_cv(&req.text, &state.catalog, &custom).await?;
    Ok(Json(parsed))
}
