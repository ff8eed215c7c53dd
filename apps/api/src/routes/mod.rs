pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::cv::handlers as cv;
use crate::export::handlers as export;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::profile_score::handlers as profile_score;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/skills", get(catalog::handle_list_skills))
        .route(
            "/api/v1/skills/grouped",
            get(catalog::handle_list_skill_groups),
        )
        .route("/api/v1/careers", get(catalog::handle_list_careers))
        .route(
            "/api/v1/careers/:career_id/steps",
            get(matching::handle_next_steps),
        )
        // Matching
        .route(
            "/api/v1/recommendations",
            get(matching::handle_user_recommendations).post(matching::handle_recommend),
        )
        // CV parsing
        .route(
            "/api/v1/cv/parse",
            post(cv::handle_parse_cv).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/v1/cv/parse-text", post(cv::handle_parse_text))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_save_profile),
        )
        .route(
            "/api/v1/profile/skills",
            get(profile::handle_get_skills).put(profile::handle_save_skills),
        )
        .route(
            "/api/v1/profile/skills/:skill_id",
            patch(profile::handle_toggle_skill),
        )
        .route(
            "/api/v1/profile/custom-skills",
            get(profile::handle_list_custom_skills).post(profile::handle_add_custom_skill),
        )
        .route("/api/v1/profile/steps", get(profile::handle_get_steps))
        .route(
            "/api/v1/profile/steps/:step_id",
            patch(profile::handle_toggle_step),
        )
        .route(
            "/api/v1/profile-score",
            post(profile_score::handle_score_profile),
        )
        // Export
        .route(
            "/api/v1/plan/:career_id/export",
            get(export::handle_export_plan),
        )
        .with_state(state)
}
