//! Postgres persistence for per-user skills, custom skills, completed steps
//! and profile documents.

use std::collections::HashSet;

use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::catalog::Skill;
use crate::profile::models::{CustomSkillRow, UserProfile, CUSTOM_SKILL_PREFIX};

/// Counts of rows touched by a skill-set replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SkillSetChange {
    pub inserted: usize,
    pub deleted: usize,
}

/// Splits a replacement into ids to insert and ids to delete, keeping the
/// order of `target` for inserts.
pub fn diff_skill_sets(existing: &[String], target: &[String]) -> (Vec<String>, Vec<String>) {
    let existing_set: HashSet<&str> = existing.iter().map(String::as_str).collect();
    let target_set: HashSet<&str> = target.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let to_insert = target
        .iter()
        .filter(|s| !existing_set.contains(s.as_str()) && seen.insert(s.as_str()))
        .cloned()
        .collect();
    let to_delete = existing
        .iter()
        .filter(|s| !target_set.contains(s.as_str()))
        .cloned()
        .collect();
    (to_insert, to_delete)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// The user's skill ids in the order they were added.
pub async fn get_user_skills(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT skill_id FROM user_skills WHERE user_id = $1 ORDER BY id")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Replaces the user's skill set with `skills`. Idempotent.
pub async fn save_user_skills(
    pool: &PgPool,
    user_id: Uuid,
    skills: &[String],
) -> Result<SkillSetChange, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: Vec<String> =
        sqlx::query_scalar("SELECT skill_id FROM user_skills WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;

    let (to_insert, to_delete) = diff_skill_sets(&existing, skills);

    for skill_id in &to_insert {
        sqlx::query(
            "INSERT INTO user_skills (user_id, skill_id) VALUES ($1, $2) ON CONFLICT (user_id, skill_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(skill_id)
        .execute(&mut *tx)
        .await?;
    }

    if !to_delete.is_empty() {
        sqlx::query("DELETE FROM user_skills WHERE user_id = $1 AND skill_id = ANY($2)")
            .bind(user_id)
            .bind(&to_delete)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        %user_id,
        inserted = to_insert.len(),
        deleted = to_delete.len(),
        "Saved user skills"
    );
    Ok(SkillSetChange {
        inserted: to_insert.len(),
        deleted: to_delete.len(),
    })
}

/// Adds skills to the user's set without removing any. Returns how many were new.
pub async fn merge_user_skills(
    pool: &PgPool,
    user_id: Uuid,
    skills: &[String],
) -> Result<usize, sqlx::Error> {
    let mut added = 0;
    for skill_id in skills {
        let result = sqlx::query(
            "INSERT INTO user_skills (user_id, skill_id) VALUES ($1, $2) ON CONFLICT (user_id, skill_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(skill_id)
        .execute(pool)
        .await?;
        added += result.rows_affected() as usize;
    }
    Ok(added)
}

pub async fn set_user_skill(
    pool: &PgPool,
    user_id: Uuid,
    skill_id: &str,
    has: bool,
) -> Result<(), sqlx::Error> {
    if has {
        sqlx::query(
            "INSERT INTO user_skills (user_id, skill_id) VALUES ($1, $2) ON CONFLICT (user_id, skill_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(skill_id)
        .execute(pool)
        .await?;
    } else {
        sqlx::query("DELETE FROM user_skills WHERE user_id = $1 AND skill_id = $2")
            .bind(user_id)
            .bind(skill_id)
            .execute(pool)
            .await?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Custom skills
// ────────────────────────────────────────────────────────────────────────────

/// Creates a user-owned skill and adds it to the user's skill set.
pub async fn add_custom_skill(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    category: &str,
) -> Result<Skill, sqlx::Error> {
    let skill = Skill::new(
        format!("{CUSTOM_SKILL_PREFIX}{}", Uuid::new_v4().simple()),
        name,
        category,
    );

    let mut tx = pool.begin().await?;
    sqlx::query("INSERT INTO custom_skills (user_id, skill_id, name, category) VALUES ($1, $2, $3, $4)")
        .bind(user_id)
        .bind(&skill.id)
        .bind(&skill.name)
        .bind(&skill.category)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO user_skills (user_id, skill_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(&skill.id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    info!(%user_id, skill_id = %skill.id, "Created custom skill");
    Ok(skill)
}

pub async fn list_custom_skills(pool: &PgPool, user_id: Uuid) -> Result<Vec<Skill>, sqlx::Error> {
    let rows: Vec<CustomSkillRow> = sqlx::query_as(
        "SELECT skill_id, name, category FROM custom_skills WHERE user_id = $1 ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Skill::from).collect())
}

// ────────────────────────────────────────────────────────────────────────────
// Step completion
// ────────────────────────────────────────────────────────────────────────────

pub async fn get_completed_steps(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT step_id FROM completed_steps WHERE user_id = $1 ORDER BY id")
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn set_step_completed(
    pool: &PgPool,
    user_id: Uuid,
    step_id: &str,
    completed: bool,
) -> Result<(), sqlx::Error> {
    if completed {
        sqlx::query(
            "INSERT INTO completed_steps (user_id, step_id) VALUES ($1, $2) ON CONFLICT (user_id, step_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(step_id)
        .execute(pool)
        .await?;
    } else {
        sqlx::query("DELETE FROM completed_steps WHERE user_id = $1 AND step_id = $2")
            .bind(user_id)
            .bind(step_id)
            .execute(pool)
            .await?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Profile document
// ────────────────────────────────────────────────────────────────────────────

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
    let row: Option<Json<UserProfile>> =
        sqlx::query_scalar("SELECT data FROM user_profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|Json(profile)| profile))
}

/// Upserts the whole profile document.
pub async fn save_profile(
    pool: &PgPool,
    user_id: Uuid,
    profile: &UserProfile,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_profiles (id, data, updated_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data, updated_at = NOW()
        "#,
    )
    .bind(user_id)
    .bind(Json(profile))
    .execute(pool)
    .await?;
    info!(%user_id, "Saved user profile");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diff_insert_and_delete() {
        let (insert, delete) = diff_skill_sets(&ids(&["js", "py", "go"]), &ids(&["py", "rust", "js"]));
        assert_eq!(insert, ids(&["rust"]));
        assert_eq!(delete, ids(&["go"]));
    }

    #[test]
    fn test_diff_same_set_is_noop() {
        let (insert, delete) = diff_skill_sets(&ids(&["js", "py"]), &ids(&["py", "js"]));
        assert!(insert.is_empty());
        assert!(delete.is_empty());
    }

    #[test]
    fn test_diff_dedups_target() {
        let (insert, delete) = diff_skill_sets(&[], &ids(&["js", "js", "py"]));
        assert_eq!(insert, ids(&["js", "py"]));
        assert!(delete.is_empty());
    }

    #[test]
    fn test_diff_clear_all() {
        let (insert, delete) = diff_skill_sets(&ids(&["js", "py"]), &[]);
        assert!(insert.is_empty());
        assert_eq!(delete, ids(&["js", "py"]));
    }
}
