use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::catalog::Skill;

/// Prefix for ids of skills users create themselves.
pub const CUSTOM_SKILL_PREFIX: &str = "custom-";
pub const CUSTOM_SKILL_DEFAULT_CATEGORY: &str = "Custom";
pub const CUSTOM_SKILL_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, FromRow)]
pub struct CustomSkillRow {
    pub skill_id: String,
    pub name: String,
    pub category: String,
}

impl From<CustomSkillRow> for Skill {
    fn from(row: CustomSkillRow) -> Self {
        Skill::new(row.skill_id, row.name, row.category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Executive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    NotLooking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPreference {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageProficiency {
    Beginner,
    Intermediate,
    Advanced,
    Native,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub gpa: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub location: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: LanguageProficiency,
}

/// The profile form document. Stored whole as JSONB; every field is optional
/// so partially filled forms round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub availability: Option<Availability>,
    pub salary_expectation: Option<u32>,
    pub currency: Option<String>,
    pub work_preference: Option<WorkPreference>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    pub interests: Vec<String>,
}
