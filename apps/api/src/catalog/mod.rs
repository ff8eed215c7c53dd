//! Static skill and career catalog.
//!
//! Loaded once at startup (built-in tables or a JSON override) and shared
//! read-only through `AppState` as `Arc<Catalog>`. Nothing in the request path
//! mutates it; user-specific custom skills are passed alongside per call.

pub mod data;
pub mod handlers;

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A single entry of the skill catalog. Unique by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl Skill {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A recommended learning step. Completion lives outside the catalog as a set
/// of step ids per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub time_estimate: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Tutorial,
    Book,
    Certification,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Course => "course",
            ResourceKind::Tutorial => "tutorial",
            ResourceKind::Book => "book",
            ResourceKind::Certification => "certification",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
    pub provider: String,
    pub free: bool,
}

/// A career path. `match_percentage` is filled in per request by the matcher
/// on a clone; catalog entries always carry 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub average_salary: String,
    pub growth_rate: String,
    pub required_skills: Vec<String>,
    pub next_steps: Vec<Step>,
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub match_percentage: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate skill id '{0}'")]
    DuplicateSkill(String),

    #[error("duplicate career id '{0}'")]
    DuplicateCareer(String),
}

/// On-disk shape of a catalog override file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    skills: Vec<Skill>,
    careers: Vec<CareerPath>,
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// Insertion-ordered skill map plus the ordered list of career paths.
#[derive(Debug, Clone)]
pub struct Catalog {
    skills: Vec<Skill>,
    index: HashMap<String, usize>,
    careers: Vec<CareerPath>,
}

impl Catalog {
    pub fn new(skills: Vec<Skill>, careers: Vec<CareerPath>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(skills.len());
        for (i, skill) in skills.iter().enumerate() {
            if index.insert(skill.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSkill(skill.id.clone()));
            }
        }

        let mut career_ids = std::collections::HashSet::new();
        for career in &careers {
            if !career_ids.insert(career.id.as_str()) {
                return Err(CatalogError::DuplicateCareer(career.id.clone()));
            }
        }

        Ok(Self {
            skills,
            index,
            careers,
        })
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Self {
        let skills = data::builtin_skills();
        let index = skills
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        Self {
            skills,
            index,
            careers: data::builtin_careers(),
        }
    }

    /// Loads a catalog override from a JSON file of the form
    /// `{"skills": [...], "careers": [...]}`.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file {} is not valid JSON", path.display()))?;
        let catalog = Self::new(file.skills, file.careers)?;
        Ok(catalog)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn careers(&self) -> &[CareerPath] {
        &self.careers
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.index.get(id).map(|&i| &self.skills[i])
    }

    pub fn career(&self, id: &str) -> Option<&CareerPath> {
        self.careers.iter().find(|c| c.id == id)
    }

    /// Display name for a skill id, falling back to the id itself.
    pub fn skill_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.skill(id).map(|s| s.name.as_str()).unwrap_or(id)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Search
// ────────────────────────────────────────────────────────────────────────────

/// Skills of one category, in the order they were first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Skills whose name contains `query` (case-insensitive) and whose id is not
/// in `exclude`. A blank query keeps every skill.
pub fn search_skills<'a>(
    skills: impl IntoIterator<Item = &'a Skill>,
    query: &str,
    exclude: &[String],
) -> Vec<Skill> {
    let query = query.trim().to_lowercase();
    skills
        .into_iter()
        .filter(|s| query.is_empty() || s.name.to_lowercase().contains(&query))
        .filter(|s| !exclude.iter().any(|id| id == &s.id))
        .cloned()
        .collect()
}

pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill],
            }),
        }
    }
    groups
}
