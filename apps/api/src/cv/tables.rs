//! Hand-authored lookup tables and limits used by the CV extractor.

/// Alternate spellings searched for alongside a skill's own name, keyed by the
/// lowercase skill name.
pub const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript", "es6", "es2015"]),
    ("typescript", &["ts"]),
    ("react", &["reactjs", "react.js"]),
    ("node.js", &["nodejs", "node"]),
    ("html", &["html5"]),
    ("css", &["css3"]),
    ("python", &["py"]),
    ("machine learning", &["ml", "ai"]),
    ("artificial intelligence", &["ai"]),
    ("data science", &["datascience"]),
    ("sql", &["mysql", "postgresql", "postgres"]),
    ("mongodb", &["mongo"]),
    ("aws", &["amazon web services"]),
    ("kubernetes", &["k8s"]),
    ("docker", &["containerization"]),
    ("git", &["github", "gitlab", "version control"]),
    ("agile", &["scrum", "kanban"]),
    ("project management", &["pm", "project mgmt"]),
];

/// Common technology terms tried only when no other pass finds anything.
pub const FALLBACK_KEYWORDS: &[&str] = &[
    "javascript", "js", "typescript", "ts", "python", "py", "java", "c++", "cpp",
    "react", "vue", "angular", "node", "nodejs", "express", "django", "flask",
    "html", "css", "bootstrap", "tailwind", "sass", "scss",
    "sql", "mysql", "postgresql", "mongodb", "redis",
    "aws", "azure", "docker", "kubernetes", "git", "github",
    "agile", "scrum", "kanban", "jira", "confluence",
];

/// Synonyms for a lowercase skill name; empty when the table has none.
pub fn synonyms_for(skill_name_lower: &str) -> &'static [&'static str] {
    SKILL_SYNONYMS
        .iter()
        .find(|(name, _)| *name == skill_name_lower)
        .map(|(_, variants)| *variants)
        .unwrap_or(&[])
}

// Heading-list tokens outside [MIN, MAX] characters are ignored.
pub const MIN_TOKEN_CHARS: usize = 2;
pub const MAX_TOKEN_CHARS: usize = 49;

// Confidence = min(100, min(skills * PER_SKILL, SKILL_CAP) + min(chars / CHARS_PER_POINT, LENGTH_CAP))
pub const CONFIDENCE_PER_SKILL: f64 = 10.0;
pub const CONFIDENCE_SKILL_CAP: f64 = 50.0;
pub const CONFIDENCE_CHARS_PER_POINT: f64 = 100.0;
pub const CONFIDENCE_LENGTH_CAP: f64 = 30.0;
pub const CONFIDENCE_MAX: f64 = 100.0;

pub const EXPERIENCE_MIN_CHARS: usize = 10;
pub const EXPERIENCE_MAX_CHARS: usize = 200;
pub const EXPERIENCE_MAX_ITEMS: usize = 5;

pub const EDUCATION_MIN_CHARS: usize = 5;
pub const EDUCATION_MAX_CHARS: usize = 150;
pub const EDUCATION_MAX_ITEMS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms_lookup() {
        assert_eq!(synonyms_for("kubernetes"), &["k8s"]);
        assert_eq!(synonyms_for("javascript").len(), 4);
        assert!(synonyms_for("rust").is_empty());
    }

    #[test]
    fn test_fallback_keywords_are_lowercase() {
        assert!(FALLBACK_KEYWORDS.iter().all(|k| k.to_lowercase() == *k));
    }
}
