//! Maps free CV text onto catalog skill ids.
//!
//! Three passes over the same immutable text:
//! 1. Catalog scan: every skill name, id, and listed synonym is searched for
//!    as a whole term in a normalized copy of the text.
//! 2. Heading scan: lines such as "Skills: ..." are split into tokens and each
//!    token is fuzzily matched against skill names.
//! 3. Fallback: only when 1 and 2 found nothing, a fixed list of common
//!    technology keywords is tried against the lowercased text.
//!
//! Results are unioned; each skill id appears once.

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Skill};
use crate::cv::sections::{extract_education, extract_experience};
use crate::cv::tables::{
    synonyms_for, CONFIDENCE_CHARS_PER_POINT, CONFIDENCE_LENGTH_CAP, CONFIDENCE_MAX,
    CONFIDENCE_PER_SKILL, CONFIDENCE_SKILL_CAP, FALLBACK_KEYWORDS, MAX_TOKEN_CHARS,
    MIN_TOKEN_CHARS,
};
use crate::errors::CvError;

lazy_static::lazy_static! {
    static ref HEADING_RES: Vec<Regex> = vec![
        Regex::new(r"(?i)\b(?:skills?|technologies|technology|tools?|expertise)\b[:\s]*([^\n]+)").unwrap(),
        Regex::new(r"(?i)\b(?:proficient in|experience with|expertise in|knowledge of)\b[:\s]*([^\n]+)").unwrap(),
        Regex::new(r"(?i)\b(?:programming languages?|frameworks?|libraries|library)\b[:\s]*([^\n]+)").unwrap(),
    ];
    static ref TOKEN_SPLIT_RE: Regex = Regex::new(r"[,;|•\-\n]").unwrap();
}

/// Output of a single CV extraction. Derived per upload, never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCv {
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    /// 0 to 100 heuristic, not a probability
    pub confidence: u8,
}

/// Insertion-ordered set of skill ids.
#[derive(Default)]
struct FoundSkills {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl FoundSkills {
    fn insert(&mut self, id: &str) {
        if self.seen.insert(id.to_string()) {
            self.ids.push(id.to_string());
        }
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Extracts skills, experience and education snippets from raw CV text.
///
/// `extra_skills` are searched exactly like catalog skills (e.g. a user's
/// custom skills) without being added to the catalog.
pub fn extract(text: &str, catalog: &Catalog, extra_skills: &[Skill]) -> Result<ParsedCv, CvError> {
    if text.trim().is_empty() {
        return Err(CvError::EmptyInput);
    }

    let skills: Vec<&Skill> = catalog.skills().iter().chain(extra_skills).collect();
    let mut found = FoundSkills::default();

    catalog_pass(&normalize(text), &skills, &mut found);
    let after_catalog = found.len();

    heading_pass(text, &skills, &mut found);
    let after_headings = found.len();

    if found.is_empty() {
        fallback_pass(&text.to_lowercase(), &skills, &mut found);
    }

    debug!(
        catalog = after_catalog,
        headings = after_headings - after_catalog,
        fallback = found.len() - after_headings,
        "CV skill extraction passes complete"
    );

    let text_chars = text.chars().count();
    Ok(ParsedCv {
        confidence: confidence(found.len(), text_chars),
        skills: found.ids,
        experience: extract_experience(text),
        education: extract_education(text),
    })
}

/// `round(min(100, min(skills*10, 50) + min(chars/100, 30)))`
pub fn confidence(skill_count: usize, text_chars: usize) -> u8 {
    let skill_score = (skill_count as f64 * CONFIDENCE_PER_SKILL).min(CONFIDENCE_SKILL_CAP);
    let length_score = (text_chars as f64 / CONFIDENCE_CHARS_PER_POINT).min(CONFIDENCE_LENGTH_CAP);
    (skill_score + length_score).min(CONFIDENCE_MAX).round() as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Passes
// ────────────────────────────────────────────────────────────────────────────

fn catalog_pass(normalized: &str, skills: &[&Skill], found: &mut FoundSkills) {
    for skill in skills {
        let name = skill.name.to_lowercase();
        let id = skill.id.to_lowercase();

        let hit = contains_term(normalized, &name)
            || contains_term(normalized, &id)
            || synonyms_for(&name)
                .iter()
                .any(|variant| contains_term(normalized, variant));

        if hit {
            found.insert(&skill.id);
        }
    }
}

fn heading_pass(text: &str, skills: &[&Skill], found: &mut FoundSkills) {
    for re in HEADING_RES.iter() {
        for cap in re.captures_iter(text) {
            let Some(rest) = cap.get(1) else { continue };
            for token in TOKEN_SPLIT_RE.split(rest.as_str()) {
                let token = token.trim();
                let len = token.chars().count();
                if !(MIN_TOKEN_CHARS..=MAX_TOKEN_CHARS).contains(&len) {
                    continue;
                }
                if let Some(skill) = fuzzy_match(token, skills) {
                    found.insert(&skill.id);
                }
            }
        }
    }
}

fn fallback_pass(lowercased: &str, skills: &[&Skill], found: &mut FoundSkills) {
    for keyword in FALLBACK_KEYWORDS {
        if !contains_term(lowercased, keyword) {
            continue;
        }
        let exact = skills
            .iter()
            .find(|s| s.id.to_lowercase() == *keyword || s.name.to_lowercase() == *keyword);
        let matched = exact.or_else(|| {
            skills.iter().find(|s| {
                let name = s.name.to_lowercase();
                let id = s.id.to_lowercase();
                contains_term(&name, keyword)
                    || contains_term(&id, keyword)
                    || contains_term(keyword, &name)
                    || contains_term(keyword, &id)
            })
        });
        if let Some(skill) = matched {
            found.insert(&skill.id);
        }
    }
}

/// Exact name/id equality first, then whole-term containment either way.
fn fuzzy_match<'a>(token: &str, skills: &[&'a Skill]) -> Option<&'a Skill> {
    let token = token.to_lowercase();
    let exact = skills
        .iter()
        .find(|s| s.name.to_lowercase() == token || s.id.to_lowercase() == token);
    exact
        .or_else(|| {
            skills.iter().find(|s| {
                let name = s.name.to_lowercase();
                contains_term(&name, &token) || contains_term(&token, &name)
            })
        })
        .copied()
}

// ────────────────────────────────────────────────────────────────────────────
// Text helpers
// ────────────────────────────────────────────────────────────────────────────

/// Lowercases and collapses every run of non-alphanumeric characters into a
/// single space.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }
    out
}

/// True when `needle` occurs in `haystack` with no alphanumeric character
/// directly before or after it.
pub fn contains_term(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}
