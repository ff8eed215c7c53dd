//! Heuristic scoring of a public profile (LinkedIn URL + About text).
//!
//! Deterministic and offline: the same URL and text always give the same
//! report. Scores are integers in 0..=100.

pub mod handlers;

use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref LINKEDIN_URL_RE: Regex =
        Regex::new(r"(?i)^https?://(?:www\.)?linkedin\.com/(?:in|pub)/").unwrap();
    static ref VANITY_SLUG_RE: Regex =
        Regex::new(r"(?i)linkedin\.com/in/[a-z0-9\-]{5,}").unwrap();
    static ref PARAGRAPH_BREAK_RE: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref BULLET_RE: Regex = Regex::new(r"(?m)(?:^|\n)\s*[•\-*]").unwrap();
    static ref SENTENCE_SPLIT_RE: Regex = Regex::new(r"[.!?]+").unwrap();
    static ref KEYWORD_RES: Vec<Regex> = IMPACT_KEYWORDS
        .iter()
        .map(|k| Regex::new(&format!(r"(?i)\b{k}\b")).unwrap())
        .collect();
}

const IMPACT_KEYWORDS: &[&str] = &[
    "results", "impact", "growth", "leadership", "team", "scale", "optimize",
    "deliver", "strategy", "customer", "product", "data", "design", "security",
    "cloud", "ai", "ml", "automation", "performance", "quality", "collaborate",
];

// About = 0.35 length + 0.25 readability + 0.2 structure + 0.2 keywords
const ABOUT_WEIGHTS: [f64; 4] = [0.35, 0.25, 0.2, 0.2];
// Overall = 0.35 url + 0.65 about
const URL_WEIGHT: f64 = 0.35;
const ABOUT_WEIGHT: f64 = 0.65;

const ABOUT_MIN_CHARS: usize = 400;
const ABOUT_MAX_CHARS: usize = 1600;
const KEYWORD_MIN_HITS: usize = 2;
const KEYWORD_MAX_HITS: usize = 10;
const KEYWORD_FEEDBACK_BELOW: usize = 5;
const READABILITY_FEEDBACK_BELOW: u32 = 60;
const IDEAL_WORDS_PER_SENTENCE: f64 = 16.0;
const WORDS_PER_SENTENCE_SPREAD: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub url: u32,
    pub about: u32,
    pub keywords: u32,
    pub readability: u32,
    pub structure: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileScore {
    pub overall: u32,
    pub details: ScoreDetails,
    pub feedback: Vec<String>,
}

/// Linear position of `value` between `min` and `max`, clamped, as 0..=100.
pub fn scale(value: f64, min: f64, max: f64) -> u32 {
    if max == min {
        return 0;
    }
    let v = value.clamp(min, max);
    ((v - min) / (max - min) * 100.0).round() as u32
}

/// 100 at 16 words per sentence, falling linearly to 0 at 8 words either side.
pub fn readability(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let sentences = SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let avg = words as f64 / sentences as f64;
    let distance = (avg - IDEAL_WORDS_PER_SENTENCE).abs();
    (100.0 - distance / WORDS_PER_SENTENCE_SPREAD * 100.0)
        .max(0.0)
        .round() as u32
}

fn url_score(url: &str, feedback: &mut Vec<String>) -> u32 {
    let url = url.trim();
    let looks_linkedin = LINKEDIN_URL_RE.is_match(url);
    let has_vanity = VANITY_SLUG_RE.is_match(url);

    if !looks_linkedin {
        feedback.push("Use a valid LinkedIn profile URL (e.g., linkedin.com/in/yourname).".to_string());
        return if url.is_empty() { 0 } else { 30 };
    }
    if !has_vanity {
        feedback.push("Claim a custom LinkedIn vanity URL for professionalism.".to_string());
        return 70;
    }
    100
}

pub fn score_profile(url: &str, about: &str) -> ProfileScore {
    let mut feedback = Vec::new();
    let url = url_score(url, &mut feedback);

    let about = about.trim();
    let about_chars = about.chars().count();
    let length = scale(about_chars as f64, ABOUT_MIN_CHARS as f64, ABOUT_MAX_CHARS as f64);
    if about_chars < ABOUT_MIN_CHARS {
        feedback.push("Expand your About section to share more context (800-1200 chars ideal).".to_string());
    }
    if about_chars > ABOUT_MAX_CHARS {
        feedback.push("Tighten your About section to keep it concise and scannable.".to_string());
    }

    let readability = readability(about);
    if readability < READABILITY_FEEDBACK_BELOW {
        feedback.push("Use shorter sentences and plain language for readability.".to_string());
    }

    let has_paragraphs = PARAGRAPH_BREAK_RE.is_match(about);
    let has_bullets = BULLET_RE.is_match(about);
    let structure: u32 = (if has_paragraphs { 60 } else { 0 }) + (if has_bullets { 40 } else { 0 });
    if !has_paragraphs {
        feedback.push("Break text into short paragraphs.".to_string());
    }
    if !has_bullets {
        feedback.push("Add 3-5 bullet points for highlights or achievements.".to_string());
    }

    let keyword_hits = KEYWORD_RES.iter().filter(|re| re.is_match(about)).count();
    let keywords = scale(keyword_hits as f64, KEYWORD_MIN_HITS as f64, KEYWORD_MAX_HITS as f64);
    if keyword_hits < KEYWORD_FEEDBACK_BELOW {
        feedback.push("Include impact-oriented keywords (e.g., results, growth, scale).".to_string());
    }

    let [w_length, w_readability, w_structure, w_keywords] = ABOUT_WEIGHTS;
    let about_score = (w_length * length as f64
        + w_readability * readability as f64
        + w_structure * structure as f64
        + w_keywords * keywords as f64)
        .round() as u32;
    let overall = (URL_WEIGHT * url as f64 + ABOUT_WEIGHT * about_score as f64).round() as u32;

    ProfileScore {
        overall,
        details: ScoreDetails {
            url,
            about: about_score,
            keywords,
            readability,
            structure,
        },
        feedback,
    }
}
