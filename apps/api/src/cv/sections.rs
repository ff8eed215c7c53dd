//! Best-effort capture of experience and education snippets from CV text.
//!
//! Low confidence by nature: these only grab the text that follows a known
//! heading or keyword, collapse whitespace, and cap length and count.

use regex::Regex;

use crate::cv::tables::{
    EDUCATION_MAX_CHARS, EDUCATION_MAX_ITEMS, EDUCATION_MIN_CHARS, EXPERIENCE_MAX_CHARS,
    EXPERIENCE_MAX_ITEMS, EXPERIENCE_MIN_CHARS,
};

lazy_static::lazy_static! {
    // Section blocks run until a blank line, a line starting with a capital, or the end.
    static ref EXPERIENCE_BLOCK_RE: Regex = Regex::new(
        r"(?s)\b(?i:experience|work history|employment)\b[:\s]*(.+?)(?:\n[ \t]*\n|\n[A-Z]|\z)"
    ).unwrap();
    static ref EXPERIENCE_LINE_RE: Regex = Regex::new(
        r"\b(?i:worked at|employed at|position at)\b[: \t]*([^\n]+)"
    ).unwrap();
    static ref EDUCATION_BLOCK_RE: Regex = Regex::new(
        r"(?s)\b(?i:education|academic|degree|university|college)\b[:\s]*(.+?)(?:\n[ \t]*\n|\n[A-Z]|\z)"
    ).unwrap();
    static ref EDUCATION_LINE_RE: Regex = Regex::new(
        r"\b(?i:bachelor|master|phd|diploma|certificate)[\w']*[: \t]*([^\n]+)"
    ).unwrap();
}

pub fn extract_experience(text: &str) -> Vec<String> {
    collect_snippets(
        text,
        &[&*EXPERIENCE_BLOCK_RE, &*EXPERIENCE_LINE_RE],
        EXPERIENCE_MIN_CHARS,
        EXPERIENCE_MAX_CHARS,
        EXPERIENCE_MAX_ITEMS,
    )
}

pub fn extract_education(text: &str) -> Vec<String> {
    collect_snippets(
        text,
        &[&*EDUCATION_BLOCK_RE, &*EDUCATION_LINE_RE],
        EDUCATION_MIN_CHARS,
        EDUCATION_MAX_CHARS,
        EDUCATION_MAX_ITEMS,
    )
}

fn collect_snippets(
    text: &str,
    patterns: &[&Regex],
    min_chars: usize,
    max_chars: usize,
    max_items: usize,
) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|cap| cap.get(1).map(|m| collapse_whitespace(m.as_str())))
        .filter(|snippet| snippet.chars().count() > min_chars)
        .map(|snippet| snippet.chars().take(max_chars).collect::<String>())
        .take(max_items)
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CV: &str = "Jane Doe\n\
        Experience: Senior engineer at Acme Corp building payment systems\n\
        and leading a team of four.\n\
        \n\
        Education: BSc Computer Science, State University\n\
        \n\
        Previously worked at Initech on billing tooling\n\
        Master of Science in Distributed Systems\n";

    #[test]
    fn test_experience_block_and_line() {
        let experience = extract_experience(SAMPLE_CV);
        assert_eq!(experience.len(), 2);
        assert_eq!(
            experience[0],
            "Senior engineer at Acme Corp building payment systems and leading a team of four."
        );
        assert_eq!(experience[1], "Initech on billing tooling");
    }

    #[test]
    fn test_education_block_and_degree_line() {
        let education = extract_education(SAMPLE_CV);
        assert_eq!(education[0], "BSc Computer Science, State University");
        assert!(education.contains(&"of Science in Distributed Systems".to_string()));
        assert!(education.len() <= EDUCATION_MAX_ITEMS);
    }

    #[test]
    fn test_short_snippets_dropped() {
        assert!(extract_experience("Experience: 5 years").is_empty());
        assert!(extract_education("Education: BSc").is_empty());
    }

    #[test]
    fn test_snippets_truncated() {
        let long = format!("Experience: {}", "x".repeat(500));
        let experience = extract_experience(&long);
        assert_eq!(experience[0].chars().count(), EXPERIENCE_MAX_CHARS);
    }

    #[test]
    fn test_item_count_capped() {
        let text = (0..10)
            .map(|i| format!("worked at company number {i} for a while"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_experience(&text).len(), EXPERIENCE_MAX_ITEMS);
    }

    #[test]
    fn test_no_headings_no_snippets() {
        assert!(extract_experience("Lorem ipsum dolor sit amet").is_empty());
        assert!(extract_education("Lorem ipsum dolor sit amet").is_empty());
    }
}
