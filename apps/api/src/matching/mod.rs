//! Skill-to-career matching.
//!
//! Pure functions over the read-only catalog. Every call clones the catalog
//! careers it returns and fills in `match_percentage` on the clone, so the
//! shared catalog is never touched.

pub mod handlers;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{CareerPath, Catalog, Priority, Skill, Step};

/// Careers at or below this match percentage are not recommended.
pub const MATCH_THRESHOLD: u32 = 20;

/// Per-career priority overrides for missing skills. Anything absent is Medium.
const SKILL_PRIORITIES: &[(&str, &[(&str, Priority)])] = &[
    (
        "frontend-developer",
        &[
            ("js", Priority::High),
            ("ts", Priority::High),
            ("react", Priority::High),
            ("nextjs", Priority::High),
            ("html", Priority::High),
            ("css", Priority::High),
            ("tailwind", Priority::Medium),
        ],
    ),
    (
        "fullstack-dev",
        &[
            ("js", Priority::High),
            ("react", Priority::High),
            ("node", Priority::High),
            ("sql", Priority::High),
            ("html", Priority::High),
            ("css", Priority::High),
            ("git", Priority::Medium),
        ],
    ),
    (
        "data-scientist",
        &[
            ("py", Priority::High),
            ("sql", Priority::High),
            ("pandas", Priority::High),
            ("numpy", Priority::High),
            ("r", Priority::Medium),
            ("tableau", Priority::Medium),
        ],
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub id: String,
    pub name: String,
    pub priority: Priority,
}

/// Which required skills of a career the user still lacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub missing_skills: Vec<MissingSkill>,
    pub gap_percentage: u32,
    pub user_skill_count: usize,
    pub total_skills: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// `round(100 * part / whole)`, 0 for an empty whole.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Match percentage of a single career against a user's skill set.
pub fn match_percentage(career: &CareerPath, user_skills: &HashSet<&str>) -> u32 {
    let matching = career
        .required_skills
        .iter()
        .filter(|s| user_skills.contains(s.as_str()))
        .count();
    percentage(matching, career.required_skills.len())
}

/// The user's skill ids followed by the ids of `extra_skills`, each once.
/// Matching, gap analysis and plan export all work from this one set.
pub fn owned_skill_ids(user_skills: &[String], extra_skills: &[Skill]) -> Vec<String> {
    let mut owned = Vec::new();
    let mut seen = HashSet::new();
    for id in user_skills.iter().chain(extra_skills.iter().map(|s| &s.id)) {
        if seen.insert(id.as_str()) {
            owned.push(id.clone());
        }
    }
    owned
}

/// Ranks catalog careers against the user's skills.
///
/// `extra_skills` are ad hoc skills the user owns (e.g. custom skills); their
/// ids count as part of the user's set for this call only. Careers scoring at
/// or below [`MATCH_THRESHOLD`] are dropped, the rest are sorted by
/// descending match with ties kept in catalog order.
pub fn recommend(catalog: &Catalog, user_skills: &[String], extra_skills: &[Skill]) -> Vec<CareerPath> {
    let owned: HashSet<&str> = user_skills
        .iter()
        .map(String::as_str)
        .chain(extra_skills.iter().map(|s| s.id.as_str()))
        .collect();

    let mut ranked: Vec<CareerPath> = catalog
        .careers()
        .iter()
        .filter_map(|career| {
            let pct = match_percentage(career, &owned);
            (pct > MATCH_THRESHOLD).then(|| CareerPath {
                match_percentage: pct,
                ..career.clone()
            })
        })
        .collect();

    // sort_by is stable: equal percentages keep catalog order
    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    tracing::debug!(
        user_skills = owned.len(),
        recommended = ranked.len(),
        "Computed career recommendations"
    );
    ranked
}

/// Priority of learning `skill_id` for `career_id`.
pub fn skill_priority(career_id: &str, skill_id: &str) -> Priority {
    SKILL_PRIORITIES
        .iter()
        .find(|(career, _)| *career == career_id)
        .and_then(|(_, skills)| skills.iter().find(|(id, _)| *id == skill_id))
        .map(|(_, priority)| *priority)
        .unwrap_or(Priority::Medium)
}

/// Lists the required skills of `career` missing from `user_skills`, in the
/// order the career declares them.
pub fn analyze_gap(catalog: &Catalog, career: &CareerPath, user_skills: &[String]) -> SkillGap {
    let owned: HashSet<&str> = user_skills.iter().map(String::as_str).collect();

    let missing_skills: Vec<MissingSkill> = career
        .required_skills
        .iter()
        .filter(|id| !owned.contains(id.as_str()))
        .map(|id| MissingSkill {
            id: id.clone(),
            name: catalog.skill_name(id).to_string(),
            priority: skill_priority(&career.id, id),
        })
        .collect();

    let total_skills = career.required_skills.len();
    SkillGap {
        gap_percentage: percentage(missing_skills.len(), total_skills),
        user_skill_count: total_skills - missing_skills.len(),
        total_skills,
        missing_skills,
    }
}

/// How many of a career's next steps are in the completed set.
pub fn step_progress(career: &CareerPath, completed_steps: &[String]) -> StepProgress {
    let completed = career
        .next_steps
        .iter()
        .filter(|step| completed_steps.contains(&step.id))
        .count();
    let total = career.next_steps.len();
    StepProgress {
        completed,
        total,
        percentage: percentage(completed, total),
    }
}

/// Next steps of a career, optionally restricted to high priority.
pub fn next_steps(career: &CareerPath, only_high_priority: bool) -> Vec<&Step> {
    career
        .next_steps
        .iter()
        .filter(|step| !only_high_priority || step.priority == Priority::High)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn all_skill_subsets(catalog: &Catalog) -> Vec<Vec<String>> {
        // A spread of inputs: each career's skills, prefixes of them, and a mix.
        let mut inputs = vec![vec![], ids(&["nope", "also-unknown"])];
        for career in catalog.careers() {
            for n in 0..=career.required_skills.len() {
                inputs.push(career.required_skills[..n].to_vec());
            }
        }
        inputs.push(ids(&["js", "py", "docker", "communication", "figma", "sql"]));
        inputs
    }

    #[test]
    fn test_empty_skills_recommend_nothing() {
        let catalog = Catalog::builtin();
        assert!(recommend(&catalog, &[], &[]).is_empty());
    }

    #[test]
    fn test_unknown_skills_recommend_nothing() {
        let catalog = Catalog::builtin();
        assert!(recommend(&catalog, &ids(&["cobol", "fortran"]), &[]).is_empty());
    }

    #[test]
    fn test_every_result_is_above_threshold() {
        let catalog = Catalog::builtin();
        for input in all_skill_subsets(&catalog) {
            for career in recommend(&catalog, &input, &[]) {
                assert!(
                    career.match_percentage > MATCH_THRESHOLD,
                    "{} scored {}",
                    career.id,
                    career.match_percentage
                );
            }
        }
    }

    #[test]
    fn test_results_sorted_with_stable_ties() {
        let catalog = Catalog::builtin();
        let order: Vec<&str> = catalog.careers().iter().map(|c| c.id.as_str()).collect();
        for input in all_skill_subsets(&catalog) {
            let results = recommend(&catalog, &input, &[]);
            for pair in results.windows(2) {
                assert!(pair[0].match_percentage >= pair[1].match_percentage);
                if pair[0].match_percentage == pair[1].match_percentage {
                    let a = order.iter().position(|id| *id == pair[0].id).unwrap();
                    let b = order.iter().position(|id| *id == pair[1].id).unwrap();
                    assert!(a < b, "tie between {} and {} out of catalog order", pair[0].id, pair[1].id);
                }
            }
        }
    }

    #[test]
    fn test_all_required_skills_give_full_match() {
        let catalog = Catalog::builtin();
        for career in catalog.careers() {
            let results = recommend(&catalog, &career.required_skills, &[]);
            let hit = results.iter().find(|c| c.id == career.id).unwrap();
            assert_eq!(hit.match_percentage, 100);
        }
    }

    #[test]
    fn test_match_percentage_rounds() {
        let catalog = Catalog::builtin();
        // fullstack-dev requires 7 skills: 2/7 = 28.57 -> 29
        let results = recommend(&catalog, &ids(&["js", "react"]), &[]);
        let fullstack = results.iter().find(|c| c.id == "fullstack-dev").unwrap();
        assert_eq!(fullstack.match_percentage, 29);
    }

    #[test]
    fn test_threshold_is_strict() {
        let catalog = Catalog::builtin();
        // data-scientist requires 6 skills; 1/6 = 16.7 -> 17, filtered out.
        // fullstack-dev requires 7; 1/7 = 14.3 -> filtered out.
        let results = recommend(&catalog, &ids(&["sql"]), &[]);
        assert!(results.is_empty());

        // exactly 20 is still filtered: 1 of 5
        let mut career = catalog.careers()[0].clone();
        career.required_skills = ids(&["a", "b", "c", "d", "e"]);
        let five = Catalog::new(vec![], vec![career]).unwrap();
        assert!(recommend(&five, &ids(&["a"]), &[]).is_empty());
        assert_eq!(recommend(&five, &ids(&["a", "b"]), &[])[0].match_percentage, 40);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::builtin();
        // js + html + css: fullstack 3/7 = 43, frontend 3/7 = 43
        let results = recommend(&catalog, &ids(&["js", "html", "css"]), &[]);
        let fullstack = results.iter().position(|c| c.id == "fullstack-dev").unwrap();
        let frontend = results.iter().position(|c| c.id == "frontend-developer").unwrap();
        assert_eq!(results[fullstack].match_percentage, 43);
        assert_eq!(results[frontend].match_percentage, 43);
        assert!(fullstack < frontend);
    }

    #[test]
    fn test_catalog_not_mutated() {
        let catalog = Catalog::builtin();
        let _ = recommend(&catalog, &ids(&["js", "react", "node"]), &[]);
        assert!(catalog.careers().iter().all(|c| c.match_percentage == 0));
    }

    #[test]
    fn test_extra_skills_count_as_owned() {
        let skills = vec![Skill::new("custom-1", "Ham Radio", "Hobby")];
        let mut career = Catalog::builtin().careers()[0].clone();
        career.id = "radio-operator".to_string();
        career.required_skills = ids(&["custom-1", "linux"]);
        let catalog = Catalog::new(Catalog::builtin().skills().to_vec(), vec![career]).unwrap();

        assert!(recommend(&catalog, &[], &[]).is_empty());
        let results = recommend(&catalog, &[], &skills);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_percentage, 50);
        assert!(catalog.skill("custom-1").is_none());
    }

    #[test]
    fn test_owned_skill_ids_dedup_in_order() {
        let extra = vec![
            Skill::new("custom-1", "Ham Radio", "Hobby"),
            Skill::new("py", "Python", "Programming"),
        ];
        assert_eq!(
            owned_skill_ids(&ids(&["py", "sql", "py"]), &extra),
            ids(&["py", "sql", "custom-1"])
        );
    }

    #[test]
    fn test_gap_over_owned_ids_agrees_with_match() {
        let extra = vec![Skill::new("custom-1", "Ham Radio", "Hobby")];
        let mut career = Catalog::builtin().careers()[0].clone();
        career.id = "radio-operator".to_string();
        career.required_skills = ids(&["custom-1", "linux"]);
        let catalog = Catalog::new(Catalog::builtin().skills().to_vec(), vec![career]).unwrap();

        let skills = ids(&["linux"]);
        let ranked = recommend(&catalog, &skills, &extra);
        assert_eq!(ranked[0].match_percentage, 100);

        let gap = analyze_gap(&catalog, &ranked[0], &owned_skill_ids(&skills, &extra));
        assert!(gap.missing_skills.is_empty());
        assert_eq!(gap.gap_percentage, 0);
        assert_eq!(gap.user_skill_count, 2);
    }

    #[test]
    fn test_gap_analysis_lists_missing_in_order() {
        let catalog = Catalog::builtin();
        let career = catalog.career("frontend-developer").unwrap();
        let gap = analyze_gap(&catalog, career, &ids(&["js", "react", "html", "css"]));

        let missing: Vec<&str> = gap.missing_skills.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(missing, vec!["ts", "nextjs", "tailwind"]);
        assert_eq!(gap.missing_skills[0].name, "TypeScript");
        assert_eq!(gap.missing_skills[0].priority, Priority::High);
        assert_eq!(gap.missing_skills[2].priority, Priority::Medium);
        // 3/7 = 42.86 -> 43
        assert_eq!(gap.gap_percentage, 43);
        assert_eq!(gap.user_skill_count, 4);
        assert_eq!(gap.total_skills, 7);
    }

    #[test]
    fn test_gap_unknown_required_skill_uses_id_as_name() {
        let catalog = Catalog::builtin();
        let career = catalog.career("cloud-architect").unwrap();
        let gap = analyze_gap(&catalog, career, &[]);
        let networking = gap.missing_skills.iter().find(|m| m.id == "networking").unwrap();
        assert_eq!(networking.name, "networking");
        assert_eq!(gap.gap_percentage, 100);
    }

    #[test]
    fn test_skill_priority_defaults_to_medium() {
        assert_eq!(skill_priority("data-scientist", "pandas"), Priority::High);
        assert_eq!(skill_priority("devops-engineer", "docker"), Priority::Medium);
        assert_eq!(skill_priority("data-scientist", "rust"), Priority::Medium);
    }

    #[test]
    fn test_step_progress() {
        let catalog = Catalog::builtin();
        let career = catalog.career("fullstack-dev").unwrap();
        let progress = step_progress(career, &ids(&["fs-1", "fs-3", "ds-1"]));
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percentage, 50);
    }

    #[test]
    fn test_step_progress_without_steps_is_zero() {
        let mut career = Catalog::builtin().careers()[0].clone();
        career.next_steps.clear();
        assert_eq!(step_progress(&career, &ids(&["fs-1"])).percentage, 0);
    }

    #[test]
    fn test_next_steps_high_priority_filter() {
        let catalog = Catalog::builtin();
        let career = catalog.career("frontend-developer").unwrap();
        assert_eq!(next_steps(career, false).len(), 3);
        let high = next_steps(career, true);
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].id, "fe-1");
    }
}
