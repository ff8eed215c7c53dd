//! Plain-text rendering of a personal career plan.

pub mod handlers;

use chrono::NaiveDate;

use crate::catalog::{CareerPath, Catalog, Skill};

/// Everything a plan export needs. `career.match_percentage` is printed as is.
#[derive(Debug, Clone)]
pub struct PlanExport<'a> {
    pub user_name: Option<&'a str>,
    /// Every skill id the user owns, custom ones included.
    pub user_skills: &'a [String],
    /// Resolves display names of custom ids in `user_skills`.
    pub custom_skills: &'a [Skill],
    pub career: &'a CareerPath,
    pub completed_steps: &'a [String],
    pub generated_on: NaiveDate,
}

fn push_heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push('\n');
}

fn skill_names<'a>(
    catalog: &'a Catalog,
    custom: &'a [Skill],
    ids: impl IntoIterator<Item = &'a String>,
) -> String {
    ids.into_iter()
        .map(|id| match custom.iter().find(|s| &s.id == id) {
            Some(skill) if catalog.skill(id).is_none() => skill.name.as_str(),
            _ => catalog.skill_name(id),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the plan document. Unknown skill ids are printed verbatim.
pub fn render_plan_text(catalog: &Catalog, plan: &PlanExport<'_>) -> String {
    let career = plan.career;
    let mut out = String::new();

    out.push_str("AI CAREER PATHFINDER - PERSONAL CAREER PLAN\n");
    if let Some(name) = plan.user_name.filter(|n| !n.trim().is_empty()) {
        out.push_str(&format!("Name: {}\n", name.trim()));
    }
    out.push_str(&format!("Generated: {}\n\n", plan.generated_on.format("%Y-%m-%d")));

    push_heading(&mut out, "RECOMMENDED CAREER PATH");
    out.push_str(&format!("Career: {}\n", career.title));
    out.push_str(&format!("Match: {}%\n", career.match_percentage));
    out.push_str(&format!("Average Salary: {}\n", career.average_salary));
    out.push_str(&format!("Growth Rate: {}\n\n", career.growth_rate));
    out.push_str(&format!("Description:\n{}\n\n", career.description));

    push_heading(&mut out, "YOUR CURRENT SKILLS");
    out.push_str(&skill_names(catalog, plan.custom_skills, plan.user_skills));
    out.push_str("\n\n");

    push_heading(&mut out, "REQUIRED SKILLS FOR THIS CAREER");
    out.push_str(&skill_names(catalog, plan.custom_skills, &career.required_skills));
    out.push_str("\n\n");

    push_heading(&mut out, "SKILLS TO LEARN");
    let missing: Vec<&String> = career
        .required_skills
        .iter()
        .filter(|id| !plan.user_skills.contains(id))
        .collect();
    if missing.is_empty() {
        out.push_str("All required skills covered!");
    } else {
        out.push_str(&skill_names(catalog, plan.custom_skills, missing));
    }
    out.push_str("\n\n");

    push_heading(&mut out, "ACTION PLAN - NEXT STEPS");
    let steps: Vec<String> = career
        .next_steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let status = if plan.completed_steps.contains(&step.id) {
                "[COMPLETED]"
            } else {
                "[PENDING]"
            };
            format!(
                "{}. {} {}\n   Priority: {} | Time: {}\n   {}",
                i + 1,
                step.title,
                status,
                step.priority.as_str(),
                step.time_estimate,
                step.description
            )
        })
        .collect();
    out.push_str(&steps.join("\n\n"));
    out.push_str("\n\n");

    push_heading(&mut out, "RECOMMENDED RESOURCES");
    let resources: Vec<String> = career
        .resources
        .iter()
        .enumerate()
        .map(|(i, resource)| {
            format!(
                "{}. {}\n   Type: {} | Provider: {}\n   {} | URL: {}",
                i + 1,
                resource.title,
                resource.kind.as_str(),
                resource.provider,
                if resource.free { "Free" } else { "Paid" },
                resource.url
            )
        })
        .collect();
    out.push_str(&resources.join("\n\n"));
    out.push_str("\n\n---\nGenerated by AI Career Pathfinder");

    out
}

/// `career-plan-<slug>-<YYYY-MM-DD>.txt`, slug being the lowercased title
/// with every run of non-alphanumerics collapsed to `-`.
pub fn plan_file_name(career_title: &str, generated_on: NaiveDate) -> String {
    let mut slug = String::new();
    for c in career_title.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    format!("career-plan-{slug}-{}.txt", generated_on.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_lists_missing_skills_and_step_status() {
        let catalog = Catalog::builtin();
        let career = catalog.career("frontend-developer").unwrap().clone();
        let skills = ids(&["js", "html"]);
        let first_step = career.next_steps[0].id.clone();
        let completed = vec![first_step];

        let text = render_plan_text(
            &catalog,
            &PlanExport {
                user_name: Some("Ada"),
                user_skills: &skills,
                custom_skills: &[],
                career: &career,
                completed_steps: &completed,
                generated_on: date(),
            },
        );

        assert!(text.starts_with("AI CAREER PATHFINDER - PERSONAL CAREER PLAN\nName: Ada\nGenerated: 2024-03-09"));
        assert!(text.contains("YOUR CURRENT SKILLS\n===================\nJavaScript, HTML\n"));
        let to_learn = text.split("SKILLS TO LEARN").nth(1).unwrap();
        assert!(to_learn.contains("React"));
        assert!(!to_learn.lines().nth(2).unwrap().contains("JavaScript"));
        assert!(text.contains(&format!("1. {} [COMPLETED]", career.next_steps[0].title)));
        assert!(text.contains(&format!("2. {} [PENDING]", career.next_steps[1].title)));
        assert!(text.ends_with("---\nGenerated by AI Career Pathfinder"));
    }

    #[test]
    fn test_plan_with_all_skills_covered() {
        let catalog = Catalog::builtin();
        let career = catalog.career("data-scientist").unwrap().clone();
        let skills = career.required_skills.clone();

        let text = render_plan_text(
            &catalog,
            &PlanExport {
                user_name: None,
                user_skills: &skills,
                custom_skills: &[],
                career: &career,
                completed_steps: &[],
                generated_on: date(),
            },
        );

        assert!(text.contains("SKILLS TO LEARN\n===============\nAll required skills covered!"));
        assert!(!text.contains("Name:"));
        assert!(!text.contains("[COMPLETED]"));
    }

    #[test]
    fn test_resources_show_pricing_and_url() {
        let catalog = Catalog::builtin();
        let career = catalog.careers()[0].clone();
        let text = render_plan_text(
            &catalog,
            &PlanExport {
                user_name: None,
                user_skills: &[],
                custom_skills: &[],
                career: &career,
                completed_steps: &[],
                generated_on: date(),
            },
        );
        let resource = &career.resources[0];
        let pricing = if resource.free { "Free" } else { "Paid" };
        assert!(text.contains(&format!("   {pricing} | URL: {}", resource.url)));
    }

    #[test]
    fn test_custom_skills_count_as_owned_and_show_by_name() {
        let catalog = Catalog::builtin();
        let custom = vec![Skill::new("custom-radio", "Ham Radio", "Custom")];
        let mut career = catalog.careers()[0].clone();
        career.required_skills = ids(&["custom-radio", "linux"]);
        let skills = ids(&["linux", "custom-radio"]);

        let text = render_plan_text(
            &catalog,
            &PlanExport {
                user_name: None,
                user_skills: &skills,
                custom_skills: &custom,
                career: &career,
                completed_steps: &[],
                generated_on: date(),
            },
        );

        assert!(text.contains("YOUR CURRENT SKILLS\n===================\nLinux, Ham Radio\n"));
        assert!(text.contains("SKILLS TO LEARN\n===============\nAll required skills covered!"));
    }

    #[test]
    fn test_file_name_slug() {
        assert_eq!(
            plan_file_name("Full Stack Developer", date()),
            "career-plan-full-stack-developer-2024-03-09.txt"
        );
        assert_eq!(
            plan_file_name("UI/UX  Designer ", date()),
            "career-plan-ui-ux-designer-2024-03-09.txt"
        );
    }
}
