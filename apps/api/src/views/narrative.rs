//! Per-category narrative: the skill names behind each non-empty category, with
//! pre-rendered text lines so the presentation layer only has to print them.

use serde::Serialize;

use crate::coverage::CoverageReport;
use crate::taxonomy::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeEntry {
    pub category: Category,
    pub covered_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Whole percent, 0 – 100.
    pub coverage_percent: u32,
    /// e.g. `["2 covered: Python, Rust", "1 missing: Go", "67% coverage"]`
    pub lines: Vec<String>,
}

/// One entry per category with at least one skill, in taxonomy order.
/// Categories with no covered and no missing skills are left out.
pub fn build_narrative(report: &CoverageReport) -> Vec<NarrativeEntry> {
    report
        .per_category
        .iter()
        .filter_map(|entry| {
            let coverage_percent = entry.record.whole_percent()?;
            let covered_skills = report.covered.get(entry.category).to_vec();
            let missing_skills = report.missing.get(entry.category).to_vec();
            let lines = narrative_lines(&covered_skills, &missing_skills, coverage_percent);
            Some(NarrativeEntry {
                category: entry.category,
                covered_skills,
                missing_skills,
                coverage_percent,
                lines,
            })
        })
        .collect()
}

fn narrative_lines(covered: &[String], missing: &[String], percent: u32) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if !covered.is_empty() {
        lines.push(format!("{} covered: {}", covered.len(), covered.join(", ")));
    }
    if !missing.is_empty() {
        lines.push(format!("{} missing: {}", missing.len(), missing.join(", ")));
    }
    lines.push(format!("{percent}% coverage"));
    lines
}
