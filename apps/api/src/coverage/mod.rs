#![allow(dead_code)]

//! Coverage Aggregator — turns the covered and missing classifications into per-category
//! and overall coverage records.
//!
//! The overall record here is computed only from the two lists it is given. It is never
//! merged with an externally supplied coverage figure, which may be measured against a
//! larger universe of required skills.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::taxonomy::classifier::{classify_set, Classification, KeywordClassifier, SkillClassifier};
use crate::taxonomy::Category;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Counts and coverage for one scope (a category, or everything).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageRecord {
    pub covered_count: usize,
    pub missing_count: usize,
    pub total_count: usize,
    /// 0 – 100, two decimals. `None` (serialized `null`) when `total_count == 0`.
    pub coverage_percent: Option<f64>,
}

impl CoverageRecord {
    pub fn from_counts(covered_count: usize, missing_count: usize) -> Self {
        let total_count = covered_count + missing_count;
        let coverage_percent = ratio(covered_count, total_count).map(round_percent_2dp);
        Self {
            covered_count,
            missing_count,
            total_count,
            coverage_percent,
        }
    }

    /// covered / total in 0.0 – 1.0, or `None` when not applicable.
    pub fn coverage_ratio(&self) -> Option<f64> {
        ratio(self.covered_count, self.total_count)
    }

    /// Coverage rounded to a whole percent, or `None` when not applicable.
    pub fn whole_percent(&self) -> Option<u32> {
        self.coverage_ratio().map(|r| (r * 100.0).round() as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCoverage {
    pub category: Category,
    #[serde(flatten)]
    pub record: CoverageRecord,
}

/// Aggregator output. Keeps the classified buckets alongside the counts because the
/// narrative and tooltip builders need the skill names, not just the numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// One entry per category, taxonomy order, empty categories included.
    pub per_category: Vec<CategoryCoverage>,
    pub overall: CoverageRecord,
    pub covered: Classification,
    pub missing: Classification,
}

impl CoverageReport {
    pub fn record(&self, category: Category) -> &CoverageRecord {
        &self.per_category[category.index()].record
    }
}

/// Three-band reading of a coverage percentage: ≥75 strong, ≥50 moderate, else low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    Strong,
    Moderate,
    Low,
}

impl CoverageTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 75.0 {
            CoverageTier::Strong
        } else if percent >= 50.0 {
            CoverageTier::Moderate
        } else {
            CoverageTier::Low
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Aggregates with the default keyword classifier.
pub fn aggregate<S: AsRef<str>>(covered_skills: &[S], missing_skills: &[S]) -> CoverageReport {
    aggregate_with(&KeywordClassifier, covered_skills, missing_skills)
}

/// Classifies both lists independently, then counts per category and overall.
/// Never fails; empty lists produce all-zero records.
pub fn aggregate_with<C, S>(
    classifier: &C,
    covered_skills: &[S],
    missing_skills: &[S],
) -> CoverageReport
where
    C: SkillClassifier + ?Sized,
    S: AsRef<str>,
{
    let covered = classify_set(classifier, covered_skills);
    let missing = classify_set(classifier, missing_skills);

    let per_category: Vec<CategoryCoverage> = Category::ALL
        .into_iter()
        .map(|category| CategoryCoverage {
            category,
            record: CoverageRecord::from_counts(covered.count(category), missing.count(category)),
        })
        .collect();

    let (covered_total, missing_total) = per_category.iter().fold((0, 0), |(c, m), entry| {
        (c + entry.record.covered_count, m + entry.record.missing_count)
    });
    let overall = CoverageRecord::from_counts(covered_total, missing_total);

    debug!(
        covered = overall.covered_count,
        missing = overall.missing_count,
        coverage_percent = ?overall.coverage_percent,
        "Aggregated skill coverage"
    );

    CoverageReport {
        per_category,
        overall,
        covered,
        missing,
    }
}

fn ratio(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64)
    }
}

fn round_percent_2dp(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_lists_bucket_and_count() {
        let report = aggregate(&["Python", "React", "Git"], &["Docker", "SQL"]);

        assert_eq!(report.covered.get(Category::Programming), ["Python"]);
        assert!(report.missing.get(Category::Programming).is_empty());
        assert_eq!(report.covered.get(Category::WebDevelopment), ["React"]);
        assert!(report.missing.get(Category::WebDevelopment).is_empty());
        assert!(report.covered.get(Category::DataAnalytics).is_empty());
        assert_eq!(report.missing.get(Category::DataAnalytics), ["SQL"]);
        assert_eq!(report.covered.get(Category::ToolsFrameworks), ["Git"]);
        assert_eq!(report.missing.get(Category::ToolsFrameworks), ["Docker"]);

        assert_eq!(report.overall.covered_count, 3);
        assert_eq!(report.overall.missing_count, 2);
        assert_eq!(report.overall.total_count, 5);
        assert_eq!(report.overall.coverage_percent, Some(60.0));
    }

    #[test]
    fn test_per_category_records() {
        let report = aggregate(&["Python", "React", "Git"], &["Docker", "SQL"]);

        let tools = report.record(Category::ToolsFrameworks);
        assert_eq!((tools.covered_count, tools.missing_count, tools.total_count), (1, 1, 2));
        assert_eq!(tools.coverage_percent, Some(50.0));

        let data = report.record(Category::DataAnalytics);
        assert_eq!(data.coverage_percent, Some(0.0));

        let fundamentals = report.record(Category::Fundamentals);
        assert!(fundamentals.is_empty());
        assert_eq!(fundamentals.coverage_percent, None);
    }

    #[test]
    fn test_empty_inputs_yield_zero_records() {
        let empty: [&str; 0] = [];
        let report = aggregate(&empty, &empty);

        assert_eq!(report.per_category.len(), Category::COUNT);
        for entry in &report.per_category {
            assert_eq!(entry.record, CoverageRecord::from_counts(0, 0));
            assert_eq!(entry.record.coverage_percent, None);
        }
        assert_eq!(report.overall.total_count, 0);
        assert_eq!(report.overall.coverage_percent, None);
    }

    #[test]
    fn test_only_missing_gives_zero_percent() {
        let report = aggregate(&[], &["Kubernetes"]);

        let tools = report.record(Category::ToolsFrameworks);
        assert_eq!(tools.covered_count, 0);
        assert_eq!(tools.missing_count, 1);
        assert_eq!(tools.coverage_percent, Some(0.0));
        assert_eq!(report.overall.coverage_percent, Some(0.0));
    }

    #[test]
    fn test_per_category_is_in_taxonomy_order() {
        let report = aggregate(&["Linux"], &["Pandas"]);
        let order: Vec<Category> = report.per_category.iter().map(|e| e.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_overlapping_lists_are_not_deduplicated() {
        let report = aggregate(&["Rust"], &["Rust"]);
        let programming = report.record(Category::Programming);
        assert_eq!(programming.covered_count, 1);
        assert_eq!(programming.missing_count, 1);
        assert_eq!(programming.coverage_percent, Some(50.0));
    }

    #[test]
    fn test_percent_rounds_to_two_decimals() {
        let record = CoverageRecord::from_counts(2, 1);
        assert_eq!(record.coverage_percent, Some(66.67));
        assert_eq!(record.whole_percent(), Some(67));

        let record = CoverageRecord::from_counts(1, 2);
        assert_eq!(record.coverage_percent, Some(33.33));
        assert_eq!(record.whole_percent(), Some(33));
    }

    #[test]
    fn test_record_serializes_camel_case_with_null_percent() {
        let json = serde_json::to_value(CoverageRecord::from_counts(0, 0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "coveredCount": 0,
                "missingCount": 0,
                "totalCount": 0,
                "coveragePercent": null
            })
        );
    }

    #[test]
    fn test_category_coverage_flattens_record() {
        let report = aggregate(&["HTML"], &[]);
        let json = serde_json::to_value(report.per_category[1]).unwrap();
        assert_eq!(json["category"], "Web Development");
        assert_eq!(json["coveredCount"], 1);
        assert_eq!(json["coveragePercent"], 100.0);
    }

    #[test]
    fn test_custom_classifier_is_used() {
        struct Everything;
        impl SkillClassifier for Everything {
            fn classify(&self, _skill: &str) -> Category {
                Category::Fundamentals
            }
        }
        let report = aggregate_with(&Everything, &["Python", "Docker"], &["Cooking"]);
        let fundamentals = report.record(Category::Fundamentals);
        assert_eq!(fundamentals.total_count, 3);
        assert!(report.record(Category::Programming).is_empty());
    }

    #[test]
    fn test_coverage_tier_bands() {
        assert_eq!(CoverageTier::from_percent(100.0), CoverageTier::Strong);
        assert_eq!(CoverageTier::from_percent(75.0), CoverageTier::Strong);
        assert_eq!(CoverageTier::from_percent(74.99), CoverageTier::Moderate);
        assert_eq!(CoverageTier::from_percent(50.0), CoverageTier::Moderate);
        assert_eq!(CoverageTier::from_percent(49.9), CoverageTier::Low);
        assert_eq!(CoverageTier::from_percent(0.0), CoverageTier::Low);
    }
}
