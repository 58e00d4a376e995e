//! View-Model Builders — presentation-agnostic datasets derived from a [`CoverageReport`].
//!
//! Every builder is a pure function of the report: no builder mutates it, none can fail,
//! and with empty input they produce zero-valued (or empty) series.

pub mod narrative;

use serde::Serialize;

use crate::coverage::{CoverageRecord, CoverageReport};
use crate::taxonomy::Category;

/// Headroom added above the largest category total on the radial axis.
pub const RADIAL_AXIS_HEADROOM: usize = 2;

pub const RADIAL_COVERED_LABEL: &str = "Skills Covered";
pub const RADIAL_MISSING_LABEL: &str = "Skills Missing";
pub const SLICE_COVERED_LABEL: &str = "Covered Skills";
pub const SLICE_MISSING_LABEL: &str = "Missing Skills";
pub const GROUPED_COVERED_LABEL: &str = "Covered";
pub const GROUPED_MISSING_LABEL: &str = "Missing";

// ────────────────────────────────────────────────────────────────────────────
// Radial
// ────────────────────────────────────────────────────────────────────────────

/// Categorical radial comparison: one spoke per category, two magnitudes per spoke.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialSeries {
    pub categories: Vec<Category>,
    pub covered: Vec<usize>,
    pub missing: Vec<usize>,
    /// max over categories of (covered + missing), plus [`RADIAL_AXIS_HEADROOM`].
    pub axis_max: usize,
    pub covered_label: &'static str,
    pub missing_label: &'static str,
    /// Tooltip text per spoke, e.g. `"Skills Covered: 2 (Python, Rust)"`.
    pub covered_detail: Vec<String>,
    pub missing_detail: Vec<String>,
}

pub fn build_radial_series(report: &CoverageReport) -> RadialSeries {
    let axis_max = report
        .per_category
        .iter()
        .map(|entry| entry.record.total_count)
        .max()
        .unwrap_or(0)
        + RADIAL_AXIS_HEADROOM;

    RadialSeries {
        categories: Category::ALL.to_vec(),
        covered: counts(report, |r| r.covered_count),
        missing: counts(report, |r| r.missing_count),
        axis_max,
        covered_label: RADIAL_COVERED_LABEL,
        missing_label: RADIAL_MISSING_LABEL,
        covered_detail: Category::ALL
            .iter()
            .map(|c| tooltip_detail(RADIAL_COVERED_LABEL, report.covered.get(*c)))
            .collect(),
        missing_detail: Category::ALL
            .iter()
            .map(|c| tooltip_detail(RADIAL_MISSING_LABEL, report.missing.get(*c)))
            .collect(),
    }
}

/// `"<label>: <n> (<a, b>)"`; the skill list is left off when there are none.
fn tooltip_detail(label: &str, skills: &[String]) -> String {
    if skills.is_empty() {
        format!("{label}: 0")
    } else {
        format!("{label}: {} ({})", skills.len(), skills.join(", "))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Two-slice summary
// ────────────────────────────────────────────────────────────────────────────

/// Whole-universe covered vs. missing, not split by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySlices {
    pub covered: usize,
    pub missing: usize,
    pub labels: [&'static str; 2],
}

pub fn build_summary_slices(report: &CoverageReport) -> SummarySlices {
    SummarySlices {
        covered: report.overall.covered_count,
        missing: report.overall.missing_count,
        labels: [SLICE_COVERED_LABEL, SLICE_MISSING_LABEL],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Grouped comparison
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedSeries {
    pub categories: Vec<Category>,
    pub covered: Vec<usize>,
    pub missing: Vec<usize>,
    pub covered_label: &'static str,
    pub missing_label: &'static str,
}

pub fn build_grouped_series(report: &CoverageReport) -> GroupedSeries {
    GroupedSeries {
        categories: Category::ALL.to_vec(),
        covered: counts(report, |r| r.covered_count),
        missing: counts(report, |r| r.missing_count),
        covered_label: GROUPED_COVERED_LABEL,
        missing_label: GROUPED_MISSING_LABEL,
    }
}

fn counts(
    report: &CoverageReport,
    pick: impl Fn(&CoverageRecord) -> usize,
) -> Vec<usize> {
    report.per_category.iter().map(|e| pick(&e.record)).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::aggregate;

    fn sample_report() -> CoverageReport {
        aggregate(&["Python", "React", "Git"], &["Docker", "SQL"])
    }

    fn empty_report() -> CoverageReport {
        let empty: [&str; 0] = [];
        aggregate(&empty, &empty)
    }

    #[test]
    fn test_radial_includes_every_category() {
        let radial = build_radial_series(&sample_report());
        assert_eq!(radial.categories, Category::ALL.to_vec());
        assert_eq!(radial.covered, vec![1, 1, 0, 1, 0, 0]);
        assert_eq!(radial.missing, vec![0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_radial_axis_max_adds_headroom() {
        let radial = build_radial_series(&sample_report());
        // Tools & Frameworks has the largest total (2).
        assert_eq!(radial.axis_max, 2 + RADIAL_AXIS_HEADROOM);
    }

    #[test]
    fn test_radial_axis_max_on_empty_input_is_headroom() {
        let radial = build_radial_series(&empty_report());
        assert_eq!(radial.axis_max, RADIAL_AXIS_HEADROOM);
        assert!(radial.covered.iter().all(|n| *n == 0));
    }

    #[test]
    fn test_radial_tooltip_detail() {
        let report = aggregate(&["Python", "Rust"], &[]);
        let radial = build_radial_series(&report);
        assert_eq!(radial.covered_detail[0], "Skills Covered: 2 (Python, Rust)");
        assert_eq!(radial.missing_detail[0], "Skills Missing: 0");
    }

    #[test]
    fn test_summary_slices_use_overall_totals() {
        let slices = build_summary_slices(&sample_report());
        assert_eq!(slices.covered, 3);
        assert_eq!(slices.missing, 2);
        assert_eq!(slices.labels, ["Covered Skills", "Missing Skills"]);
    }

    #[test]
    fn test_grouped_series_parallel_arrays() {
        let grouped = build_grouped_series(&sample_report());
        assert_eq!(grouped.categories.len(), grouped.covered.len());
        assert_eq!(grouped.covered.len(), grouped.missing.len());
        assert_eq!(grouped.categories[3], Category::ToolsFrameworks);
        assert_eq!((grouped.covered[3], grouped.missing[3]), (1, 1));
    }

    #[test]
    fn test_builders_do_not_mutate_report() {
        let report = sample_report();
        let before = report.clone();
        let _ = build_radial_series(&report);
        let _ = build_summary_slices(&report);
        let _ = build_grouped_series(&report);
        let _ = narrative::build_narrative(&report);
        assert_eq!(report, before);
    }

    #[test]
    fn test_grouped_series_serializes_camel_case() {
        let json = serde_json::to_value(build_grouped_series(&empty_report())).unwrap();
        assert_eq!(json["categories"][5], "Other");
        assert_eq!(json["coveredLabel"], "Covered");
        assert_eq!(json["missing"], serde_json::json!([0, 0, 0, 0, 0, 0]));
    }
}
