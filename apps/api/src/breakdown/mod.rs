#![allow(dead_code)]

//! Skill Breakdown — runs the full pipeline (classify → aggregate → view models) and wraps
//! the result in the envelope returned to the presentation layer.
//!
//! The pipeline is pure: the same input always serializes to the same bytes.

pub mod handlers;

use serde::Serialize;

use crate::coverage::{aggregate_with, CategoryCoverage, CoverageRecord, CoverageTier};
use crate::models::analysis::{AnalysisInput, Recommendation};
use crate::taxonomy::classifier::{KeywordClassifier, SkillClassifier};
use crate::taxonomy::TAXONOMY_VERSION;
use crate::views::narrative::{build_narrative, NarrativeEntry};
use crate::views::{
    build_grouped_series, build_radial_series, build_summary_slices, GroupedSeries,
    RadialSeries, SummarySlices,
};

/// Everything the presentation layer needs to draw the skill-gap views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBreakdown {
    pub taxonomy_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub per_category: Vec<CategoryCoverage>,
    /// Computed here from the two lists only.
    pub overall: CoverageRecord,
    pub overall_tier: Option<CoverageTier>,
    /// Upstream figure, passed through. Never substituted for `overall`.
    pub external_coverage_percent: Option<f64>,
    pub external_tier: Option<CoverageTier>,
    pub radial_series: RadialSeries,
    pub summary_slices: SummarySlices,
    pub grouped_series: GroupedSeries,
    pub narrative: Vec<NarrativeEntry>,
    pub recommendations: Vec<Recommendation>,
}

/// Builds the breakdown with the default keyword classifier.
pub fn build_breakdown(input: &AnalysisInput) -> SkillBreakdown {
    build_breakdown_with(&KeywordClassifier, input)
}

pub fn build_breakdown_with<C>(classifier: &C, input: &AnalysisInput) -> SkillBreakdown
where
    C: SkillClassifier + ?Sized,
{
    let report = aggregate_with(
        classifier,
        input.covered_skills.as_slice(),
        input.missing_skills.as_slice(),
    );

    SkillBreakdown {
        taxonomy_version: TAXONOMY_VERSION,
        analysis_id: input.analysis_id.clone(),
        university: input.university.clone(),
        field: input.field.clone(),
        overall_tier: report.overall.coverage_percent.map(CoverageTier::from_percent),
        external_coverage_percent: input.external_coverage_percent,
        external_tier: input.external_coverage_percent.map(CoverageTier::from_percent),
        radial_series: build_radial_series(&report),
        summary_slices: build_summary_slices(&report),
        grouped_series: build_grouped_series(&report),
        narrative: build_narrative(&report),
        recommendations: input.recommendations.clone(),
        overall: report.overall,
        per_category: report.per_category,
    }
}
