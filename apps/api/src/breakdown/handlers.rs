use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::breakdown::{build_breakdown_with, SkillBreakdown};
use crate::errors::AppError;
use crate::models::analysis::AnalysisInput;
use crate::state::AppState;
use crate::taxonomy::{Category, TAXONOMY_VERSION};
use crate::views::RADIAL_AXIS_HEADROOM;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyCategory {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyResponse {
    pub version: &'static str,
    /// Priority order: earlier categories win ties.
    pub categories: Vec<TaxonomyCategory>,
    pub radial_axis_headroom: usize,
}

/// GET /api/v1/taxonomy
pub async fn handle_get_taxonomy() -> Json<TaxonomyResponse> {
    Json(TaxonomyResponse {
        version: TAXONOMY_VERSION,
        categories: Category::ALL
            .into_iter()
            .map(|category| TaxonomyCategory {
                category,
                keywords: category.keywords(),
            })
            .collect(),
        radial_axis_headroom: RADIAL_AXIS_HEADROOM,
    })
}

/// POST /api/v1/breakdown
pub async fn handle_breakdown(
    State(state): State<AppState>,
    Json(input): Json<AnalysisInput>,
) -> Result<Json<SkillBreakdown>, AppError> {
    let limit = state.config.max_skills_per_list;
    for (name, list) in [
        ("coveredSkills", &input.covered_skills),
        ("missingSkills", &input.missing_skills),
    ] {
        if list.len() > limit {
            return Err(AppError::Validation(format!(
                "{name} has {} entries; at most {limit} are accepted",
                list.len()
            )));
        }
    }

    let breakdown = build_breakdown_with(state.classifier.as_ref(), &input);
    info!(
        analysis_id = input.analysis_id.as_deref().unwrap_or("-"),
        covered = breakdown.overall.covered_count,
        missing = breakdown.overall.missing_count,
        "Built skill breakdown"
    );
    Ok(Json(breakdown))
}
