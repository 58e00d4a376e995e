use serde::{Deserialize, Serialize};

/// A learning resource suggested by the upstream analysis service.
/// Carried through to the breakdown untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub platform: String,
    pub url: String,
}

/// Result of the upstream skill-gap analysis, as handed to the breakdown engine.
///
/// Only `covered_skills` and `missing_skills` feed the math. Everything else is display
/// data passed through unmodified. Snake-case aliases accept the upstream record shape
/// (`covered_skills`, `skill_coverage_percentage`, ...) as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    #[serde(default, alias = "analysis_id")]
    pub analysis_id: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default, alias = "covered_skills")]
    pub covered_skills: Vec<String>,
    #[serde(default, alias = "missing_skills")]
    pub missing_skills: Vec<String>,
    /// Coverage as computed upstream, possibly against a larger skill universe.
    #[serde(default, alias = "skill_coverage_percentage")]
    pub external_coverage_percent: Option<f64>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}
