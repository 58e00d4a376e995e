use std::sync::Arc;

use crate::config::Config;
use crate::taxonomy::classifier::SkillClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill classifier. Default: KeywordClassifier.
    pub classifier: Arc<dyn SkillClassifier>,
}
