//! Hair quiz classification, attribute resolution, maintenance scoring, and care
//! recommendations, plus the service and HTTP seams around them.

pub mod domain;
pub mod engine;
pub mod external;
pub mod import;
pub mod insights;
pub mod questionnaire;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnalysisId, AnalysisSource, Density, Elasticity, HairAnalysisResult, HairFamily, HairProfile,
    HairType, MaintenanceLevel, Porosity, ProductCompatibility, QuestionnaireAnswers,
    ScalpCondition, Thickness, UnknownLabel,
};
pub use engine::{HairAnalysisEngine, HairAttributes, MaintenanceScore};
pub use import::{import_answers_csv, import_answers_csv_path, AnswerImportError};
pub use insights::{Insight, ProfileInsights};
pub use questionnaire::{QuestionId, QuestionnaireError};
pub use repository::{AnalysisRecord, AnalysisRepository, AnalysisView, RepositoryError};
pub use router::analysis_router;
pub use service::{AnalysisServiceError, HairAnalysisService};

/// Runs the full pipeline over `answers` with the default engine.
pub fn analyze(answers: &QuestionnaireAnswers) -> HairAnalysisResult {
    HairAnalysisEngine::new().analyze(answers)
}
