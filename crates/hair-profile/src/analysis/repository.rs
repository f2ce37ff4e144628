use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnalysisId, AnalysisSource, HairAnalysisResult, QuestionnaireAnswers};
use super::insights::ProfileInsights;

/// Stored analysis with the answers it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: AnalysisId,
    pub answers: QuestionnaireAnswers,
    pub result: HairAnalysisResult,
    pub source: AnalysisSource,
    pub recorded_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn view(&self) -> AnalysisView {
        AnalysisView {
            analysis_id: self.analysis_id.clone(),
            source: self.source.label(),
            recorded_at: self.recorded_at,
            result: self.result.clone(),
            insights: ProfileInsights::for_result(&self.result),
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait AnalysisRepository: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;
    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError>;
    /// Most recently recorded first.
    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Response payload for a stored analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub analysis_id: AnalysisId,
    pub source: &'static str,
    pub recorded_at: DateTime<Utc>,
    pub result: HairAnalysisResult,
    pub insights: ProfileInsights,
}
