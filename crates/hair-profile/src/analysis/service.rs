use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{AnalysisId, AnalysisSource, HairType, QuestionnaireAnswers};
use super::engine::HairAnalysisEngine;
use super::questionnaire::{ensure_complete, QuestionnaireError};
use super::repository::{AnalysisRecord, AnalysisRepository, RepositoryError};
use crate::config::AnalysisConfig;

/// Service composing the completeness check, the engine, and the repository.
pub struct HairAnalysisService<R> {
    repository: Arc<R>,
    engine: HairAnalysisEngine,
    config: AnalysisConfig,
}

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("analysis-{id:06}"))
}

impl<R> HairAnalysisService<R>
where
    R: AnalysisRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AnalysisConfig) -> Self {
        Self {
            repository,
            engine: HairAnalysisEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> AnalysisConfig {
        self.config
    }

    /// Analyze a submitted questionnaire and store the outcome.
    pub fn submit(
        &self,
        answers: QuestionnaireAnswers,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        if self.config.require_complete {
            ensure_complete(&answers)?;
        }

        let result = self.engine.analyze(&answers);
        let record = AnalysisRecord {
            analysis_id: next_analysis_id(),
            answers,
            result,
            source: AnalysisSource::Questionnaire,
            recorded_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            analysis_id = %stored.analysis_id,
            hair_type = stored.result.hair_type.label(),
            maintenance_level = stored.result.maintenance_level.label(),
            "hair analysis recorded"
        );
        Ok(stored)
    }

    /// Replace the questionnaire hair type with one reported by photo classification
    /// and recompute maintenance and recommendations from the stored answers.
    pub fn apply_photo_hair_type(
        &self,
        analysis_id: &AnalysisId,
        external_label: &str,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        let mut record = self
            .repository
            .fetch(analysis_id)?
            .ok_or(RepositoryError::NotFound)?;

        let hair_type = HairType::from_external_label(external_label);
        record.result = self
            .engine
            .analyze_with_hair_type(&record.answers, hair_type);
        record.source = AnalysisSource::Photo;
        record.recorded_at = Utc::now();

        self.repository.update(record.clone())?;
        info!(
            analysis_id = %record.analysis_id,
            external_label,
            hair_type = hair_type.label(),
            "photo hair type applied"
        );
        Ok(record)
    }

    pub fn get(&self, analysis_id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(analysis_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, AnalysisServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
