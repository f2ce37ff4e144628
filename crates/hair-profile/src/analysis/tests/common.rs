use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::analysis::domain::{
    AnalysisId, Density, Elasticity, HairProfile, HairType, Porosity, ProductCompatibility,
    QuestionnaireAnswers, ScalpCondition, Thickness,
};
use crate::analysis::repository::{AnalysisRecord, AnalysisRepository, RepositoryError};
use crate::analysis::{analysis_router, HairAnalysisService};
use crate::config::AnalysisConfig;

/// Answers from the coily, high porosity walkthrough.
pub(super) fn coily_answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers::new()
        .with("pattern", "coily")
        .with("curl_diameter", "4b")
        .with("float_test", "high_porosity_confirmed")
        .with("density", "high_density")
        .with("thickness", "coarse")
        .with("elasticity", "low_elasticity")
        .with("scalp_condition", "dry_scalp")
        .with("product_buildup", "buildup_prone")
}

/// Every catalog question answered.
pub(super) fn complete_answers() -> QuestionnaireAnswers {
    coily_answers()
        .with("porosity", "high_porosity")
        .with("color_treatment", "virgin_hair")
        .with("frizz_tendency", "moderate_frizz")
}

pub(super) fn profile(hair_type: HairType) -> HairProfile {
    HairProfile {
        hair_type,
        porosity: Porosity::Medium,
        density: Density::Medium,
        thickness: Thickness::Medium,
        elasticity: Elasticity::Medium,
        scalp_condition: ScalpCondition::Balanced,
        product_compatibility: ProductCompatibility::Normal,
    }
}

pub(super) fn lenient_config() -> AnalysisConfig {
    AnalysisConfig {
        require_complete: false,
    }
}

pub(super) fn build_service(
    config: AnalysisConfig,
) -> (HairAnalysisService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = HairAnalysisService::new(repository.clone(), config);
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AnalysisId, AnalysisRecord>>>,
}

impl AnalysisRepository for MemoryRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.analysis_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.analysis_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.analysis_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<AnalysisRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.analysis_id.cmp(&a.analysis_id));
        records.truncate(limit);
        Ok(records)
    }
}

pub(super) struct ConflictRepository;

impl AnalysisRepository for ConflictRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AnalysisRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AnalysisRepository for UnavailableRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AnalysisRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn analysis_router_with_service(
    service: HairAnalysisService<MemoryRepository>,
) -> axum::Router {
    analysis_router(Arc::new(service))
}
