use hair_profile::analysis::{AnalysisId, AnalysisRecord, AnalysisRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct AnalysisStore {
    records: HashMap<AnalysisId, AnalysisRecord>,
    /// Ids in insertion order, oldest first.
    order: Vec<AnalysisId>,
}

/// Process-local store; `recent` follows insertion order rather than id spelling.
#[derive(Default, Clone)]
pub(crate) struct InMemoryAnalysisRepository {
    store: Arc<Mutex<AnalysisStore>>,
}

impl InMemoryAnalysisRepository {
    fn lock(&self) -> Result<MutexGuard<'_, AnalysisStore>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl AnalysisRepository for InMemoryAnalysisRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.records.contains_key(&record.analysis_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.order.push(record.analysis_id.clone());
        guard
            .records
            .insert(record.analysis_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AnalysisRecord) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        match guard.records.get_mut(&record.analysis_id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.records.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .order
            .iter()
            .rev()
            .filter_map(|id| guard.records.get(id).cloned())
            .take(limit)
            .collect())
    }
}

/// Parses a `question=value` pair from the command line. Both sides are trimmed and
/// lowercased to match the catalog spelling.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=VALUE, got '{raw}'"))?;
    let question = question.trim().to_ascii_lowercase();
    if question.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }
    Ok((question, value.trim().to_ascii_lowercase()))
}
