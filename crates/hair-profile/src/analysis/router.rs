use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::{AnalysisId, QuestionnaireAnswers};
use super::questionnaire::{questions, QuestionnaireError};
use super::repository::{AnalysisRepository, AnalysisView, RepositoryError};
use super::service::{AnalysisServiceError, HairAnalysisService};

/// Number of analyses returned by the listing endpoint.
pub const RECENT_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct PhotoHairTypeRequest {
    pub hair_type: String,
}

/// Router builder exposing the quiz catalog and the analysis endpoints.
pub fn analysis_router<R>(service: Arc<HairAnalysisService<R>>) -> Router
where
    R: AnalysisRepository + 'static,
{
    Router::new()
        .route("/api/v1/hair/questions", get(questions_handler))
        .route(
            "/api/v1/hair/analyses",
            post(submit_handler::<R>).get(recent_handler::<R>),
        )
        .route(
            "/api/v1/hair/analyses/:analysis_id",
            get(analysis_handler::<R>),
        )
        .route(
            "/api/v1/hair/analyses/:analysis_id/hair-type",
            put(photo_hair_type_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler() -> Response {
    (StatusCode::OK, Json(questions())).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<HairAnalysisService<R>>>,
    Json(answers): Json<QuestionnaireAnswers>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    match service.submit(answers) {
        Ok(record) => (StatusCode::CREATED, Json(record.view())).into_response(),
        Err(AnalysisServiceError::Questionnaire(error)) => {
            let QuestionnaireError::Incomplete { missing } = &error;
            let payload = json!({
                "error": error.to_string(),
                "missing": missing.iter().map(|question| question.key()).collect::<Vec<_>>(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(AnalysisServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "analysis already exists",
            });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn recent_handler<R>(
    State(service): State<Arc<HairAnalysisService<R>>>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    match service.recent(RECENT_LIMIT) {
        Ok(records) => {
            let views: Vec<AnalysisView> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn analysis_handler<R>(
    State(service): State<Arc<HairAnalysisService<R>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn photo_hair_type_handler<R>(
    State(service): State<Arc<HairAnalysisService<R>>>,
    Path(analysis_id): Path<String>,
    Json(request): Json<PhotoHairTypeRequest>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.apply_photo_hair_type(&id, &request.hair_type) {
        Ok(record) => (StatusCode::OK, Json(record.view())).into_response(),
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

fn not_found(id: &AnalysisId) -> Response {
    let payload = json!({
        "analysis_id": id.0,
        "error": "analysis not found",
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn internal_error(error: AnalysisServiceError) -> Response {
    warn!(%error, "hair analysis request failed");
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
