use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use repwatch_analysis::{AnalysisError, BatchRequest, BatchResult, ProcessOutcome};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// `data` is the batch result, or `{}` when no mentions were submitted.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(super) enum BatchData {
    Processed(BatchResult),
    Empty(EmptyData),
}

#[derive(Debug, Serialize)]
pub(super) struct EmptyData {}

pub(super) async fn process_batch(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BatchData>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::info!(request_id = %req_id.0, error = %rejection, "rejected batch body");
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let outcome = state
        .processor
        .process(request)
        .await
        .map_err(|e| map_analysis_error(req_id.0.clone(), &e))?;

    let meta = ResponseMeta::new(req_id.0);
    let response = match outcome {
        ProcessOutcome::Processed(result) => ApiResponse::ok(BatchData::Processed(result), meta),
        ProcessOutcome::NoMentions => ApiResponse {
            message: Some("no mentions provided"),
            ..ApiResponse::ok(BatchData::Empty(EmptyData {}), meta)
        },
    };
    Ok(Json(response))
}

fn map_analysis_error(request_id: String, error: &AnalysisError) -> ApiError {
    match error {
        AnalysisError::EmptyBatch { .. } => {
            tracing::info!(request_id = %request_id, error = %error, "batch failed validation");
            ApiError::new(request_id, "validation_error", error.to_string())
        }
    }
}
