use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    service::CutCardService,
    types::{CutCardRequest, CutCardResponse, StackEntry},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for computing a cut
///
/// POST /cutcard
/// Reads a card and a target position from `text` and returns where to cut
#[instrument(name = "cut_card", skip(state, payload))]
pub async fn cut_card(
    State(state): State<AppState>,
    payload: Result<Json<CutCardRequest>, JsonRejection>,
) -> Result<Json<CutCardResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, status = %rejection.status(), "Rejected request body");
        AppError::InvalidBody(rejection.status(), rejection.body_text())
    })?;

    info!(text = ?request.text, "Computing cut");

    let service = CutCardService::new(state.stack, Arc::clone(&state.extractor));
    let response = service.cut_card(request.text.as_deref())?;

    Ok(Json(response))
}

/// HTTP handler for listing the stack
///
/// GET /stack
#[instrument(name = "list_stack", skip(state))]
pub async fn list_stack(State(state): State<AppState>) -> Json<Vec<StackEntry>> {
    let service = CutCardService::new(state.stack, Arc::clone(&state.extractor));
    Json(service.list_stack())
}
