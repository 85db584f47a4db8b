use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use super::types::{CutCardResponse, StackEntry};
use crate::{
    cut::{compute, CutError},
    extract::{ExtractError, Extractor},
    shared::AppError,
    stack::Stack,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CutCardError {
    #[error("Text is required")]
    MissingInput,

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Cut(#[from] CutError),
}

impl From<CutCardError> for AppError {
    fn from(error: CutCardError) -> Self {
        match error {
            CutCardError::MissingInput | CutCardError::Extract(_) => {
                AppError::BadRequest(error.to_string())
            }
            CutCardError::Cut(_) => AppError::NotFound(error.to_string()),
        }
    }
}

/// Service turning request text into a cut
pub struct CutCardService {
    stack: &'static Stack,
    extractor: Arc<Extractor>,
}

impl CutCardService {
    pub fn new(stack: &'static Stack, extractor: Arc<Extractor>) -> Self {
        Self { stack, extractor }
    }

    #[instrument(skip(self))]
    pub fn cut_card(&self, text: Option<&str>) -> Result<CutCardResponse, CutCardError> {
        let text = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(CutCardError::MissingInput),
        };

        let extraction = self.extractor.extract(text).inspect_err(|e| {
            warn!(error = %e, "Could not read card and position");
        })?;

        let outcome =
            compute(self.stack, &extraction.card, extraction.position).inspect_err(|e| {
                error!(error = %e, "Extracted card is missing from the stack");
            })?;

        info!(
            card = %extraction.card,
            card_position = %outcome.card_position,
            target_position = %extraction.position,
            cut_position = %outcome.cut_position,
            "Cut computed"
        );

        Ok(CutCardResponse::new(
            text.to_string(),
            extraction.card,
            extraction.position,
            outcome,
        ))
    }

    pub fn list_stack(&self) -> Vec<StackEntry> {
        self.stack
            .cards()
            .map(|(position, card)| StackEntry { position, card })
            .collect()
    }
}
