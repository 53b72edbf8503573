use async_trait::async_trait;
use mvpcoach_core::{flow, CoachError, CoachRequest, CoachResponse};

use crate::{CoachService, ServiceError};

/// Local implementation backed by a direct call into the flow engine.
#[derive(Debug, Clone, Default)]
pub struct LocalService;

impl LocalService {
    pub fn new() -> Self {
        Self
    }
}

impl From<CoachError> for ServiceError {
    fn from(e: CoachError) -> Self {
        match e {
            CoachError::InvalidStage(_) => ServiceError::InvalidInput(e.to_string()),
            CoachError::MissingPlaceholder(_) => ServiceError::Internal(e.to_string()),
        }
    }
}

#[async_trait]
impl CoachService for LocalService {
    async fn advance(&self, request: &CoachRequest) -> Result<CoachResponse, ServiceError> {
        Ok(flow::advance(request)?)
    }
}
