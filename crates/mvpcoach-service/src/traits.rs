use async_trait::async_trait;
use mvpcoach_core::{CoachRequest, CoachResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Abstraction over the coaching exchange.
///
/// The server wires `LocalService` behind its routes.
/// `HttpService` wraps an async HTTP client against a running server.
#[async_trait]
pub trait CoachService: Send + Sync {
    async fn advance(&self, request: &CoachRequest) -> Result<CoachResponse, ServiceError>;
}
