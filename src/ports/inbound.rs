//! These traits define what the application can do.

use async_trait::async_trait;

use crate::http::{Request, Response};

/// Inbound port for request handlers.
#[async_trait]
pub trait Controller: Send + Sync {
    /// Handle a request. Never fails: every outcome is a [`Response`].
    async fn handle(&self, request: Request) -> Response;
}
