//! Oneshot HTTP transport - in-memory communication
//!
//! Requires the "in-process" feature.

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use http::{Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpTransport;

/// Oneshot HTTP transport (in-memory calls)
///
/// Drives an `axum::Router` directly through Tower's oneshot mode.
/// Suited to same-process server-client communication and to exercising
/// the sync engine in tests with zero network overhead.
#[derive(Debug, Clone)]
pub struct OneshotTransport {
    router: Router,
}

impl OneshotTransport {
    /// Create a new oneshot transport over an already-built router
    /// (`with_state` applied).
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(method: http::Method, path: &str) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::empty())
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    fn build_request_with_body<B: Serialize>(
        method: http::Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let body_bytes = serde_json::to_vec(body)?;
        Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_bytes))
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    async fn dispatch(&self, request: Request<Body>) -> ClientResult<(StatusCode, Bytes)> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;
        Ok((status, body_bytes))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let (status, body_bytes) = self.dispatch(request).await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ClientError::Request {
                status: status.as_u16(),
                message: text,
            });
        }

        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
    }
}

#[async_trait]
impl HttpTransport for OneshotTransport {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = Self::build_request(http::Method::GET, path)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = Self::build_request_with_body(http::Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = Self::build_request_with_body(http::Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = Self::build_request(http::Method::DELETE, path)?;
        // Status intentionally not consulted, matching the network transport
        let _ = self.dispatch(request).await?;
        Ok(())
    }
}
