//! Typed endpoint wrappers for the catalog REST contract

use shared::{AiModel, AiModelPayload, ModelEnvelope};

use crate::error::ClientResult;
use crate::http::HttpTransport;

/// Typed access to the catalog endpoints over any transport.
#[derive(Debug, Clone)]
pub struct CatalogApi<T> {
    transport: T,
}

impl<T: HttpTransport> CatalogApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// `POST /api/aimodels/createModel`
    pub async fn create_model(&self, payload: &AiModelPayload) -> ClientResult<AiModel> {
        let resp: ModelEnvelope<AiModel> = self
            .transport
            .post("/api/aimodels/createModel", payload)
            .await?;
        Ok(resp.model)
    }

    /// `GET /api/aimodels/getModel/`
    ///
    /// The trailing slash is part of the server contract.
    pub async fn list_models(&self) -> ClientResult<Vec<AiModel>> {
        let resp: ModelEnvelope<Vec<AiModel>> =
            self.transport.get("/api/aimodels/getModel/").await?;
        Ok(resp.model)
    }

    /// `PUT /api/aimodels/updateModel/{id}`
    pub async fn update_model(&self, id: &str, payload: &AiModelPayload) -> ClientResult<AiModel> {
        let resp: ModelEnvelope<AiModel> = self
            .transport
            .put(&format!("/api/aimodels/updateModel/{id}"), payload)
            .await?;
        Ok(resp.model)
    }

    /// `DELETE /api/aimodels/deleteModel/{id}`
    ///
    /// The response is ignored beyond transport success.
    pub async fn delete_model(&self, id: &str) -> ClientResult<()> {
        self.transport
            .delete(&format!("/api/aimodels/deleteModel/{id}"))
            .await
    }
}
