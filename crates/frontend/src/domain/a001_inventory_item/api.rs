use async_trait::async_trait;
use contracts::domain::a001_inventory_item::gateway::routes;
use contracts::domain::a001_inventory_item::{
    ApiError, InventoryGateway, InventoryItem, InventoryItemDto, InventoryItemId, ListResponse,
    MessageResponse,
};
use contracts::shared::config::ApiConfig;
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_config;

/// REST gateway of the stock backend
#[derive(Debug, Clone)]
pub struct HttpInventoryGateway {
    config: ApiConfig,
}

impl HttpInventoryGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

impl Default for HttpInventoryGateway {
    fn default() -> Self {
        Self::new(api_config().clone())
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("Failed to send request: {}", e))
}

fn serialize(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(format!("Failed to serialize request: {}", e))
}

/// Non-2xx responses become `ApiError::Status`, keeping the backend's
/// `message` when the body carries one
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<MessageResponse>(&body).ok())
        .and_then(|body| body.message);
    Err(ApiError::Status { status, message })
}

#[async_trait(?Send)]
impl InventoryGateway for HttpInventoryGateway {
    async fn fetch_all(&self) -> Result<Vec<InventoryItem>, ApiError> {
        let response = Request::get(&self.url(routes::LIST))
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(network)?;
        let response = ensure_ok(response).await?;

        response
            .json::<ListResponse>()
            .await
            .map(|list| list.data)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, dto: &InventoryItemDto) -> Result<MessageResponse, ApiError> {
        let response = Request::post(&self.url(routes::CREATE))
            .json(dto)
            .map_err(serialize)?
            .send()
            .await
            .map_err(network)?;
        let response = ensure_ok(response).await?;

        // the body is informational only; an empty one is still a success
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<MessageResponse>(&body).unwrap_or_default())
    }

    async fn update(&self, id: &InventoryItemId, dto: &InventoryItemDto) -> Result<(), ApiError> {
        let response = Request::put(&self.url(&routes::update(id)))
            .json(dto)
            .map_err(serialize)?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &InventoryItemId) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&routes::delete(id)))
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await?;
        Ok(())
    }
}
