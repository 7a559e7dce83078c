use super::aggregate::{InventoryItem, InventoryItemDto, InventoryItemId, MessageResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } if !m.trim().is_empty() => Some(m.as_str()),
            _ => None,
        }
    }

    /// Backend message when present, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Persistence collaborator of the stock table and the create form.
///
/// Futures are not `Send`: the browser implementation runs on the single
/// UI thread.
#[async_trait(?Send)]
pub trait InventoryGateway {
    /// All records in backend order
    async fn fetch_all(&self) -> Result<Vec<InventoryItem>, ApiError>;

    async fn create(&self, dto: &InventoryItemDto) -> Result<MessageResponse, ApiError>;

    async fn update(&self, id: &InventoryItemId, dto: &InventoryItemDto) -> Result<(), ApiError>;

    async fn delete(&self, id: &InventoryItemId) -> Result<(), ApiError>;
}

/// REST paths of the inventory backend
pub mod routes {
    use crate::domain::common::AggregateId;

    pub const LIST: &str = "/api/v1/invoices/getall";
    pub const CREATE: &str = "/api/v1/invoices/create";

    pub fn update(id: &impl AggregateId) -> String {
        format!("/api/v1/invoices/update/{}", id.path_segment())
    }

    pub fn delete(id: &impl AggregateId) -> String {
        format!("/api/v1/invoices/delete/{}", id.path_segment())
    }
}
