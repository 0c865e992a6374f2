//! Transport client contract and an in-memory implementation.
//!
//! Transport failures stay on this side of the boundary: the gateway
//! surfaces them as [`TransportError`] values and never throws into the
//! bus dispatch path. Order payloads are assembled purely from store
//! state, so a failed submission can simply be retried.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use stallfront_core::{OrderPayload, OrderReceipt, Product};

#[derive(Debug, Error)]
pub enum TransportError {
    /// The backend could not be reached or answered malformed data.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend refused the order.
    #[error("order rejected: {0}")]
    Rejected(String),
}

/// Gateway configuration.
///
/// Catalog image references arrive relative; the gateway resolves them
/// against `asset_base` so consumers always see absolute references.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    pub asset_base: String,
}

/// Product/order transport client.
///
/// Both operations are asynchronous and report failure as a distinct
/// error outcome.
#[async_trait]
pub trait StorefrontGateway {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, TransportError>;

    async fn submit_order(&self, order: &OrderPayload) -> Result<OrderReceipt, TransportError>;
}

/// Deterministic in-process gateway for tests and development.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    config: GatewayConfig,
    products: Vec<Product>,
}

impl InMemoryGateway {
    pub fn new(config: GatewayConfig, products: Vec<Product>) -> Self {
        Self { config, products }
    }
}

#[async_trait]
impl StorefrontGateway for InMemoryGateway {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, TransportError> {
        Ok(self
            .products
            .iter()
            .cloned()
            .map(|mut product| {
                product.image = format!("{}{}", self.config.asset_base, product.image);
                product
            })
            .collect())
    }

    async fn submit_order(&self, order: &OrderPayload) -> Result<OrderReceipt, TransportError> {
        if order.items.is_empty() {
            return Err(TransportError::Rejected("order has no items".to_string()));
        }
        if order.total == 0 {
            return Err(TransportError::Rejected("order total is zero".to_string()));
        }

        let receipt = OrderReceipt {
            id: Uuid::now_v7(),
            total: order.total,
            placed_at: Utc::now(),
        };
        info!(order_id = %receipt.id, total = receipt.total, "order accepted");
        Ok(receipt)
    }
}
