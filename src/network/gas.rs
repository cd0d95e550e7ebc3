//! Chain gas price oracle

use crate::ConcreteProvider;
use crate::errors::{BotError, BotResult};
use alloy::providers::Provider;
use async_trait::async_trait;
use std::sync::Arc;

/// Current gas price source. The driver fetches once per cycle and reuses
/// the value for every evaluation in that cycle.
#[async_trait]
pub trait GasOracle: Send + Sync {
    async fn gas_price_wei(&self) -> BotResult<u128>;
}

pub struct ChainGasOracle {
    provider: Arc<ConcreteProvider>,
}

impl ChainGasOracle {
    pub fn new(provider: Arc<ConcreteProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl GasOracle for ChainGasOracle {
    async fn gas_price_wei(&self) -> BotResult<u128> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| BotError::Network {
                message: "Gas price fetch failed".to_string(),
                source: Some(e.into()),
                retry_count: 0,
            })
    }
}
