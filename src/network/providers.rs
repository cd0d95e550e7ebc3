//! Network provider setup

use crate::{
    ConcreteProvider,
    config::Config,
    network::retry::{RetryConfig, retry_with_backoff},
};
use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Builds the shared HTTP provider and verifies the chain is reachable.
/// A connection that cannot be established here is fatal for the run.
pub async fn setup_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(config.rpc_url.parse()?)
            .boxed(),
    );

    info!("🔗 Testing connection to Sepolia...");
    let block = retry_with_backoff(
        || async {
            provider
                .get_block_number()
                .await
                .context("Failed to get block number")
        },
        &RetryConfig::startup(),
        "Sepolia connection",
    )
    .await?;

    info!("✅ Connected to Sepolia at block {}", block);
    Ok(provider)
}
