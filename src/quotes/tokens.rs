//! Startup token metadata resolution

use crate::{
    ConcreteProvider,
    config::{Config, PairSpec},
    errors::{BotError, BotResult},
    network::retry::{RetryConfig, retry_with_backoff},
    types::{MonitoredPair, TokenInfo},
    utils::to_base_units,
};
use alloy::{
    primitives::{Address, keccak256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::{SolType, sol_data},
};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

lazy_static! {
    static ref DECIMALS_SELECTOR: Vec<u8> = keccak256("decimals()")[..4].to_vec();
}

async fn fetch_decimals(provider: &dyn Provider, token: Address) -> Result<u8> {
    let tx = TransactionRequest::default()
        .to(token)
        .input(DECIMALS_SELECTOR.clone().into());

    let result = provider.call(&tx).await.context("Failed to call decimals")?;
    <sol_data::Uint<8>>::abi_decode(&result, true).context("Failed to decode decimals")
}

/// Resolves a token's decimals on-chain, with retries. Decimals are a
/// stable fact; this runs once per token at startup.
pub async fn resolve_token(
    provider: &Arc<ConcreteProvider>,
    symbol: &str,
    address: Address,
) -> BotResult<TokenInfo> {
    let decimals = retry_with_backoff(
        || async { fetch_decimals(provider.as_ref(), address).await },
        &RetryConfig::default(),
        &format!("decimals for {}", symbol),
    )
    .await?;

    Ok(TokenInfo {
        symbol: symbol.to_string(),
        address,
        decimals,
    })
}

/// Builds the monitored-pair set from the configured specs. Pairs whose
/// metadata cannot be resolved are skipped with an error log; an empty
/// surviving set is fatal.
pub async fn init_monitored_pairs(
    provider: &Arc<ConcreteProvider>,
    config: &Config,
) -> BotResult<Vec<MonitoredPair>> {
    info!("\n🔍 Resolving metadata for {} configured pairs...", config.pairs.len());

    let mut cache: HashMap<Address, TokenInfo> = HashMap::new();
    let mut pairs = Vec::new();
    let mut failures = 0usize;

    for spec in &config.pairs {
        match build_pair(provider, spec, config, &mut cache).await {
            Ok(pair) => {
                info!(
                    "✅ {} - decimals {}/{}, reference input {} base units",
                    pair.symbol(),
                    pair.token_a.decimals,
                    pair.token_b.decimals,
                    pair.amount_in
                );
                pairs.push(pair);
            }
            Err(e) => {
                error!(
                    "❌ {}/{} - metadata resolution failed: {}",
                    spec.symbol_a, spec.symbol_b, e
                );
                failures += 1;
            }
        }
    }

    if pairs.is_empty() {
        return Err(BotError::Config(
            "no configured pair survived metadata resolution".to_string(),
        ));
    }

    info!("✅ Monitoring {} pairs (failed: {})", pairs.len(), failures);
    Ok(pairs)
}

async fn build_pair(
    provider: &Arc<ConcreteProvider>,
    spec: &PairSpec,
    config: &Config,
    cache: &mut HashMap<Address, TokenInfo>,
) -> BotResult<MonitoredPair> {
    let token_a = resolve_cached(provider, &spec.symbol_a, spec.token_a, cache).await?;
    let token_b = resolve_cached(provider, &spec.symbol_b, spec.token_b, cache).await?;

    let amount_in =
        to_base_units(config.reference_amount, token_a.decimals).ok_or_else(|| {
            BotError::DataParsing {
                context: format!(
                    "reference amount {} does not fit {} base units",
                    config.reference_amount, token_a.symbol
                ),
                source: anyhow::anyhow!("decimal overflow"),
            }
        })?;

    Ok(MonitoredPair {
        token_a,
        token_b,
        amount_in,
        liquidity_hint: config.liquidity_hint,
    })
}

async fn resolve_cached(
    provider: &Arc<ConcreteProvider>,
    symbol: &str,
    address: Address,
    cache: &mut HashMap<Address, TokenInfo>,
) -> BotResult<TokenInfo> {
    if let Some(info) = cache.get(&address) {
        return Ok(info.clone());
    }
    let info = resolve_token(provider, symbol, address).await?;
    cache.insert(address, info.clone());
    Ok(info)
}
