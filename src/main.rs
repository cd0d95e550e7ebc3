//! Cross-Router Arbitrage Bot - Main Entry Point
//!
//! Monitors token pairs across two DEX routers on Sepolia, validates
//! detected spreads against the executor contract, and submits trades.

use alloy::signers::local::PrivateKeySigner;
use anyhow::Result;
use router_arb_bot::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;

    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    let monitored: Vec<String> = config
        .pairs
        .iter()
        .map(|spec| format!("{}/{}", spec.symbol_a, spec.symbol_b))
        .collect();

    info!("🤖 Cross-Router Arbitrage Bot v0.3.0");
    info!("📋 Configuration:");
    info!("   Network: Sepolia");
    info!("   Pairs: {}", monitored.join(", "));
    info!("   Reference Amount: {} base token units", config.reference_amount);
    info!("   Min Net Profit: {}", config.min_net_profit);
    info!("   Execute Floor: {}", config.min_execute_profit);
    info!(
        "   Validation Tolerance: {}%",
        config.validation_tolerance * Decimal::ONE_HUNDRED
    );
    info!("   Max Gas Price: {} gwei", config.max_gas_price_gwei);
    info!("   Cycle Interval: {}s", config.cycle_interval_secs);
    if config.max_cycles > 0 {
        info!("   Max Cycles: {}", config.max_cycles);
    }

    let signer = PrivateKeySigner::from_str(&config.private_key)
        .map_err(|e| BotError::Config(format!("PRIVATE_KEY is not a valid key: {e}")))?;
    let sender = signer.address();
    info!("   Sender: {}", sender);
    info!("   Executor Contract: {}", config.executor_address);

    // Setup network provider
    let provider = network::setup_provider(&config).await?;

    // Resolve token metadata for the configured pairs
    let pairs = quotes::init_monitored_pairs(&provider, &config).await?;

    let sampler = quotes::PriceSampler::new(
        Arc::new(quotes::RouterQuoter::new(
            provider.clone(),
            config.uniswap_router,
            DexId::UniswapV2,
        )),
        Arc::new(quotes::RouterQuoter::new(
            provider.clone(),
            config.sushiswap_router,
            DexId::Sushiswap,
        )),
    );
    let gas_oracle = Arc::new(network::ChainGasOracle::new(provider.clone()));
    let executor = Arc::new(contract::ArbExecutorContract::new(
        provider.clone(),
        &config,
        sender,
    ));
    let validator = validation::OpportunityValidator::new(executor.clone(), &config);
    let coordinator = execution::ExecutionCoordinator::new(executor);

    // Setup shutdown handler
    let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("\n📛 Received shutdown signal (Ctrl+C)...");
            let _ = stop_tx.send(true);
        }
    });

    let mut driver = driver::CycleDriver::new(
        config,
        pairs,
        sampler,
        gas_oracle,
        validator,
        coordinator,
        stop_rx,
    );
    let summary = driver.run().await;

    utils::print_session_summary(summary.cycles_run, &summary.stats);

    Ok(())
}
