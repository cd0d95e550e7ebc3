//! Display and printing utilities

use crate::types::{ArbitrageOpportunity, ExecutionOutcome, ExecutionStats, ExecutionStatus};
use tracing::{error, info, warn};

pub fn print_arbitrage_opportunity(opportunity: &ArbitrageOpportunity) {
    warn!("\n🎯 ARBITRAGE OPPORTUNITY #{}", opportunity.id);
    warn!("📍 Pair: {}", opportunity.pair.symbol());
    warn!("📋 Strategy: {}", opportunity.direction);
    warn!("💰 Profit Analysis:");
    warn!("   Buy:  {} @ {:.6}", opportunity.buy_venue, opportunity.buy_price);
    warn!("   Sell: {} @ {:.6}", opportunity.sell_venue, opportunity.sell_price);
    warn!("   Spread: {:.4}%", opportunity.spread_pct);
    warn!("   Gross Profit: {:.6} {}", opportunity.gross_profit, opportunity.pair.token_b.symbol);
    warn!("   Gas Cost:     {:.6} {}", opportunity.gas_cost, opportunity.pair.token_b.symbol);
    warn!("   Net Profit:   {:.6} {}", opportunity.net_profit, opportunity.pair.token_b.symbol);
    warn!("   Confidence: {:.2}", opportunity.confidence);
}

pub fn print_execution_outcome(outcome: &ExecutionOutcome) {
    match outcome.status {
        ExecutionStatus::Success => {
            warn!("\n✅ TRADE EXECUTED #{}", outcome.opportunity_id);
            warn!("📍 Pair: {}", outcome.pair_symbol);
            if let Some(tx_hash) = &outcome.tx_hash {
                warn!("   Tx Hash: {}", tx_hash);
            }
            if let Some(gas_used) = outcome.gas_used {
                warn!("   Gas Used: {}", gas_used);
            }
            if let Some(profit) = outcome.realized_profit {
                warn!("   Realized Profit: {:.6}", profit);
            }
            warn!("   Execution Time: {}ms", outcome.execution_time_ms);
        }
        ExecutionStatus::InsufficientBalance => {
            error!("\n❌ TRADE SKIPPED #{} - insufficient balance", outcome.opportunity_id);
            if let Some(message) = &outcome.error_message {
                error!("   {}", message);
            }
        }
        ExecutionStatus::Failed => {
            error!("\n❌ TRADE EXECUTION FAILED #{}", outcome.opportunity_id);
            error!(
                "   Error: {}",
                outcome.error_message.as_deref().unwrap_or("Unknown")
            );
        }
    }
}

pub fn print_session_summary(cycles_run: u64, stats: &ExecutionStats) {
    info!("\n📈 Session Summary:");
    info!("   Total cycles: {}", cycles_run);
    info!("   Trades executed: {}", stats.trades_executed);
    info!("   Failed executions: {}", stats.failed_executions);
    info!("   Cumulative profit: {:.6}", stats.cumulative_profit);
}
