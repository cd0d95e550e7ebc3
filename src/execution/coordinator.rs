//! Trade execution with balance guard and running totals

use crate::contract::ArbExecutorApi;
use crate::types::{ArbitrageOpportunity, ExecutionOutcome, ExecutionStats, ExecutionStatus};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Owns the single execution identity's running totals. Every submission
/// in a session goes through this coordinator, one at a time.
pub struct ExecutionCoordinator {
    contract: Arc<dyn ArbExecutorApi>,
    stats: ExecutionStats,
}

impl ExecutionCoordinator {
    pub fn new(contract: Arc<dyn ArbExecutorApi>) -> Self {
        Self {
            contract,
            stats: ExecutionStats::default(),
        }
    }

    pub fn stats(&self) -> &ExecutionStats {
        &self.stats
    }

    /// One submission attempt for a validated opportunity. Never retries;
    /// a later cycle has to re-detect and re-validate before trying again.
    pub async fn execute(&mut self, opp: &ArbitrageOpportunity) -> ExecutionOutcome {
        let started = Instant::now();
        let trade = opp.trade_request();

        info!("🚀 Executing {} arbitrage {}", opp.pair.symbol(), opp.id);

        let balance = match self.contract.token_balance(trade.token_a).await {
            Ok(balance) => balance,
            Err(e) => {
                warn!("❌ {} balance check failed: {}", opp.pair.symbol(), e);
                let outcome = self.failed(
                    opp,
                    ExecutionStatus::Failed,
                    None,
                    None,
                    format!("balance check failed: {e}"),
                    started,
                );
                return self.record(outcome);
            }
        };

        if balance < trade.amount_in {
            warn!(
                "❌ {} contract balance too low: {} available, {} required",
                opp.pair.symbol(),
                balance,
                trade.amount_in
            );
            let outcome = self.failed(
                opp,
                ExecutionStatus::InsufficientBalance,
                None,
                None,
                format!("contract holds {balance}, trade needs {}", trade.amount_in),
                started,
            );
            return self.record(outcome);
        }

        let outcome = match self.contract.execute_arbitrage(&trade).await {
            Ok(submitted) if submitted.success => {
                self.stats.trades_executed += 1;
                self.stats.cumulative_profit += opp.net_profit;
                ExecutionOutcome {
                    opportunity_id: opp.id.clone(),
                    timestamp: Utc::now(),
                    pair_symbol: opp.pair.symbol(),
                    buy_venue: opp.buy_venue,
                    sell_venue: opp.sell_venue,
                    status: ExecutionStatus::Success,
                    tx_hash: Some(submitted.tx_hash),
                    gas_used: Some(submitted.gas_used),
                    realized_profit: Some(opp.net_profit),
                    error_message: None,
                    execution_time_ms: started.elapsed().as_millis() as u64,
                }
            }
            Ok(submitted) => self.failed(
                opp,
                ExecutionStatus::Failed,
                Some(submitted.tx_hash),
                Some(submitted.gas_used),
                "transaction reverted on chain".to_string(),
                started,
            ),
            Err(e) => {
                let tx_hash = e.transaction_hash();
                self.failed(opp, ExecutionStatus::Failed, tx_hash, None, e.to_string(), started)
            }
        };

        self.record(outcome)
    }

    fn failed(
        &self,
        opp: &ArbitrageOpportunity,
        status: ExecutionStatus,
        tx_hash: Option<String>,
        gas_used: Option<u64>,
        error: String,
        started: Instant,
    ) -> ExecutionOutcome {
        ExecutionOutcome {
            opportunity_id: opp.id.clone(),
            timestamp: Utc::now(),
            pair_symbol: opp.pair.symbol(),
            buy_venue: opp.buy_venue,
            sell_venue: opp.sell_venue,
            status,
            tx_hash,
            gas_used,
            realized_profit: None,
            error_message: Some(error),
            execution_time_ms: started.elapsed().as_millis() as u64,
        }
    }

    /// Journals the outcome as a JSON line and folds it into the totals.
    fn record(&mut self, outcome: ExecutionOutcome) -> ExecutionOutcome {
        if outcome.status != ExecutionStatus::Success {
            self.stats.failed_executions += 1;
        }
        match serde_json::to_string(&outcome) {
            Ok(line) => info!(target: "trade_journal", "{}", line),
            Err(e) => warn!("could not serialize execution outcome: {}", e),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{BotError, BotResult};
    use crate::types::{DexId, MonitoredPair, SubmittedTrade, TokenInfo, TradeDirection, TradeRequest};
    use alloy::primitives::{Address, U256};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingExecutor {
        balance: BotResult<U256>,
        submit_success: bool,
        submit_fails: bool,
        submissions: AtomicUsize,
    }

    impl RecordingExecutor {
        fn with_balance(balance: U256) -> Self {
            Self {
                balance: Ok(balance),
                submit_success: true,
                submit_fails: false,
                submissions: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ArbExecutorApi for RecordingExecutor {
        async fn check_opportunity(&self, _trade: &TradeRequest) -> BotResult<U256> {
            Ok(U256::ZERO)
        }

        async fn execute_arbitrage(&self, _trade: &TradeRequest) -> BotResult<SubmittedTrade> {
            self.submissions.fetch_add(1, Ordering::SeqCst);
            if self.submit_fails {
                return Err(BotError::Execution {
                    message: "transaction submit failed: nonce too low".to_string(),
                    tx_hash: None,
                });
            }
            Ok(SubmittedTrade {
                tx_hash: "0xabc123".to_string(),
                success: self.submit_success,
                gas_used: 180_000,
            })
        }

        async fn token_balance(&self, _token: Address) -> BotResult<U256> {
            match &self.balance {
                Ok(balance) => Ok(*balance),
                Err(_) => Err(BotError::Contract {
                    contract: Address::ZERO,
                    message: "getTokenBalance call failed".to_string(),
                    source: anyhow::anyhow!("connection refused"),
                }),
            }
        }
    }

    fn opportunity(net: Decimal) -> ArbitrageOpportunity {
        let pair = MonitoredPair {
            token_a: TokenInfo {
                symbol: "WETH".to_string(),
                address: Address::repeat_byte(0xaa),
                decimals: 18,
            },
            token_b: TokenInfo {
                symbol: "USDC".to_string(),
                address: Address::repeat_byte(0xbb),
                decimals: 6,
            },
            amount_in: U256::from(1_000_000_000_000_000_000u128),
            liquidity_hint: dec!(1),
        };
        ArbitrageOpportunity {
            id: "opp-1".to_string(),
            timestamp: Utc::now(),
            pair: pair.clone(),
            buy_venue: DexId::UniswapV2,
            sell_venue: DexId::Sushiswap,
            direction: TradeDirection::BuyFirstSellSecond,
            buy_price: dec!(3000),
            sell_price: dec!(3050),
            spread_pct: dec!(1.67),
            amount_in: pair.amount_in,
            gross_profit: net + dec!(0.002),
            gas_cost: dec!(0.002),
            net_profit: net,
            confidence: dec!(0.7),
        }
    }

    fn ample_balance() -> U256 {
        U256::from(2_000_000_000_000_000_000u128)
    }

    #[tokio::test]
    async fn successful_trade_updates_running_totals() {
        let contract = Arc::new(RecordingExecutor::with_balance(ample_balance()));
        let mut coordinator = ExecutionCoordinator::new(contract.clone());

        let first = coordinator.execute(&opportunity(dec!(0.014))).await;
        let second = coordinator.execute(&opportunity(dec!(0.010))).await;

        assert_eq!(first.status, ExecutionStatus::Success);
        assert_eq!(first.realized_profit, Some(dec!(0.014)));
        assert_eq!(first.tx_hash.as_deref(), Some("0xabc123"));
        assert_eq!(second.gas_used, Some(180_000));

        let stats = coordinator.stats();
        assert_eq!(stats.trades_executed, 2);
        assert_eq!(stats.cumulative_profit, dec!(0.024));
        assert_eq!(stats.failed_executions, 0);
        assert_eq!(contract.submissions.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn insufficient_balance_skips_submission() {
        // 0.5 available against a 1.0 trade
        let contract = Arc::new(RecordingExecutor::with_balance(U256::from(
            500_000_000_000_000_000u128,
        )));
        let mut coordinator = ExecutionCoordinator::new(contract.clone());

        let outcome = coordinator.execute(&opportunity(dec!(0.014))).await;

        assert_eq!(outcome.status, ExecutionStatus::InsufficientBalance);
        assert!(outcome.tx_hash.is_none());
        assert!(outcome.error_message.unwrap().contains("trade needs"));
        assert_eq!(contract.submissions.load(Ordering::SeqCst), 0);

        let stats = coordinator.stats();
        assert_eq!(stats.trades_executed, 0);
        assert_eq!(stats.cumulative_profit, Decimal::ZERO);
        assert_eq!(stats.failed_executions, 1);
    }

    #[tokio::test]
    async fn reverted_transaction_counts_as_failed() {
        let mut contract = RecordingExecutor::with_balance(ample_balance());
        contract.submit_success = false;
        let contract = Arc::new(contract);
        let mut coordinator = ExecutionCoordinator::new(contract.clone());

        let outcome = coordinator.execute(&opportunity(dec!(0.014))).await;

        assert_eq!(outcome.status, ExecutionStatus::Failed);
        assert_eq!(outcome.tx_hash.as_deref(), Some("0xabc123"));
        assert!(outcome.realized_profit.is_none());
        assert_eq!(coordinator.stats().trades_executed, 0);
        assert_eq!(coordinator.stats().failed_executions, 1);
    }

    #[tokio::test]
    async fn submit_error_leaves_totals_untouched() {
        let mut contract = RecordingExecutor::with_balance(ample_balance());
        contract.submit_fails = true;
        let contract = Arc::new(contract);
        let mut coordinator = ExecutionCoordinator::new(contract);

        let outcome = coordinator.execute(&opportunity(dec!(0.014))).await;

        assert_eq!(outcome.status, ExecutionStatus::Failed);
        assert!(outcome.error_message.unwrap().contains("nonce too low"));
        assert_eq!(coordinator.stats().trades_executed, 0);
        assert_eq!(coordinator.stats().cumulative_profit, Decimal::ZERO);
    }

    #[tokio::test]
    async fn balance_check_failure_aborts_without_submit() {
        let mut contract = RecordingExecutor::with_balance(U256::ZERO);
        contract.balance = Err(BotError::Execution {
            message: "unused".to_string(),
            tx_hash: None,
        });
        let contract = Arc::new(contract);
        let mut coordinator = ExecutionCoordinator::new(contract.clone());

        let outcome = coordinator.execute(&opportunity(dec!(0.014))).await;

        assert_eq!(outcome.status, ExecutionStatus::Failed);
        assert!(outcome.error_message.unwrap().contains("balance check failed"));
        assert_eq!(contract.submissions.load(Ordering::SeqCst), 0);
    }
}
