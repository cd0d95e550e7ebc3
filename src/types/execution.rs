//! Trade execution types

use super::DexId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExecutionStatus {
    Success,
    Failed,
    InsufficientBalance,
}

/// Receipt summary handed back by the contract binding after submission.
#[derive(Debug, Clone)]
pub struct SubmittedTrade {
    pub tx_hash: String,
    pub success: bool,
    pub gas_used: u64,
}

/// Terminal record for one execution attempt, journaled as a JSON line.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionOutcome {
    pub opportunity_id: String,
    pub timestamp: DateTime<Utc>,
    pub pair_symbol: String,
    pub buy_venue: DexId,
    pub sell_venue: DexId,
    pub status: ExecutionStatus,
    pub tx_hash: Option<String>,
    pub gas_used: Option<u64>,
    /// Net profit credited on success, as recorded by the coordinator.
    pub realized_profit: Option<Decimal>,
    pub error_message: Option<String>,
    pub execution_time_ms: u64,
}

/// Running totals owned by the execution coordinator. The only state that
/// survives across cycles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionStats {
    pub trades_executed: u64,
    pub failed_executions: u64,
    pub cumulative_profit: Decimal,
}
