//! Validation result types

use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of reconciling a local opportunity against the executor
/// contract's own profit computation. Lives for one cycle only.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub opportunity_id: String,
    pub pair_symbol: String,
    pub local_profit: Decimal,
    /// None when the authoritative call itself failed.
    pub authoritative_profit: Option<Decimal>,
    pub relative_gap: Option<Decimal>,
    pub passed: bool,
    pub reason: Option<String>,
}
