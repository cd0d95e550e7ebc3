//! Contract-confirmed opportunity validation

use crate::config::Config;
use crate::contract::ArbExecutorApi;
use crate::types::{ArbitrageOpportunity, ValidationResult};
use crate::utils::scale_down;
use crate::validation::tolerance::{profits_within_tolerance, relative_gap};
use rust_decimal::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

/// Reconciles detected opportunities against the executor contract's own
/// recomputation before any capital is committed.
pub struct OpportunityValidator {
    contract: Arc<dyn ArbExecutorApi>,
    tolerance: Decimal,
}

impl OpportunityValidator {
    pub fn new(contract: Arc<dyn ArbExecutorApi>, config: &Config) -> Self {
        Self {
            contract,
            tolerance: config.validation_tolerance,
        }
    }

    /// Compares the locally computed gross profit with the contract's
    /// estimate. A failed contract call is a failed validation, never an
    /// error that aborts the cycle.
    pub async fn validate(&self, opp: &ArbitrageOpportunity) -> ValidationResult {
        let trade = opp.trade_request();
        let raw = match self.contract.check_opportunity(&trade).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("⚠️ {} validation call failed: {}", opp.pair.symbol(), e);
                return self.failed(opp, None, None, format!("authoritative check failed: {e}"));
            }
        };

        let Some(authoritative) = scale_down(raw, opp.pair.token_b.decimals) else {
            warn!(
                "⚠️ {} contract estimate {} exceeds the representable range",
                opp.pair.symbol(),
                raw
            );
            return self.failed(opp, None, None, "contract estimate out of range".to_string());
        };

        let gap = relative_gap(opp.gross_profit, authoritative);
        if !profits_within_tolerance(opp.gross_profit, authoritative, self.tolerance) {
            let gap_pct = gap.map(|g| g * Decimal::ONE_HUNDRED).unwrap_or_default();
            warn!(
                "❌ {} rejected: local {:.6} vs contract {:.6} disagree by {:.2}%",
                opp.pair.symbol(),
                opp.gross_profit,
                authoritative,
                gap_pct
            );
            return self.failed(
                opp,
                Some(authoritative),
                gap,
                format!("profit estimates disagree by {gap_pct:.2}%"),
            );
        }

        info!(
            "✅ {} validated: local {:.6} vs contract {:.6} {}",
            opp.pair.symbol(),
            opp.gross_profit,
            authoritative,
            opp.pair.token_b.symbol
        );
        ValidationResult {
            opportunity_id: opp.id.clone(),
            pair_symbol: opp.pair.symbol(),
            local_profit: opp.gross_profit,
            authoritative_profit: Some(authoritative),
            relative_gap: gap,
            passed: true,
            reason: None,
        }
    }

    fn failed(
        &self,
        opp: &ArbitrageOpportunity,
        authoritative: Option<Decimal>,
        gap: Option<Decimal>,
        reason: String,
    ) -> ValidationResult {
        ValidationResult {
            opportunity_id: opp.id.clone(),
            pair_symbol: opp.pair.symbol(),
            local_profit: opp.gross_profit,
            authoritative_profit: authoritative,
            relative_gap: gap,
            passed: false,
            reason: Some(reason),
        }
    }
}
