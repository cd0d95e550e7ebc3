//! Confidence scoring for detected opportunities

use crate::config::{Config, PROFIT_SCORE_CAP_MULTIPLIER};
use rust_decimal::prelude::*;

/// Weighted blend of a liquidity score and a profit score, in [0, 1].
/// Liquidity saturates at the configured minimum; profit saturates at
/// ten times the net-profit threshold.
pub fn confidence_score(liquidity: Decimal, net_profit: Decimal, config: &Config) -> Decimal {
    let liquidity_score = ratio_score(liquidity, config.min_liquidity);
    let profit_score = ratio_score(net_profit, config.min_net_profit * PROFIT_SCORE_CAP_MULTIPLIER);
    liquidity_score * config.liquidity_weight + profit_score * config.profit_weight
}

fn ratio_score(value: Decimal, cap: Decimal) -> Decimal {
    if cap <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (value / cap).clamp(Decimal::ZERO, Decimal::ONE)
}
