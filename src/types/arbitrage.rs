//! Arbitrage opportunity types

use super::{DexId, MonitoredPair};
use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Which leg runs first. The executor contract takes this as its
/// `reverseOrder` flag: true means the buy leg runs on the second
/// configured router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeDirection {
    BuyFirstSellSecond,
    BuySecondSellFirst,
}

impl TradeDirection {
    pub fn reverse_order(&self) -> bool {
        matches!(self, TradeDirection::BuySecondSellFirst)
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::BuyFirstSellSecond => write!(f, "buy first / sell second"),
            TradeDirection::BuySecondSellFirst => write!(f, "buy second / sell first"),
        }
    }
}

/// A detected, profit-positive candidate trade. Terminal once handed to the
/// coordinator; re-detection produces a fresh record with a new id.
#[derive(Debug, Clone)]
pub struct ArbitrageOpportunity {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub pair: MonitoredPair,
    pub buy_venue: DexId,
    pub sell_venue: DexId,
    pub direction: TradeDirection,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub spread_pct: Decimal,
    pub amount_in: U256,
    pub gross_profit: Decimal,
    pub gas_cost: Decimal,
    pub net_profit: Decimal,
    pub confidence: Decimal,
}

impl ArbitrageOpportunity {
    pub fn trade_request(&self) -> TradeRequest {
        TradeRequest {
            token_a: self.pair.token_a.address,
            token_b: self.pair.token_b.address,
            amount_in: self.amount_in,
            reverse_order: self.direction.reverse_order(),
        }
    }
}

/// Argument bundle for the executor contract's check and execute calls.
/// The contract binding supplies the router pair itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeRequest {
    pub token_a: Address,
    pub token_b: Address,
    pub amount_in: U256,
    pub reverse_order: bool,
}
