//! Venue, token and price snapshot types

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// The two routers the bot trades across. Typed key for price lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DexId {
    UniswapV2,
    Sushiswap,
}

impl DexId {
    pub fn label(&self) -> &'static str {
        match self {
            DexId::UniswapV2 => "Uniswap V2",
            DexId::Sushiswap => "Sushiswap",
        }
    }
}

impl fmt::Display for DexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub symbol: String,
    pub address: Address,
    pub decimals: u8,
}

/// A pair under observation. Built once at startup: decimals are resolved
/// on-chain and the reference input is pre-scaled to token_a base units.
#[derive(Debug, Clone)]
pub struct MonitoredPair {
    pub token_a: TokenInfo,
    pub token_b: TokenInfo,
    pub amount_in: U256,
    pub liquidity_hint: Decimal,
}

impl MonitoredPair {
    pub fn symbol(&self) -> String {
        format!("{}/{}", self.token_a.symbol, self.token_b.symbol)
    }

    /// Quote path: sell token_a, receive token_b.
    pub fn path(&self) -> [Address; 2] {
        [self.token_a.address, self.token_b.address]
    }
}

/// One venue's view of the pair. `price` is None when the quote was
/// unavailable this cycle; that is distinct from a genuine zero quote.
#[derive(Debug, Clone)]
pub struct VenuePrice {
    pub venue: DexId,
    pub price: Option<Decimal>,
    pub liquidity: Decimal,
}

/// Both venues' prices for one pair, sampled in the same cycle.
/// Prices are token_b units for the pair's reference input of token_a.
#[derive(Debug, Clone)]
pub struct PriceSnapshot {
    pub pair_symbol: String,
    pub timestamp: DateTime<Utc>,
    pub first: VenuePrice,
    pub second: VenuePrice,
}

impl PriceSnapshot {
    pub fn is_complete(&self) -> bool {
        self.first.price.is_some() && self.second.price.is_some()
    }

    /// Absolute price difference, when both sides are present.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.first.price, self.second.price) {
            (Some(a), Some(b)) => Some((a - b).abs()),
            _ => None,
        }
    }

    /// Spread as a percentage of the lower price.
    pub fn spread_pct(&self) -> Option<Decimal> {
        let (a, b) = (self.first.price?, self.second.price?);
        let min = a.min(b);
        if min <= Decimal::ZERO {
            return None;
        }
        Some((a - b).abs() / min * Decimal::ONE_HUNDRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(first: Option<Decimal>, second: Option<Decimal>) -> PriceSnapshot {
        PriceSnapshot {
            pair_symbol: "WETH/USDC".to_string(),
            timestamp: Utc::now(),
            first: VenuePrice {
                venue: DexId::UniswapV2,
                price: first,
                liquidity: dec!(1),
            },
            second: VenuePrice {
                venue: DexId::Sushiswap,
                price: second,
                liquidity: dec!(1),
            },
        }
    }

    #[test]
    fn partial_snapshot_is_incomplete() {
        let snap = snapshot(Some(dec!(3000)), None);
        assert!(!snap.is_complete());
        assert!(snap.spread().is_none());
        assert!(snap.spread_pct().is_none());
    }

    #[test]
    fn spread_is_symmetric() {
        let a = snapshot(Some(dec!(3000)), Some(dec!(3050)));
        let b = snapshot(Some(dec!(3050)), Some(dec!(3000)));
        assert_eq!(a.spread(), b.spread());
        assert_eq!(a.spread(), Some(dec!(50)));
    }

    #[test]
    fn spread_pct_uses_lower_price() {
        let snap = snapshot(Some(dec!(3000)), Some(dec!(3050)));
        let pct = snap.spread_pct().unwrap();
        assert_eq!(pct.round_dp(4), dec!(1.6667));
    }
}
