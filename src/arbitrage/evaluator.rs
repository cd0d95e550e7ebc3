//! Arbitrage opportunity evaluation

use crate::arbitrage::confidence::confidence_score;
use crate::config::Config;
use crate::types::{ArbitrageOpportunity, MonitoredPair, PriceSnapshot, TradeDirection};
use crate::utils::wei_to_native;
use chrono::Utc;
use rust_decimal::prelude::*;
use tracing::debug;

/// Evaluates one snapshot into at most one opportunity. Pure apart from
/// the fresh id and timestamp; rejections return None, never errors.
pub fn evaluate(
    snapshot: &PriceSnapshot,
    pair: &MonitoredPair,
    gas_price_wei: u128,
    config: &Config,
) -> Option<ArbitrageOpportunity> {
    let max_gas_price_wei = (config.max_gas_price_gwei as u128).saturating_mul(1_000_000_000);
    if gas_price_wei > max_gas_price_wei {
        debug!(
            "⛽ {}: gas price {} wei above ceiling {} wei, skipping evaluation",
            snapshot.pair_symbol, gas_price_wei, max_gas_price_wei
        );
        return None;
    }

    let (first, second) = (snapshot.first.price?, snapshot.second.price?);
    if first <= Decimal::ZERO || second <= Decimal::ZERO {
        return None;
    }

    let diff = (first - second).abs();
    if diff.is_zero() {
        return None;
    }

    // Buy where it is cheap, sell where it is dear
    let (direction, buy_venue, sell_venue, buy_price, sell_price) = if first < second {
        (
            TradeDirection::BuyFirstSellSecond,
            snapshot.first.venue,
            snapshot.second.venue,
            first,
            second,
        )
    } else {
        (
            TradeDirection::BuySecondSellFirst,
            snapshot.second.venue,
            snapshot.first.venue,
            second,
            first,
        )
    };

    let gross_profit = spread_profit(buy_price, sell_price, config.reference_amount);
    let gas_cost = estimate_gas_cost(config.gas_estimate_units, gas_price_wei, buy_price);
    let net_profit = gross_profit - gas_cost;

    if net_profit < config.min_net_profit {
        return None;
    }

    let liquidity = snapshot.first.liquidity + snapshot.second.liquidity;
    let confidence = confidence_score(liquidity, net_profit, config);

    Some(ArbitrageOpportunity {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        pair: pair.clone(),
        buy_venue,
        sell_venue,
        direction,
        buy_price,
        sell_price,
        spread_pct: diff / buy_price * Decimal::ONE_HUNDRED,
        amount_in: pair.amount_in,
        gross_profit,
        gas_cost,
        net_profit,
        confidence,
    })
}

/// Profit of buying `reference_amount` at `buy` and selling at `sell`,
/// in token_b units, before gas.
pub fn spread_profit(buy: Decimal, sell: Decimal, reference_amount: Decimal) -> Decimal {
    (sell - buy) * reference_amount / buy
}

/// Fixed gas units at the current gas price, converted from native units
/// into token_b units through the buy-side price.
pub fn estimate_gas_cost(gas_units: u64, gas_price_wei: u128, buy_price: Decimal) -> Decimal {
    let gas_wei = (gas_units as u128).saturating_mul(gas_price_wei);
    wei_to_native(gas_wei) * buy_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::tests_support::test_config;
    use crate::types::{DexId, TokenInfo, VenuePrice};
    use alloy::primitives::{Address, U256};
    use rust_decimal_macros::dec;

    const GWEI: u128 = 1_000_000_000;

    fn test_pair() -> MonitoredPair {
        MonitoredPair {
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
        }
    }

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
    fn rejects_partial_snapshot() {
        let snap = snapshot(Some(dec!(3000)), None);
        assert!(evaluate(&snap, &test_pair(), GWEI, &test_config()).is_none());
    }

    #[test]
    fn rejects_equal_prices() {
        let snap = snapshot(Some(dec!(3000)), Some(dec!(3000)));
        assert!(evaluate(&snap, &test_pair(), GWEI, &test_config()).is_none());
    }

    #[test]
    fn rejects_non_positive_price() {
        let snap = snapshot(Some(dec!(0)), Some(dec!(3000)));
        assert!(evaluate(&snap, &test_pair(), GWEI, &test_config()).is_none());
    }

    #[test]
    fn detects_spread_above_threshold() {
        let snap = snapshot(Some(dec!(3000)), Some(dec!(3050)));
        // 1 wei gas price: cost is negligible against the spread
        let opp = evaluate(&snap, &test_pair(), 1, &test_config()).unwrap();

        assert_eq!(opp.buy_venue, DexId::UniswapV2);
        assert_eq!(opp.sell_venue, DexId::Sushiswap);
        assert_eq!(opp.direction, TradeDirection::BuyFirstSellSecond);
        assert!(!opp.direction.reverse_order());
        assert_eq!(opp.gross_profit.round_dp(6), dec!(0.016667));
        assert_eq!(opp.net_profit, opp.gross_profit - opp.gas_cost);
        assert!(opp.net_profit >= test_config().min_net_profit);
    }

    #[test]
    fn direction_flips_when_second_is_cheaper() {
        let snap = snapshot(Some(dec!(3050)), Some(dec!(3000)));
        let opp = evaluate(&snap, &test_pair(), 1, &test_config()).unwrap();

        assert_eq!(opp.buy_venue, DexId::Sushiswap);
        assert_eq!(opp.sell_venue, DexId::UniswapV2);
        assert!(opp.direction.reverse_order());
        assert_eq!(opp.buy_price, dec!(3000));
        assert_eq!(opp.sell_price, dec!(3050));
    }

    #[test]
    fn thin_spread_loses_to_gas() {
        // 10 gwei over 200k units is 0.002 native, ~6 token_b at 3000
        let snap = snapshot(Some(dec!(3000)), Some(dec!(3000.5)));
        assert!(evaluate(&snap, &test_pair(), 10 * GWEI, &test_config()).is_none());
    }

    #[test]
    fn gas_ceiling_rejects_evaluation() {
        let snap = snapshot(Some(dec!(3000)), Some(dec!(3050)));
        // Ceiling is 50 gwei
        assert!(evaluate(&snap, &test_pair(), 60 * GWEI, &test_config()).is_none());
    }

    #[test]
    fn net_profit_threshold_is_inclusive_cutoff() {
        let pair = test_pair();
        let config = test_config();
        // gross ~0.0010166 clears the 0.001 threshold
        let above = snapshot(Some(dec!(3000)), Some(dec!(3003.05)));
        assert!(evaluate(&above, &pair, 1, &config).is_some());
        // gross ~0.000966 does not
        let below = snapshot(Some(dec!(3000)), Some(dec!(3002.9)));
        assert!(evaluate(&below, &pair, 1, &config).is_none());
    }

    #[test]
    fn scenario_profits_match_reference_numbers() {
        let gross = spread_profit(dec!(3000), dec!(3050), dec!(1));
        assert_eq!(gross.round_dp(6), dec!(0.016667));

        let net = gross - dec!(0.002);
        assert_eq!(net.round_dp(6), dec!(0.014667));

        let thin = spread_profit(dec!(3000), dec!(3000.5), dec!(1));
        assert!(thin < dec!(0.002), "thin spread {thin} should lose to gas");
    }

    #[test]
    fn gas_cost_converts_through_buy_price() {
        // 200k units at 10 gwei is 0.002 native
        let cost = estimate_gas_cost(200_000, 10 * GWEI, dec!(3000));
        assert_eq!(cost, dec!(6));
    }
}
