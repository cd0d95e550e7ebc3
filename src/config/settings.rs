//! Bot configuration settings and environment variable handling

use crate::errors::{BotError, BotResult};
use crate::types::addresses::{
    ARB_EXECUTOR_SEPOLIA, SUSHISWAP_ROUTER_SEPOLIA, UNISWAP_V2_ROUTER_SEPOLIA, known_token,
};
use alloy::primitives::Address;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;

// Profit thresholds, in token_b units
pub const DEFAULT_REFERENCE_AMOUNT: Decimal = dec!(1);
pub const DEFAULT_MIN_NET_PROFIT: Decimal = dec!(0.001);
pub const DEFAULT_EXECUTE_THRESHOLD: Decimal = dec!(0.001);
pub const DEFAULT_VALIDATION_TOLERANCE: Decimal = dec!(0.10);

// Gas: 200k units approximates the arbitrage round trip for cost
// estimation; the submitted transaction carries a 500k limit.
pub const ESTIMATE_GAS_UNITS: u64 = 200_000;
pub const EXECUTE_GAS_LIMIT: u64 = 500_000;
pub const DEFAULT_MAX_GAS_PRICE_GWEI: u64 = 50;
pub const EXECUTION_TIMEOUT_SECS: u64 = 30;

// Cycle pacing
pub const DEFAULT_CYCLE_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_TRADE_DELAY_SECS: u64 = 5;

// Confidence scoring
pub const DEFAULT_LIQUIDITY_WEIGHT: Decimal = dec!(0.6);
pub const DEFAULT_PROFIT_WEIGHT: Decimal = dec!(0.4);
pub const DEFAULT_MIN_LIQUIDITY: Decimal = dec!(10000);
pub const DEFAULT_LIQUIDITY_HINT: Decimal = dec!(1);
pub const PROFIT_SCORE_CAP_MULTIPLIER: Decimal = dec!(10);

pub const DEFAULT_MONITOR_PAIRS: &str = "WETH/USDC,WETH/USDT,USDC/USDT";

/// A configured pair before its on-chain metadata is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSpec {
    pub symbol_a: String,
    pub symbol_b: String,
    pub token_a: Address,
    pub token_b: Address,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub executor_address: Address,
    pub private_key: String,
    pub uniswap_router: Address,
    pub sushiswap_router: Address,
    pub pairs: Vec<PairSpec>,
    pub reference_amount: Decimal,
    pub min_net_profit: Decimal,
    pub min_execute_profit: Decimal,
    pub validation_tolerance: Decimal,
    pub gas_estimate_units: u64,
    pub max_gas_price_gwei: u64,
    pub cycle_interval_secs: u64,
    pub trade_delay_secs: u64,
    pub max_cycles: u64,
    pub liquidity_weight: Decimal,
    pub profit_weight: Decimal,
    pub min_liquidity: Decimal,
    pub liquidity_hint: Decimal,
}

impl Config {
    /// Reads the environment. Missing variables fall back to defaults;
    /// malformed values are configuration errors, never silent defaults.
    pub fn load() -> BotResult<Self> {
        let config = Self {
            rpc_url: env::var("SEPOLIA_RPC_URL")
                .map_err(|_| BotError::Config("SEPOLIA_RPC_URL is not set".to_string()))?,
            executor_address: env_address("ARB_EXECUTOR_ADDRESS", ARB_EXECUTOR_SEPOLIA)?,
            private_key: env::var("PRIVATE_KEY")
                .map_err(|_| BotError::Config("PRIVATE_KEY is not set".to_string()))?,
            uniswap_router: env_address("UNISWAP_ROUTER", UNISWAP_V2_ROUTER_SEPOLIA)?,
            sushiswap_router: env_address("SUSHISWAP_ROUTER", SUSHISWAP_ROUTER_SEPOLIA)?,
            pairs: parse_pairs(
                &env::var("MONITOR_PAIRS").unwrap_or_else(|_| DEFAULT_MONITOR_PAIRS.to_string()),
            )?,
            reference_amount: env_decimal("REFERENCE_AMOUNT", DEFAULT_REFERENCE_AMOUNT)?,
            min_net_profit: env_decimal("MIN_PROFIT_THRESHOLD", DEFAULT_MIN_NET_PROFIT)?,
            min_execute_profit: env_decimal("MIN_EXECUTE_PROFIT", DEFAULT_EXECUTE_THRESHOLD)?,
            validation_tolerance: env_decimal("VALIDATION_TOLERANCE", DEFAULT_VALIDATION_TOLERANCE)?,
            gas_estimate_units: env_u64("GAS_ESTIMATE_UNITS", ESTIMATE_GAS_UNITS)?,
            max_gas_price_gwei: env_u64("MAX_GAS_PRICE_GWEI", DEFAULT_MAX_GAS_PRICE_GWEI)?,
            cycle_interval_secs: env_u64("MONITORING_INTERVAL", DEFAULT_CYCLE_INTERVAL_SECS)?,
            trade_delay_secs: env_u64("TRADE_DELAY_SECS", DEFAULT_TRADE_DELAY_SECS)?,
            max_cycles: env_u64("MAX_CYCLES", 0)?,
            liquidity_weight: env_decimal("CONFIDENCE_LIQUIDITY_WEIGHT", DEFAULT_LIQUIDITY_WEIGHT)?,
            profit_weight: env_decimal("CONFIDENCE_PROFIT_WEIGHT", DEFAULT_PROFIT_WEIGHT)?,
            min_liquidity: env_decimal("MIN_LIQUIDITY", DEFAULT_MIN_LIQUIDITY)?,
            liquidity_hint: env_decimal("LIQUIDITY_HINT", DEFAULT_LIQUIDITY_HINT)?,
        };
        Ok(config)
    }

    /// Fatal checks, run once before the first cycle.
    pub fn validate(&self) -> BotResult<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(BotError::Config("RPC URL is empty".to_string()));
        }
        if self.private_key.trim().is_empty() {
            return Err(BotError::Config("private key is empty".to_string()));
        }
        if self.pairs.is_empty() {
            return Err(BotError::Config("no pairs configured".to_string()));
        }
        if self.reference_amount <= Decimal::ZERO {
            return Err(BotError::Config("reference amount must be positive".to_string()));
        }
        if self.min_net_profit <= Decimal::ZERO || self.min_execute_profit <= Decimal::ZERO {
            return Err(BotError::Config("profit thresholds must be positive".to_string()));
        }
        if self.validation_tolerance <= Decimal::ZERO || self.validation_tolerance >= Decimal::ONE {
            return Err(BotError::Config(
                "validation tolerance must be a fraction in (0, 1)".to_string(),
            ));
        }
        if self.gas_estimate_units == 0 {
            return Err(BotError::Config("gas estimate units must be positive".to_string()));
        }
        let weight_range = Decimal::ZERO..=Decimal::ONE;
        if !weight_range.contains(&self.liquidity_weight)
            || !weight_range.contains(&self.profit_weight)
            || self.liquidity_weight + self.profit_weight != Decimal::ONE
        {
            return Err(BotError::Config(
                "confidence weights must lie in [0, 1] and sum to 1".to_string(),
            ));
        }
        if self.min_liquidity <= Decimal::ZERO {
            return Err(BotError::Config("minimum liquidity must be positive".to_string()));
        }
        Ok(())
    }
}

/// Parses `"WETH/USDC,WETH/USDT"` against the known-token table.
pub fn parse_pairs(raw: &str) -> BotResult<Vec<PairSpec>> {
    let mut pairs = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let (symbol_a, symbol_b) = entry.split_once('/').ok_or_else(|| {
            BotError::Config(format!("pair '{entry}' must be written as BASE/QUOTE"))
        })?;
        let (symbol_a, symbol_b) = (symbol_a.trim(), symbol_b.trim());
        let token_a = known_token(symbol_a)
            .ok_or_else(|| BotError::Config(format!("unknown token symbol '{symbol_a}'")))?;
        let token_b = known_token(symbol_b)
            .ok_or_else(|| BotError::Config(format!("unknown token symbol '{symbol_b}'")))?;
        if token_a == token_b {
            return Err(BotError::Config(format!("pair '{entry}' repeats the same token")));
        }
        pairs.push(PairSpec {
            symbol_a: symbol_a.to_uppercase(),
            symbol_b: symbol_b.to_uppercase(),
            token_a,
            token_b,
        });
    }
    Ok(pairs)
}

fn env_decimal(key: &str, default: Decimal) -> BotResult<Decimal> {
    match env::var(key) {
        Ok(raw) => Decimal::from_str(raw.trim())
            .map_err(|_| BotError::Config(format!("{key} is not a valid decimal: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

fn env_u64(key: &str, default: u64) -> BotResult<u64> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| BotError::Config(format!("{key} is not a valid integer: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

fn env_address(key: &str, default: Address) -> BotResult<Address> {
    match env::var(key) {
        Ok(raw) => Address::from_str(raw.trim())
            .map_err(|_| BotError::Config(format!("{key} is not a valid address: '{raw}'"))),
        Err(_) => Ok(default),
    }
}


#[cfg(test)]
mod tests {
    use super::tests_support::test_config;
    use super::*;
    use crate::types::addresses::{USDC_SEPOLIA, WETH_SEPOLIA};

    #[test]
    fn default_config_validates() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn parse_pairs_resolves_known_symbols() {
        let pairs = parse_pairs("WETH/USDC, weth/usdt").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].token_a, WETH_SEPOLIA);
        assert_eq!(pairs[0].token_b, USDC_SEPOLIA);
        assert_eq!(pairs[1].symbol_b, "USDT");
    }

    #[test]
    fn parse_pairs_rejects_unknown_symbol() {
        assert!(matches!(parse_pairs("WETH/DOGE"), Err(BotError::Config(_))));
    }

    #[test]
    fn parse_pairs_rejects_missing_separator() {
        assert!(matches!(parse_pairs("WETHUSDC"), Err(BotError::Config(_))));
    }

    #[test]
    fn parse_pairs_rejects_self_pair() {
        assert!(matches!(parse_pairs("WETH/WETH"), Err(BotError::Config(_))));
    }

    #[test]
    fn validate_rejects_empty_pairs() {
        let mut config = test_config();
        config.pairs.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_tolerance() {
        let mut config = test_config();
        config.validation_tolerance = Decimal::ONE;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unbalanced_weights() {
        let mut config = test_config();
        config.liquidity_weight = dec!(0.8);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_threshold() {
        let mut config = test_config();
        config.min_net_profit = Decimal::ZERO;
        assert!(config.validate().is_err());
    }
}
