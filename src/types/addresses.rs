//! Sepolia token, router and contract addresses

use alloy::primitives::{Address, address};

// Sepolia testnet tokens
pub const WETH_SEPOLIA: Address = address!("fFf9976782d46CC05630D1f6eBAb18b2324d6B14");
pub const USDC_SEPOLIA: Address = address!("94a9D9AC8a22534E3FaCa9F4e7F2E2cf85d5E4C8");
pub const USDT_SEPOLIA: Address = address!("7169D38820dfd117C3FA1f22a697dBA58d90BA06");

// Sepolia router deployments
pub const UNISWAP_V2_ROUTER_SEPOLIA: Address = address!("C532A74256D3db4d4444457e8D5c9C7B6e1c3c6A");
pub const SUSHISWAP_ROUTER_SEPOLIA: Address = address!("1b02dA8Cb0d097eB8D57A175b88c7D8b47997506");

// Deployed ArbExecutor contract
pub const ARB_EXECUTOR_SEPOLIA: Address = address!("96888C4B6e569c74fDbDcc40cacf1127421F993c");

/// Symbols resolvable in the monitored-pair configuration.
pub const KNOWN_TOKENS: &[(&str, Address)] = &[
    ("WETH", WETH_SEPOLIA),
    ("USDC", USDC_SEPOLIA),
    ("USDT", USDT_SEPOLIA),
];

/// Look up a known token address by its configured symbol.
pub fn known_token(symbol: &str) -> Option<Address> {
    KNOWN_TOKENS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(symbol))
        .map(|(_, addr)| *addr)
}
