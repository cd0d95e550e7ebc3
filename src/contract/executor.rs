//! On-chain arbitrage executor contract bindings

use alloy::{
    primitives::{Address, U256, keccak256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use async_trait::async_trait;
use lazy_static::lazy_static;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::{
    ConcreteProvider,
    config::{Config, EXECUTE_GAS_LIMIT, EXECUTION_TIMEOUT_SECS},
    errors::{BotError, BotResult},
    types::{SubmittedTrade, TradeRequest},
};

lazy_static! {
    static ref CHECK_OPPORTUNITY_SELECTOR: Vec<u8> =
        keccak256("checkArbitrageOpportunity(address,address,uint256,address,address,bool)")[..4]
            .to_vec();
    static ref EXECUTE_ARBITRAGE_SELECTOR: Vec<u8> =
        keccak256("executeArbitrage(address,address,uint256,address,address,bool)")[..4].to_vec();
    static ref TOKEN_BALANCE_SELECTOR: Vec<u8> =
        keccak256("getTokenBalance(address)")[..4].to_vec();
}

/// Surface of the deployed executor contract. Validation and execution
/// depend on this trait so they can run against a stand-in.
#[async_trait]
pub trait ArbExecutorApi: Send + Sync {
    /// Contract-side profit estimate for the trade, in token_b base units.
    async fn check_opportunity(&self, trade: &TradeRequest) -> BotResult<U256>;

    /// Submits the trade and waits for its receipt.
    async fn execute_arbitrage(&self, trade: &TradeRequest) -> BotResult<SubmittedTrade>;

    /// Working-capital balance the contract holds for `token`.
    async fn token_balance(&self, token: Address) -> BotResult<U256>;
}

/// The deployed executor on Sepolia. Holds the working capital, so
/// balance checks and trades both go through the contract address.
pub struct ArbExecutorContract {
    provider: Arc<ConcreteProvider>,
    address: Address,
    sender: Address,
    routers: (Address, Address),
}

impl ArbExecutorContract {
    pub fn new(provider: Arc<ConcreteProvider>, config: &Config, sender: Address) -> Self {
        Self {
            provider,
            address: config.executor_address,
            sender,
            routers: (config.uniswap_router, config.sushiswap_router),
        }
    }

    /// Selector plus the shared (tokenA, tokenB, amountIn, router1,
    /// router2, reverseOrder) parameter block.
    fn encode_trade(&self, selector: &[u8], trade: &TradeRequest) -> Vec<u8> {
        let mut data = selector.to_vec();
        data.extend_from_slice(
            &(
                trade.token_a,
                trade.token_b,
                trade.amount_in,
                self.routers.0,
                self.routers.1,
                trade.reverse_order,
            )
                .abi_encode_params(),
        );
        data
    }

    fn contract_error(&self, message: &str, source: impl Into<anyhow::Error>) -> BotError {
        BotError::Contract {
            contract: self.address,
            message: message.to_string(),
            source: source.into(),
        }
    }
}

#[async_trait]
impl ArbExecutorApi for ArbExecutorContract {
    async fn check_opportunity(&self, trade: &TradeRequest) -> BotResult<U256> {
        let data = self.encode_trade(&CHECK_OPPORTUNITY_SELECTOR, trade);
        let tx = TransactionRequest::default().to(self.address).input(data.into());

        let raw = self
            .provider
            .call(&tx)
            .await
            .map_err(|e| self.contract_error("checkArbitrageOpportunity call failed", e))?;

        U256::abi_decode(&raw, true)
            .map_err(|e| self.contract_error("could not decode contract profit estimate", e))
    }

    async fn execute_arbitrage(&self, trade: &TradeRequest) -> BotResult<SubmittedTrade> {
        let data = self.encode_trade(&EXECUTE_ARBITRAGE_SELECTOR, trade);
        let tx = TransactionRequest::default()
            .from(self.sender)
            .to(self.address)
            .input(data.into())
            .gas_limit(EXECUTE_GAS_LIMIT);

        let pending_tx = self.provider.send_transaction(tx).await.map_err(|e| {
            BotError::Execution {
                message: format!("transaction submit failed: {e}"),
                tx_hash: None,
            }
        })?;

        let tx_hash = format!("{:?}", pending_tx.tx_hash());
        info!("📡 Transaction sent: {}", tx_hash);

        // Wait for confirmation with timeout
        tokio::select! {
            result = pending_tx.get_receipt() => {
                match result {
                    Ok(receipt) => {
                        let success = receipt.status();
                        if success {
                            info!("✅ Transaction confirmed: {:?}", receipt.transaction_hash);
                        } else {
                            warn!("❌ Transaction reverted: {}", tx_hash);
                        }
                        Ok(SubmittedTrade {
                            tx_hash,
                            success,
                            gas_used: receipt.gas_used as u64,
                        })
                    }
                    Err(e) => Err(BotError::Execution {
                        message: format!("receipt retrieval failed: {e}"),
                        tx_hash: Some(tx_hash),
                    }),
                }
            }
            _ = tokio::time::sleep(Duration::from_secs(EXECUTION_TIMEOUT_SECS)) => {
                Err(BotError::Execution {
                    message: format!("no confirmation after {EXECUTION_TIMEOUT_SECS} seconds"),
                    tx_hash: Some(tx_hash),
                })
            }
        }
    }

    async fn token_balance(&self, token: Address) -> BotResult<U256> {
        let mut data = TOKEN_BALANCE_SELECTOR.clone();
        data.extend_from_slice(&(token,).abi_encode_params());
        let tx = TransactionRequest::default().to(self.address).input(data.into());

        let raw = self
            .provider
            .call(&tx)
            .await
            .map_err(|e| self.contract_error("getTokenBalance call failed", e))?;

        U256::abi_decode(&raw, true)
            .map_err(|e| self.contract_error("could not decode token balance", e))
    }
}
