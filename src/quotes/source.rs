//! Router quote sources

use crate::ConcreteProvider;
use crate::errors::{BotError, BotResult};
use crate::types::DexId;
use alloy::{
    primitives::{Address, U256, keccak256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use async_trait::async_trait;
use lazy_static::lazy_static;
use std::sync::Arc;

lazy_static! {
    static ref GET_AMOUNTS_OUT_SELECTOR: Vec<u8> =
        keccak256("getAmountsOut(uint256,address[])")[..4].to_vec();
}

/// A router's read-only price oracle: the output amount for a given input
/// amount along a token path. Unavailability is an error, never a silent
/// zero; `Ok(U256::ZERO)` is a genuine degenerate quote.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    fn venue(&self) -> DexId;
    async fn quote(&self, amount_in: U256, path: &[Address]) -> BotResult<U256>;
}

pub struct RouterQuoter {
    provider: Arc<ConcreteProvider>,
    router: Address,
    venue: DexId,
}

impl RouterQuoter {
    pub fn new(provider: Arc<ConcreteProvider>, router: Address, venue: DexId) -> Self {
        Self {
            provider,
            router,
            venue,
        }
    }

    fn unavailable(&self, message: impl Into<String>, source: Option<anyhow::Error>) -> BotError {
        BotError::QuoteUnavailable {
            venue: self.venue,
            message: message.into(),
            source,
        }
    }
}

#[async_trait]
impl QuoteSource for RouterQuoter {
    fn venue(&self) -> DexId {
        self.venue
    }

    async fn quote(&self, amount_in: U256, path: &[Address]) -> BotResult<U256> {
        if path.len() < 2 {
            return Err(self.unavailable("quote path needs at least two tokens", None));
        }

        let mut data = GET_AMOUNTS_OUT_SELECTOR.clone();
        data.extend_from_slice(&(amount_in, path.to_vec()).abi_encode_params());

        let tx = TransactionRequest::default()
            .to(self.router)
            .input(data.into());

        let result = self.provider.call(&tx).await.map_err(|e| {
            self.unavailable(
                format!("getAmountsOut call failed on router {}", self.router),
                Some(e.into()),
            )
        })?;

        let amounts = <Vec<U256>>::abi_decode(&result, true)
            .map_err(|e| self.unavailable("malformed getAmountsOut response", Some(e.into())))?;

        if amounts.len() < 2 {
            return Err(self.unavailable(
                format!("getAmountsOut returned {} amounts for a {}-hop path", amounts.len(), path.len()),
                None,
            ));
        }

        // Final path hop is the output amount
        Ok(amounts[amounts.len() - 1])
    }
}
