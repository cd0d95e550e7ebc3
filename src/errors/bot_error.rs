//! Custom error types for the bot

use crate::types::DexId;
use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Quote unavailable from {venue}: {message}")]
    QuoteUnavailable {
        venue: DexId,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("Contract interaction failed: {contract} - {message}")]
    Contract {
        contract: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Execution failed: {message}")]
    Execution {
        message: String,
        tx_hash: Option<String>,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

impl BotError {
    /// Hash of the on-chain transaction tied to this error, when one was
    /// already submitted before the failure.
    pub fn transaction_hash(&self) -> Option<String> {
        match self {
            BotError::Execution { tx_hash, .. } => tx_hash.clone(),
            _ => None,
        }
    }
}

pub type BotResult<T> = Result<T, BotError>;
