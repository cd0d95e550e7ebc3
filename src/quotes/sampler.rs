//! Two-venue price sampling

use crate::errors::BotResult;
use crate::quotes::source::QuoteSource;
use crate::types::{DexId, MonitoredPair, PriceSnapshot, VenuePrice};
use crate::utils::scale_down;
use alloy::primitives::U256;
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

pub struct PriceSampler {
    first: Arc<dyn QuoteSource>,
    second: Arc<dyn QuoteSource>,
}

impl PriceSampler {
    pub fn new(first: Arc<dyn QuoteSource>, second: Arc<dyn QuoteSource>) -> Self {
        Self { first, second }
    }

    /// Samples both venues concurrently with the pair's reference input.
    /// A failed side is logged and left absent; the snapshot is returned
    /// either way so the driver can log partial data.
    pub async fn sample(&self, pair: &MonitoredPair) -> PriceSnapshot {
        let path = pair.path();
        let (first_quote, second_quote) = tokio::join!(
            self.first.quote(pair.amount_in, &path),
            self.second.quote(pair.amount_in, &path),
        );

        PriceSnapshot {
            pair_symbol: pair.symbol(),
            timestamp: Utc::now(),
            first: venue_price(self.first.venue(), first_quote, pair),
            second: venue_price(self.second.venue(), second_quote, pair),
        }
    }
}

// Raw router output to a normalized venue price. Outputs beyond Decimal
// range count as malformed and leave the side absent.
fn venue_price(venue: DexId, quote: BotResult<U256>, pair: &MonitoredPair) -> VenuePrice {
    let price = match quote {
        Ok(raw) => match scale_down(raw, pair.token_b.decimals) {
            Some(price) => Some(price),
            None => {
                warn!("⚠️ {} quote for {} exceeds decimal range", venue, pair.symbol());
                None
            }
        },
        Err(e) => {
            warn!("⚠️ {} quote failed for {}: {}", venue, pair.symbol(), e);
            None
        }
    };

    VenuePrice {
        venue,
        price,
        liquidity: pair.liquidity_hint,
    }
}
