//! Monitoring cycle orchestration

use crate::arbitrage::evaluate;
use crate::config::Config;
use crate::execution::ExecutionCoordinator;
use crate::network::GasOracle;
use crate::quotes::PriceSampler;
use crate::types::{ExecutionStats, MonitoredPair, PriceSnapshot};
use crate::utils::{print_arbitrage_opportunity, print_execution_outcome};
use crate::validation::OpportunityValidator;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::time;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// What a finished session hands back to the caller.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub cycles_run: u64,
    pub stats: ExecutionStats,
}

/// Single logical worker driving sequential monitoring cycles. Sampling
/// within a pair fans out to the two quote sources; everything else,
/// including execution submissions, runs strictly in order.
pub struct CycleDriver {
    config: Config,
    pairs: Vec<MonitoredPair>,
    sampler: PriceSampler,
    gas_oracle: Arc<dyn GasOracle>,
    validator: OpportunityValidator,
    coordinator: ExecutionCoordinator,
    stop_rx: watch::Receiver<bool>,
    state: DriverState,
    last_gas_price: Option<u128>,
}

impl CycleDriver {
    pub fn new(
        config: Config,
        pairs: Vec<MonitoredPair>,
        sampler: PriceSampler,
        gas_oracle: Arc<dyn GasOracle>,
        validator: OpportunityValidator,
        coordinator: ExecutionCoordinator,
        stop_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            pairs,
            sampler,
            gas_oracle,
            validator,
            coordinator,
            stop_rx,
            state: DriverState::Idle,
            last_gas_price: None,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Runs cycles until the stop signal fires or the configured bound is
    /// reached. A stop signal never aborts a cycle mid-flight; it takes
    /// effect at the next inter-cycle boundary.
    pub async fn run(&mut self) -> SessionSummary {
        self.state = DriverState::Running;
        let mut cycles_run: u64 = 0;

        info!(
            "🚀 Monitoring {} pairs every {}s",
            self.pairs.len(),
            self.config.cycle_interval_secs
        );

        while self.state == DriverState::Running {
            cycles_run += 1;
            self.run_cycle(cycles_run).await;

            if self.config.max_cycles > 0 && cycles_run >= self.config.max_cycles {
                info!("🏁 Reached the configured bound of {} cycles", self.config.max_cycles);
                self.state = DriverState::Idle;
                break;
            }
            if *self.stop_rx.borrow() {
                info!("📛 Stop signal received, exiting monitoring loop");
                self.state = DriverState::Idle;
                break;
            }

            tokio::select! {
                _ = time::sleep(Duration::from_secs(self.config.cycle_interval_secs)) => {}
                changed = self.stop_rx.changed() => {
                    let stopped = changed.is_err() || *self.stop_rx.borrow();
                    if stopped {
                        info!("📛 Stop signal received, exiting monitoring loop");
                        self.state = DriverState::Idle;
                    }
                }
            }
        }

        SessionSummary {
            cycles_run,
            stats: self.coordinator.stats().clone(),
        }
    }

    async fn run_cycle(&mut self, cycle: u64) {
        let started = Instant::now();
        info!("🔄 Cycle {} starting", cycle);

        // One gas reading per cycle; a failed read falls back to the
        // previous one, and the very first cycle has nothing to fall
        // back on.
        let gas_price_wei = match self.gas_oracle.gas_price_wei().await {
            Ok(price) => {
                self.last_gas_price = Some(price);
                price
            }
            Err(e) => match self.last_gas_price {
                Some(previous) => {
                    warn!("⛽ Gas price fetch failed ({}), reusing {} wei", e, previous);
                    previous
                }
                None => {
                    warn!("⛽ Gas price unavailable ({}), skipping cycle", e);
                    return;
                }
            },
        };

        let mut validated = Vec::new();
        let mut rejected = 0usize;

        for pair in &self.pairs {
            let snapshot = self.sampler.sample(pair).await;
            log_snapshot(&snapshot);

            let Some(opportunity) = evaluate(&snapshot, pair, gas_price_wei, &self.config) else {
                continue;
            };
            print_arbitrage_opportunity(&opportunity);

            let verdict = self.validator.validate(&opportunity).await;
            if verdict.passed {
                validated.push(opportunity);
            } else {
                rejected += 1;
            }
        }

        let mut executed = 0usize;
        for opportunity in &validated {
            if opportunity.net_profit < self.config.min_execute_profit {
                info!(
                    "⏭️ {} net profit {:.6} stays below the execute floor {:.6}",
                    opportunity.pair.symbol(),
                    opportunity.net_profit,
                    self.config.min_execute_profit
                );
                continue;
            }
            if executed > 0 {
                // Serialize submissions from the single execution identity
                time::sleep(Duration::from_secs(self.config.trade_delay_secs)).await;
            }
            let outcome = self.coordinator.execute(opportunity).await;
            print_execution_outcome(&outcome);
            executed += 1;
        }

        info!(
            "🔄 Cycle {} done in {:.1}s: {} validated, {} rejected, {} executed",
            cycle,
            started.elapsed().as_secs_f64(),
            validated.len(),
            rejected,
            executed
        );
    }
}

fn log_snapshot(snapshot: &PriceSnapshot) {
    match (snapshot.first.price, snapshot.second.price) {
        (Some(first), Some(second)) => {
            let diff = snapshot.spread().unwrap_or(Decimal::ZERO);
            let pct = snapshot.spread_pct().unwrap_or(Decimal::ZERO);
            info!(
                "💹 {} | {}: {:.4} | {}: {:.4} | Diff: {:.4} ({:.3}%)",
                snapshot.pair_symbol,
                snapshot.first.venue,
                first,
                snapshot.second.venue,
                second,
                diff,
                pct
            );
        }
        _ => {
            warn!(
                "💹 {} | incomplete sample | {}: {} | {}: {}",
                snapshot.pair_symbol,
                snapshot.first.venue,
                price_or_dash(snapshot.first.price),
                snapshot.second.venue,
                price_or_dash(snapshot.second.price)
            );
        }
    }
}

fn price_or_dash(price: Option<Decimal>) -> String {
    match price {
        Some(price) => format!("{price:.4}"),
        None => "-".to_string(),
    }
}
