//! Background task perturbing the global counters
//!
//! Every interval a coin is flipped for new reports arriving from elsewhere
//! and, independently, for some active reports being resolved. It keeps the
//! dashboard looking live without any real data source.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::db::{StatsRepository, StorePool};
use crate::models::{GlobalStats, StatsDelta};

/// One tick's worth of random perturbation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientSimulation {
    new_report_probability: f64,
    resolution_probability: f64,
}

impl AmbientSimulation {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            new_report_probability: config.new_report_probability,
            resolution_probability: config.resolution_probability,
        }
    }

    /// Draw the deltas for one tick against the current counters
    ///
    /// Returns up to two deltas: incoming reports (1 to 3) and resolutions
    /// (1 to 2, only while there are active reports).
    pub fn draw<R: Rng + ?Sized>(&self, stats: &GlobalStats, rng: &mut R) -> Vec<StatsDelta> {
        let mut deltas = Vec::with_capacity(2);
        let mut active = stats.active_reports;

        if rng.gen_bool(self.new_report_probability) {
            let count = rng.gen_range(1..=3);
            active += count;
            deltas.push(StatsDelta::incoming(count));
        }

        if rng.gen_bool(self.resolution_probability) && active > 0 {
            let count = rng.gen_range(1..=2);
            deltas.push(StatsDelta::resolutions(count));
        }

        deltas
    }

    /// Run one tick against the store
    pub async fn tick<R: Rng + ?Sized>(&self, store: &StorePool, rng: &mut R) -> GlobalStats {
        let mut guard = store.write().await;
        let deltas = self.draw(guard.stats(), rng);
        for delta in &deltas {
            guard.adjust_global_stats(delta);
        }
        if !deltas.is_empty() {
            debug!(
                active = guard.stats().active_reports,
                resolved = guard.stats().resolved_reports,
                "Ambient simulation adjusted counters"
            );
        }
        guard.stats().clone()
    }
}

/// Handle to the running simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Whether the simulation is running
    running: Arc<RwLock<bool>>,
    store: StorePool,
    config: SimulationConfig,
}

impl SimulationState {
    pub fn new(store: StorePool, config: SimulationConfig) -> Self {
        Self {
            running: Arc::new(RwLock::new(true)),
            store,
            config,
        }
    }

    pub async fn is_running(&self) -> bool {
        *self.running.read().await
    }

    /// Stop the simulation after the current tick
    pub async fn stop(&self) {
        let mut running = self.running.write().await;
        *running = false;
        info!("Ambient simulation stop requested");
    }
}

/// Start the ambient simulation with an entropy-seeded generator
pub fn start_ambient_simulation(store: StorePool, config: SimulationConfig) -> SimulationState {
    start_ambient_simulation_with_rng(store, config, StdRng::from_entropy())
}

/// Start the ambient simulation with the given generator
pub fn start_ambient_simulation_with_rng(
    store: StorePool,
    config: SimulationConfig,
    rng: StdRng,
) -> SimulationState {
    let state = SimulationState::new(store, config);

    let task_state = state.clone();
    tokio::spawn(async move {
        simulation_task(task_state, rng).await;
    });

    info!(
        interval_secs = state.config.interval_secs,
        "Ambient simulation started"
    );
    state
}

async fn simulation_task(state: SimulationState, mut rng: StdRng) {
    let period = Duration::from_secs(state.config.interval_secs.max(1));
    let simulation = AmbientSimulation::new(&state.config);
    let mut interval_timer = interval_at(Instant::now() + period, period);
    interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval_timer.tick().await;

        if !state.is_running().await {
            info!("Ambient simulation stopping");
            break;
        }

        simulation.tick(&state.store, &mut rng).await;
    }
}
