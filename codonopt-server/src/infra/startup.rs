use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::infra::app_state::AppState;

/// Work performed once the state is built and before the listener accepts
/// connections.
#[async_trait]
pub trait StartupHooks: Send + Sync {
    async fn run(&self, state: &AppState) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct ProdStartupHooks;

#[async_trait]
impl StartupHooks for ProdStartupHooks {
    async fn run(&self, state: &AppState) -> Result<()> {
        let solver = &state.config().solver;
        info!(
            engine = %state.optimizer().engine().describe(),
            solver.randomization_threshold = solver.randomization_threshold,
            solver.max_random_iters = solver.max_random_iters,
            solver.mutations_per_iteration = solver.mutations_per_iteration,
            solver.seeded = solver.seed.is_some(),
            "optimization settings in effect"
        );
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NoopStartupHooks;

#[async_trait]
impl StartupHooks for NoopStartupHooks {
    async fn run(&self, _state: &AppState) -> Result<()> {
        Ok(())
    }
}
