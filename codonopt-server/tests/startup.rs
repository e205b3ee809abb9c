use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use codonopt_server::{
    AppState,
    infra::{
        server::Server,
        startup::{NoopStartupHooks, StartupHooks},
    },
};
use tokio::sync::oneshot;

mod common;
use common::engine_state;

struct RecordingHooks {
    called: Arc<AtomicBool>,
}

#[async_trait]
impl StartupHooks for RecordingHooks {
    async fn run(&self, _state: &AppState) -> Result<()> {
        self.called.store(true, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingHooks;

#[async_trait]
impl StartupHooks for FailingHooks {
    async fn run(&self, _state: &AppState) -> Result<()> {
        Err(anyhow!("refusing to start"))
    }
}

#[tokio::test]
async fn bind_runs_startup_hooks() -> Result<()> {
    let flag = Arc::new(AtomicBool::new(false));
    let hooks = RecordingHooks {
        called: Arc::clone(&flag),
    };

    let server = Server::bind(engine_state(1), &hooks).await?;
    assert!(flag.load(Ordering::SeqCst));
    assert_ne!(server.local_addr()?.port(), 0);
    Ok(())
}

#[tokio::test]
async fn failing_hook_aborts_startup() {
    let result = Server::bind(engine_state(1), &FailingHooks).await;
    let err = result.expect_err("startup should fail");
    assert!(format!("{err:#}").contains("refusing to start"));
}

#[tokio::test]
async fn server_stops_on_shutdown_signal() -> Result<()> {
    let server = Server::bind(engine_state(1), &NoopStartupHooks).await?;
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server.serve_with_shutdown(async move {
        let _ = rx.await;
    }));

    tx.send(()).map_err(|_| anyhow!("server dropped receiver"))?;
    handle.await??;
    Ok(())
}

#[tokio::test]
async fn unknown_species_fails_state_construction() {
    let mut config = common::seeded_config(1);
    config.optimization.species = "unicorn".into();
    assert!(AppState::from_config(config).is_err());
}
