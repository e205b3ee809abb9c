#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use codonopt_config::Config;
use codonopt_contracts::SequenceEngine;
use codonopt_server::{AppState, create_app};

pub fn seeded_config(seed: u64) -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".into();
    config.server.port = 0;
    config.solver.seed = Some(seed);
    config
}

pub fn engine_state(seed: u64) -> AppState {
    AppState::from_config(seeded_config(seed)).expect("engine state")
}

pub fn mock_state(engine: impl SequenceEngine + 'static) -> AppState {
    AppState::with_engine(seeded_config(0), Arc::new(engine))
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_app(state)).expect("test server")
}
