//! Shared helpers for the integration tests: a configurable model double
//! and a real server bound to an ephemeral port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use serde_json::Value;
use soa_data_rs::AppState;
use soa_data_rs::config::settings::ApplicationConfig;
use soa_data_rs::error::{AppError, AppResult};
use soa_data_rs::external::soa::DataModel;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// What a model operation resolves to.
#[derive(Clone, Debug)]
pub enum Outcome {
    Value(Value),
    Absent,
    Fail,
    /// Never resolves.
    Hang,
}

impl Outcome {
    async fn resolve(&self, operation: &str) -> AppResult<Option<Value>> {
        match self {
            Outcome::Value(value) => Ok(Some(value.clone())),
            Outcome::Absent => Ok(None),
            Outcome::Fail => Err(AppError::internal(format!("{operation} exploded"))),
            Outcome::Hang => std::future::pending().await,
        }
    }
}

/// Model double with one scripted outcome per operation and a call counter.
pub struct ScriptedModel {
    pub topics: Outcome,
    pub covid: Outcome,
    pub covid_barcelona: Outcome,
    pub calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn new(topics: Outcome, covid: Outcome, covid_barcelona: Outcome) -> Self {
        Self {
            topics,
            covid,
            covid_barcelona,
            calls: AtomicUsize::new(0),
        }
    }

    /// Every operation resolves to `outcome`.
    pub fn uniform(outcome: Outcome) -> Self {
        Self::new(outcome.clone(), outcome.clone(), outcome)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataModel for ScriptedModel {
    async fn topics(&self) -> AppResult<Option<Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.topics.resolve("topics").await
    }

    async fn covid(&self) -> AppResult<Option<Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.covid.resolve("covid").await
    }

    async fn covid_barcelona(&self) -> AppResult<Option<Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.covid_barcelona.resolve("covid_barcelona").await
    }
}

pub fn app_state(model: Arc<dyn DataModel>) -> AppState {
    AppState::new(model, ApplicationConfig::default())
}

/// A router served on `127.0.0.1:<ephemeral>` until dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(app: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("test server failed");
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}
