#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use heartbloom::{BloomConfig, CanopyParams, ServiceError, TextFetchService};
use tokio::sync::oneshot;

/// Answers every prompt with a canned reply, counting calls per prompt kind.
pub struct EchoService {
    pub poem_reply: Result<String, ServiceError>,
    pub reassurance_reply: Result<String, ServiceError>,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl EchoService {
    pub fn ok(poem: &str, reassurance: &str) -> Arc<Self> {
        Arc::new(Self {
            poem_reply: Ok(poem.to_string()),
            reassurance_reply: Ok(reassurance.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: ServiceError) -> Arc<Self> {
        Arc::new(Self {
            poem_reply: Err(err.clone()),
            reassurance_reply: Err(err),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextFetchService for EchoService {
    async fn request_text(&self, prompt: &str) -> Result<String, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if prompt.contains("poem") {
            self.poem_reply.clone()
        } else {
            self.reassurance_reply.clone()
        }
    }
}

/// Parks each call until the test resolves it by call index.
#[derive(Default)]
pub struct GatedService {
    pending: Mutex<Vec<Option<oneshot::Sender<Result<String, ServiceError>>>>>,
}

impl GatedService {
    pub fn calls(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    pub fn resolve(&self, call: usize, reply: Result<String, ServiceError>) {
        let tx = self.pending.lock().unwrap()[call].take().unwrap();
        tx.send(reply).unwrap();
    }

    pub async fn wait_for_calls(&self, n: usize) {
        for _ in 0..100 {
            if self.calls() >= n {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {n} calls, saw {}", self.calls());
    }
}

#[async_trait]
impl TextFetchService for GatedService {
    async fn request_text(&self, _prompt: &str) -> Result<String, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(ServiceError::Network("gate dropped".to_string())))
    }
}

pub async fn let_tasks_run() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

pub fn seeded_config(seed: u64) -> BloomConfig {
    BloomConfig {
        canopy: CanopyParams {
            seed: Some(seed),
            ..CanopyParams::default()
        },
        ..BloomConfig::default()
    }
}
