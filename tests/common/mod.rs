//! Shared test utilities and fake services.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use email_summary::client::{SummarizeError, SummaryResult, SummaryService};
use email_summary::config::ServiceConfig;
use email_summary::ui::summary::{Resolution, ResolutionSink};
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::sync::{mpsc, Notify};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Service config pointing at `base_url` with short timeouts.
pub fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        request_timeout_seconds: Some(10),
    }
}

/// Sink that forwards resolutions into a channel the test can await.
pub fn channel_sink() -> (ResolutionSink, mpsc::UnboundedReceiver<Resolution>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink: ResolutionSink = Arc::new(move |resolution: Resolution| {
        let _ = tx.send(resolution);
    });
    (sink, rx)
}

pub fn summary(text: &str, actions: &[&str]) -> SummaryResult {
    SummaryResult {
        summary: text.to_string(),
        top_actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

/// In-process service that replays queued outcomes.
///
/// When gated, each call waits for [`ScriptedService::release`] before
/// returning, so tests can observe the pending state.
#[derive(Default)]
pub struct ScriptedService {
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
    outcomes: Mutex<VecDeque<Result<SummaryResult, SummarizeError>>>,
    gate: Option<Notify>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn push(&self, outcome: Result<SummaryResult, SummarizeError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Let one waiting (or the next) call proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SummaryService for ScriptedService {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, SummarizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(summary("default summary", &[])))
    }
}
