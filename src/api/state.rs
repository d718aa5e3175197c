// src/api/state.rs
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::client::QcaasClient;
use crate::config::AppConfig;
use crate::models::ExperimentResult;
use crate::runner::Pacing;

/// Shared application state handed to every handler.
///
/// `last_result` is the transient hand-off slot between a finished run and
/// the results page; `run_guard` keeps at most one experiment in flight.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: QcaasClient,
    pub pacing: Pacing,
    last_result: Arc<Mutex<Option<ExperimentResult>>>,
    run_guard: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_pacing(config, Pacing::default())
    }

    /// Same state but with explicit stage pacing, so tests skip the demo
    /// delays.
    pub fn with_pacing(config: AppConfig, pacing: Pacing) -> Self {
        let client = QcaasClient::new(Client::new(), config.backend.clone());
        Self {
            config: Arc::new(config),
            client,
            pacing,
            last_result: Arc::new(Mutex::new(None)),
            run_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Claims the single run slot. `None` while another run is in flight;
    /// dropping the guard releases the slot.
    pub fn try_begin_run(&self) -> Option<OwnedMutexGuard<()>> {
        self.run_guard.clone().try_lock_owned().ok()
    }

    /// Hands a finished result to the results page.
    pub async fn store_result(&self, result: ExperimentResult) {
        *self.last_result.lock().await = Some(result);
    }

    /// Consumes the pending result. One render per run; the next call sees
    /// nothing.
    pub async fn take_result(&self) -> Option<ExperimentResult> {
        self.last_result.lock().await.take()
    }

    /// Drops any stale result when a new run starts.
    pub async fn clear_result(&self) {
        *self.last_result.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metrics;

    fn test_state() -> AppState {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        AppState::with_pacing(config, Pacing::instant())
    }

    fn sample_result() -> ExperimentResult {
        ExperimentResult {
            svm_metrics: Metrics {
                accuracy: 0.9,
                precision: 0.9,
                recall: 0.9,
                f1_score: 0.9,
            },
            vqc_metrics: Metrics {
                accuracy: 0.8,
                precision: 0.8,
                recall: 0.8,
                f1_score: 0.8,
            },
            winner: "SVM".to_string(),
            execution_time_seconds: 1.5,
            dataset_name: "iris".to_string(),
        }
    }

    #[tokio::test]
    async fn result_slot_is_consumed_on_take() {
        let state = test_state();
        assert!(state.take_result().await.is_none());

        state.store_result(sample_result()).await;
        assert_eq!(state.take_result().await, Some(sample_result()));
        assert!(state.take_result().await.is_none());
    }

    #[tokio::test]
    async fn clear_drops_a_pending_result() {
        let state = test_state();
        state.store_result(sample_result()).await;
        state.clear_result().await;
        assert!(state.take_result().await.is_none());
    }

    #[tokio::test]
    async fn run_guard_admits_one_run_at_a_time() {
        let state = test_state();

        let guard = state.try_begin_run().expect("first claim succeeds");
        assert!(state.try_begin_run().is_none());

        drop(guard);
        assert!(state.try_begin_run().is_some());
    }
}
