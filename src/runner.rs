// src/runner.rs
use std::time::{Duration, Instant};

use tokio::time::sleep;

use crate::client::QcaasClient;
use crate::errors::Result;
use crate::models::{Dataset, ExperimentResult};

/// The five stages a run moves through. Strictly forward, never revisited
/// within one run; a failed run stops at the stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    DataPrepared,
    TrainingSvm,
    TrainingVqc,
    Finalizing,
    Complete,
}

impl Phase {
    pub const SEQUENCE: [Phase; 5] = [
        Phase::DataPrepared,
        Phase::TrainingSvm,
        Phase::TrainingVqc,
        Phase::Finalizing,
        Phase::Complete,
    ];

    /// Label shown in the loading panel and the progress feed.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::DataPrepared => "Data Loaded & Prepared",
            Phase::TrainingSvm => "Training Classical SVM",
            Phase::TrainingVqc => "Training Quantum VQC",
            Phase::Finalizing => "Finalizing Results",
            Phase::Complete => "Complete",
        }
    }

    /// Zero-based position in `SEQUENCE`.
    pub fn index(&self) -> usize {
        match self {
            Phase::DataPrepared => 0,
            Phase::TrainingSvm => 1,
            Phase::TrainingVqc => 2,
            Phase::Finalizing => 3,
            Phase::Complete => 4,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stage delays. The simulated stages keep the demo pacing of the product
/// UI; the backend call at `TrainingVqc` takes as long as it takes.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub data_prepared: Duration,
    pub training_svm: Duration,
    pub finalizing: Duration,
    pub complete: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            data_prepared: Duration::from_millis(3000),
            training_svm: Duration::from_millis(5000),
            finalizing: Duration::from_millis(1000),
            complete: Duration::from_millis(500),
        }
    }
}

impl Pacing {
    /// Zero delays, for tests.
    pub fn instant() -> Self {
        Self {
            data_prepared: Duration::ZERO,
            training_svm: Duration::ZERO,
            finalizing: Duration::ZERO,
            complete: Duration::ZERO,
        }
    }
}

/// Drives one experiment run: reports each phase to `on_phase`, waits out
/// the stage pacing, performs the real backend call at `TrainingVqc`, and
/// returns the backend's verdict. On failure the error propagates
/// immediately and the later phases are never reported.
pub async fn run_experiment<F>(
    client: &QcaasClient,
    dataset: Dataset,
    pacing: Pacing,
    mut on_phase: F,
) -> Result<ExperimentResult>
where
    F: FnMut(Phase),
{
    let run_start = Instant::now();
    println!("🚀 Starting experiment run for dataset: {}", dataset);

    on_phase(Phase::DataPrepared);
    sleep(pacing.data_prepared).await;

    on_phase(Phase::TrainingSvm);
    sleep(pacing.training_svm).await;

    on_phase(Phase::TrainingVqc);
    let result = client.run_comparison(dataset).await?;

    on_phase(Phase::Finalizing);
    sleep(pacing.finalizing).await;

    on_phase(Phase::Complete);
    sleep(pacing.complete).await;

    println!(
        "✅ Experiment finished in {}ms (winner: {})",
        run_start.elapsed().as_millis(),
        result.winner
    );

    Ok(result)
}
