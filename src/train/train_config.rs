use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

pub const DEFAULT_EPOCHS: usize = 100_000;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`      — number of full, in-order passes over the dataset
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. A dropped receiver only stops the
///                   reports, training always runs every epoch.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub epochs: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(epochs: usize) -> Self {
        TrainConfig { epochs, progress_tx: None }
    }

    pub fn with_progress(mut self, progress_tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(progress_tx);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_EPOCHS)
    }
}
