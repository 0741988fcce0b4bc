use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use crate::error::TrainError;
use crate::network::network::{Network, Sample};
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// What a finished background run hands back.
#[derive(Debug)]
pub struct TrainOutcome {
    pub network: Network,
    /// Mean loss of the last epoch.
    pub final_loss: f64,
}

/// Completion handle for a training run started with `spawn_training`.
///
/// The run itself is a single uninterruptible loop on one worker thread; the
/// handle only lets the caller wait for it or poll whether it is done.
#[derive(Debug)]
pub struct TrainHandle {
    done_rx: mpsc::Receiver<TrainOutcome>,
    worker: JoinHandle<()>,
}

/// Moves `network` onto a background thread and trains it there with
/// `train_loop`. Completion is signalled over a channel once every epoch has
/// run.
pub fn spawn_training(mut network: Network, dataset: Vec<Sample>, config: TrainConfig) -> TrainHandle {
    let (done_tx, done_rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        let final_loss = train_loop(&mut network, &dataset, &config);
        // Receiver gone means the handle was dropped; nobody is waiting.
        let _ = done_tx.send(TrainOutcome { network, final_loss });
    });
    TrainHandle { done_rx, worker }
}

impl TrainHandle {
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Blocks until the run completes and returns the trained network.
    pub fn wait(self) -> Result<TrainOutcome, TrainError> {
        match self.done_rx.recv() {
            Ok(outcome) => {
                // The worker has nothing left to do after sending.
                let _ = self.worker.join();
                Ok(outcome)
            }
            Err(_) => match self.worker.join() {
                Err(_) => Err(TrainError::WorkerPanicked),
                Ok(()) => Err(TrainError::Disconnected),
            },
        }
    }
}
