use std::time::Instant;

use tracing::{debug, info, trace};

use crate::network::network::{Network, Sample};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` for exactly `config.epochs` epochs and returns the mean
/// loss of the **last completed epoch** (0.0 when no epoch ran).
///
/// Every epoch walks `dataset` in the given order: no shuffling, no loss
/// threshold, no early exit. The loop cannot be interrupted once started.
pub fn train_loop(network: &mut Network, dataset: &[Sample], config: &TrainConfig) -> f64 {
    info!(
        epochs = config.epochs,
        samples = dataset.len(),
        learning_rate = network.learning_rate(),
        "training started"
    );
    let run_start = Instant::now();
    let mut progress_tx = config.progress_tx.as_ref();
    let mut last_train_loss = 0.0;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        last_train_loss = network.train_once(dataset);
        trace!(epoch, loss = last_train_loss, "epoch finished");

        if let Some(tx) = progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                train_loss: last_train_loss,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            if tx.send(stats).is_err() {
                debug!(epoch, "progress receiver dropped, continuing without reports");
                progress_tx = None;
            }
        }
    }

    info!(
        elapsed_ms = run_start.elapsed().as_millis() as u64,
        final_loss = last_train_loss,
        "training finished"
    );
    last_train_loss
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use crate::network::config::NetworkConfig;
    use rand::{rngs::StdRng, SeedableRng};

    fn network() -> Network {
        Network::from_config_with_rng(&NetworkConfig::new(2, 1), &mut StdRng::seed_from_u64(9))
    }

    fn dataset() -> Vec<Sample> {
        vec![(vec![0.0, 1.0], vec![1.0]), (vec![1.0, 1.0], vec![0.0])]
    }

    #[test]
    fn loop_equals_repeated_train_once() {
        let mut looped = network();
        let mut manual = looped.clone();

        let loss = train_loop(&mut looped, &dataset(), &TrainConfig::new(25));
        let mut manual_loss = 0.0;
        for _ in 0..25 {
            manual_loss = manual.train_once(&dataset());
        }

        assert_eq!(looped, manual);
        assert_eq!(loss, manual_loss);
    }

    #[test]
    fn reports_every_epoch_in_order() {
        let (tx, rx) = mpsc::channel();
        let config = TrainConfig::new(5).with_progress(tx);
        train_loop(&mut network(), &dataset(), &config);
        drop(config);

        let epochs: Vec<usize> = rx.iter().map(|s| s.epoch).collect();
        assert_eq!(epochs, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn dropped_receiver_does_not_stop_training() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut reported = network();
        let mut silent = reported.clone();

        train_loop(&mut reported, &dataset(), &TrainConfig::new(10).with_progress(tx));
        train_loop(&mut silent, &dataset(), &TrainConfig::new(10));

        assert_eq!(reported, silent);
    }

    #[test]
    fn zero_epochs_is_a_no_op() {
        let mut trained = network();
        let before = trained.clone();
        assert_eq!(train_loop(&mut trained, &dataset(), &TrainConfig::new(0)), 0.0);
        assert_eq!(trained, before);
    }
}
