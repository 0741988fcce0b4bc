use std::sync::mpsc;

use ferrite_lattice::{spawn_training, Network, Sample, TrainConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let dataset: Vec<Sample> = vec![
        (vec![0.0, 0.0], vec![0.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![1.0, 0.0], vec![1.0]),
        (vec![1.0, 1.0], vec![0.0]),
    ];

    let network = Network::new(2, 1);
    let epochs = 20_000;

    let (tx, rx) = mpsc::channel();
    let handle = spawn_training(network, dataset.clone(), TrainConfig::new(epochs).with_progress(tx));

    for stats in rx {
        if stats.epoch % 2_000 == 0 {
            info!("Epoch {}: loss = {:.6}", stats.epoch, stats.train_loss);
        }
    }

    let mut network = handle.wait().expect("training thread failed").network;

    for (input, _) in &dataset {
        println!("Input: {:?} -> Output: {:.4}", input, network.forward(input)[0]);
    }

    let model = network.model();
    println!("Model: {model}");

    let mut restored = Network::from_model(&model).expect("model string should decode");
    println!("Restored [1, 0] -> {:.4}", restored.forward(&[1.0, 0.0])[0]);
}
