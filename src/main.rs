// Trains the two-layer relu network on a small four-pattern dataset and
// prints one JSON line per epoch.
//
//   cargo run -- [config.json]
//
// Set RUST_LOG=gradient_nn=debug to trace every example.
use gradient_nn::{NetError, Rounding, TrainConfig, Trainer, TrainingExample, TwoLayerNetwork};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct RunConfig {
    #[serde(flatten)]
    train: TrainConfig,
    #[serde(default = "default_hidden_size")]
    hidden_size: usize,
    #[serde(default)]
    seed: u64,
}

fn default_hidden_size() -> usize {
    4
}

impl RunConfig {
    fn load(path: Option<String>) -> Result<RunConfig, NetError> {
        match path {
            Some(path) => {
                let reader = std::io::BufReader::new(std::fs::File::open(path)?);
                Ok(serde_json::from_reader(reader)?)
            }
            None => Ok(RunConfig {
                train: TrainConfig::new(0.1).with_rounding(Rounding::Decimals(1)),
                hidden_size: default_hidden_size(),
                seed: 0,
            }),
        }
    }
}

fn main() -> Result<(), NetError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradient_nn=info")))
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::load(std::env::args().nth(1))?;
    info!(?config, "starting run");

    let dataset = vec![
        TrainingExample::scalar(vec![1.0, 1.0, 1.0], 1.0),
        TrainingExample::scalar(vec![1.0, 1.0, 0.0], 0.0),
        TrainingExample::scalar(vec![0.0, 1.0, 0.0], 1.0),
        TrainingExample::scalar(vec![0.0, 1.0, 1.0], 0.0),
    ];

    let mut rng = StdRng::seed_from_u64(config.seed);
    let network = TwoLayerNetwork::random(3, config.hidden_size, &mut rng);
    let mut trainer = Trainer::new(network, dataset, config.train);

    let outcome = trainer.run_until_converged(|result| match serde_json::to_string(result) {
        Ok(line) => println!("{line}"),
        Err(e) => warn!(error = %e, "could not serialize epoch result"),
    })?;

    info!(epochs = outcome.epochs, error = outcome.error, "training finished");
    Ok(())
}
