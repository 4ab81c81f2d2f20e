use gradient_nn::{Model, NetError, Rounding, TrainConfig, Trainer, TrainingExample, TwoLayerNetwork};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), NetError> {
    tracing_subscriber::fmt().with_env_filter("gradient_nn=info").init();

    let dataset = vec![
        TrainingExample::scalar(vec![1.0, 1.0, 1.0], 1.0),
        TrainingExample::scalar(vec![1.0, 1.0, 0.0], 0.0),
        TrainingExample::scalar(vec![0.0, 1.0, 0.0], 1.0),
        TrainingExample::scalar(vec![0.0, 1.0, 1.0], 0.0),
    ];

    let network = TwoLayerNetwork::random(3, 4, &mut StdRng::seed_from_u64(3));
    let config = TrainConfig::new(0.1)
        .with_rounding(Rounding::Decimals(1))
        .with_max_epochs(5000);
    let mut trainer = Trainer::new(network, dataset.clone(), config);

    match trainer.run_until_converged(|_| {}) {
        Ok(outcome) => println!("Converged after {} epochs", outcome.epochs),
        Err(NetError::NonTermination { epochs, last_error }) => {
            println!("Gave up after {epochs} epochs, error still {last_error:.4}");
        }
        Err(e) => return Err(e),
    }

    for example in &dataset {
        let out = trainer.weights().predict(&example.input)?;
        println!("Input: {:?} -> Output: {:.4} (expected {})", example.input, out[0], example.expected[0]);
    }
    Ok(())
}
