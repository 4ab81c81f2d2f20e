use gradient_nn::{LinearLayer, Rounding, TrainConfig, Trainer, TrainingExample};

fn main() -> Result<(), gradient_nn::NetError> {
    let layer = LinearLayer::from_rows(vec![vec![10.0]])?;
    let dataset = vec![TrainingExample::scalar(vec![0.2], 8.0)];
    let config = TrainConfig::new(24.0).with_rounding(Rounding::Decimals(2));

    let mut trainer = Trainer::new(layer, dataset, config);
    let outcome = trainer.run_until_converged(|r| {
        println!("Epoch {}: error = {:.6}, weight = {:.6}", r.epoch, r.error, r.weights.weights.data[0][0]);
    })?;

    println!("Converged after {} epochs", outcome.epochs);
    Ok(())
}
