use gradient_nn::{LinearLayer, Rounding, TrainConfig, Trainer, TrainingExample};

fn main() -> Result<(), gradient_nn::NetError> {
    let layer = LinearLayer::from_rows(vec![
        vec![7.1, 1.1, 4.4],
        vec![5.7, 3.0, 9.1],
        vec![2.2, 5.3, 7.0],
    ])?;
    let input = vec![0.2, 2.3, 1.2];
    let dataset = vec![TrainingExample::new(input.clone(), vec![8.0, 46.0, 0.1])];
    let config = TrainConfig::new(0.2).with_rounding(Rounding::Decimals(2));

    let mut trainer = Trainer::new(layer, dataset, config);
    let outcome = trainer.run_until_converged(|r| {
        println!("Epoch {}: error = {:.4}", r.epoch, r.error);
        for (i, row) in r.weights.weights.data.iter().enumerate() {
            println!("  weights for output {i}: {row:?}");
        }
    })?;

    println!("Converged after {} epochs", outcome.epochs);
    println!("Predictions: {:?}", trainer.weights().predict(&input)?);
    Ok(())
}
