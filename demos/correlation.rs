use gradient_nn::{train::zip_dataset, LinearLayer, Rounding, TrainConfig, Trainer};

fn main() -> Result<(), gradient_nn::NetError> {
    let inputs = vec![
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0],
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![0.0, 0.0, 0.0],
        vec![1.0, 1.0, 0.0],
    ];
    // The target follows the middle input exactly.
    let expected: Vec<Vec<f64>> = [0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        .iter()
        .map(|&e| vec![e])
        .collect();

    let layer = LinearLayer::from_rows(vec![vec![0.5, 0.5, 0.5]])?;
    let config = TrainConfig::new(0.1).with_rounding(Rounding::Decimals(1));
    let mut trainer = Trainer::new(layer, zip_dataset(&inputs, &expected)?, config);

    trainer.run_epochs(15, |r| {
        println!("Epoch {:2}: error = {:.4}, weights = {:?}", r.epoch, r.error, r.weights.weights.data[0]);
    })?;
    Ok(())
}
