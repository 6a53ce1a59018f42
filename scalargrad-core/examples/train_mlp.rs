//! # Training a Small MLP
//!
//! Fits a `3 -> [4, 4, 1]` network to four labelled points with mean squared
//! error and plain SGD.
//!
//! Run with:
//! `RUST_LOG=info cargo run --example train_mlp`

use log::info;
use scalargrad_core::model::{Mlp, MlpConfig};
use scalargrad_core::nn::{MSELoss, Module, Reduction};
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let config = MlpConfig::new(3, &[4, 4, 1])
        .with_seed(42)
        .with_linear_output(true);
    let mut model = Mlp::from_config(&config)?;
    println!("MLP created with {} parameters", model.num_parameters());

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(0.05, 0.9, 0.0)?;
    let num_epochs = 50;

    for epoch in 0..num_epochs {
        let mut preds = Vec::with_capacity(xs.len());
        for x in xs.iter() {
            let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
            preds.extend(model.forward(&inputs)?);
        }
        let loss = loss_fn.calculate(&preds, &ys)?;

        optimizer.zero_grad(&model);
        loss.backward();
        optimizer.step(&mut model)?;

        if epoch % 10 == 0 || epoch + 1 == num_epochs {
            info!("epoch {}: loss = {:.6}", epoch, loss.data());
            println!("Epoch [{}/{}], Loss: {:.4}", epoch + 1, num_epochs, loss.data());
        }
    }

    println!("\nTraining finished. Predictions:");
    for (x, y) in xs.iter().zip(ys.iter()) {
        let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
        let out = model.forward(&inputs)?;
        println!("  {:?} -> {:.4} (target {})", x, out[0].data(), y);
    }
    Ok(())
}
