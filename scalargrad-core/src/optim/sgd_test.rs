use super::*;
use crate::model::{Mlp, MlpConfig};
use crate::nn::losses::{MSELoss, Reduction};
use crate::nn::neuron::{Activation, Neuron};
use approx::assert_relative_eq;

fn linear_neuron(w: f64, b: f64) -> Neuron {
    Neuron::from_parameters(vec![Value::new(w)], Value::new(b), Activation::Linear)
}

fn backward_on(neuron: &Neuron, x: f64) {
    let out = neuron.call(&[Value::new(x)]).unwrap();
    out.backward();
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarGradError> {
    let mut neuron = linear_neuron(1.0, 0.5);
    backward_on(&neuron, 2.0); // dw = 2, db = 1

    let mut optim = SgdOptimizer::with_lr(0.1)?;
    optim.step(&mut neuron)?;

    assert_relative_eq!(neuron.weights()[0].data(), 1.0 - 0.1 * 2.0);
    assert_relative_eq!(neuron.bias().data(), 0.5 - 0.1 * 1.0);
    // Fresh leaves start without gradient.
    assert_eq!(neuron.weights()[0].grad(), 0.0);
    assert_eq!(optim.steps(), 1);
    Ok(())
}

#[test]
fn test_sgd_weight_decay() -> Result<(), ScalarGradError> {
    let mut neuron = linear_neuron(1.0, 0.0);
    backward_on(&neuron, 2.0);

    let mut optim = SgdOptimizer::new(0.1, 0.0, 0.5)?;
    optim.step(&mut neuron)?;
    // d = 2 + 0.5 * 1
    assert_relative_eq!(neuron.weights()[0].data(), 1.0 - 0.1 * 2.5);
    Ok(())
}

#[test]
fn test_sgd_momentum_accumulates_velocity() -> Result<(), ScalarGradError> {
    let mut neuron = linear_neuron(0.0, 0.0);
    let mut optim = SgdOptimizer::new(0.1, 0.9, 0.0)?;

    backward_on(&neuron, 1.0); // dw = 1
    optim.step(&mut neuron)?;
    assert_relative_eq!(neuron.weights()[0].data(), -0.1);

    backward_on(&neuron, 1.0); // dw = 1, v = 0.9 * 1 + 1
    optim.step(&mut neuron)?;
    assert_relative_eq!(neuron.weights()[0].data(), -0.1 - 0.1 * 1.9, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sgd_rejects_non_finite_gradient() -> Result<(), ScalarGradError> {
    let mut neuron = linear_neuron(1.0, 0.0);
    // d/dw (w / 0) is infinite.
    let out = &neuron.weights()[0] / 0.0;
    out.backward();

    let before = neuron.weights()[0].clone();
    let mut optim = SgdOptimizer::with_lr(0.1)?;
    assert_eq!(
        optim.step(&mut neuron),
        Err(ScalarGradError::NonFiniteGradient { index: 0 })
    );
    assert!(neuron.weights()[0].same_node(&before), "nothing replaced");
    assert_eq!(optim.steps(), 0);
    Ok(())
}

#[test]
fn test_sgd_parameter_count_change_with_momentum() -> Result<(), ScalarGradError> {
    let mut small = linear_neuron(1.0, 0.0);
    let mut large = Neuron::from_parameters(
        vec![Value::new(1.0), Value::new(1.0)],
        Value::new(0.0),
        Activation::Linear,
    );
    let mut optim = SgdOptimizer::new(0.1, 0.5, 0.0)?;
    optim.step(&mut small)?;
    assert_eq!(
        optim.step(&mut large),
        Err(ScalarGradError::ParameterCountMismatch {
            expected: 2,
            actual: 3
        })
    );
    Ok(())
}

#[test]
fn test_sgd_invalid_hyperparameters() {
    assert!(SgdOptimizer::with_lr(0.0).is_err());
    assert!(SgdOptimizer::with_lr(f64::NAN).is_err());
    assert!(SgdOptimizer::new(0.1, 1.0, 0.0).is_err());
    assert!(SgdOptimizer::new(0.1, 0.0, -1.0).is_err());
}

#[test]
fn test_sgd_learning_rate_accessors() -> Result<(), ScalarGradError> {
    let mut optim = SgdOptimizer::with_lr(0.1)?;
    optim.set_learning_rate(0.01);
    assert_eq!(optim.learning_rate(), 0.01);
    Ok(())
}

#[test]
fn test_sgd_reduces_mlp_loss() -> Result<(), ScalarGradError> {
    let config = MlpConfig::new(2, &[8, 1])
        .with_seed(42)
        .with_linear_output(true);
    let mut model = Mlp::from_config(&config)?;
    let xs = [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0], [0.5, 0.5]];
    let ys = [1.0, -1.0, 0.0, 0.25];
    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optim = SgdOptimizer::new(0.05, 0.0, 0.0)?;

    let evaluate = |model: &Mlp| -> Result<Value, ScalarGradError> {
        let mut preds = Vec::with_capacity(xs.len());
        for x in xs.iter() {
            let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
            preds.extend(model.forward(&inputs)?);
        }
        loss_fn.calculate(&preds, &ys)
    };

    let initial = evaluate(&model)?.data();
    for _ in 0..50 {
        let loss = evaluate(&model)?;
        loss.backward();
        optim.step(&mut model)?;
    }
    let last = evaluate(&model)?.data();
    assert!(
        last < initial,
        "loss should decrease: initial={} last={}",
        initial,
        last
    );
    Ok(())
}
