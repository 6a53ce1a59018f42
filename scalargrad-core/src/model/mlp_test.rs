use super::*;
use crate::nn::init::Init;
use crate::nn::neuron::Neuron;
use crate::OpKind;

fn inputs() -> Vec<Value> {
    vec![Value::new(1.0), Value::new(2.0), Value::new(3.0)]
}

#[test]
fn test_mlp_parameter_count() {
    // 3->4: 16, 4->4: 20, 4->1: 5
    let m = Mlp::new(3, &[4, 4, 1]).unwrap();
    assert_eq!(m.parameters().len(), 41);
    assert_eq!(m.layers().len(), 3);
    assert_eq!(m.nin(), 3);
}

#[test]
fn test_mlp_forward_backward_round_trip() {
    let m = Mlp::new(3, &[4, 4, 1]).unwrap();
    let out = m.call(&inputs()).unwrap();
    let out = out.into_single().expect("single-neuron last layer");
    assert!(out.data() >= 0.0);
    out.backward();
    assert_eq!(out.grad(), 1.0);
}

#[test]
fn test_mlp_many_outputs() {
    let m = Mlp::new(3, &[4, 2]).unwrap();
    let out = m.call(&inputs()).unwrap();
    assert!(matches!(out, LayerOutput::Many(ref v) if v.len() == 2));
}

#[test]
fn test_mlp_seeded_networks_match() {
    let config = MlpConfig::new(3, &[4, 4, 1]).with_seed(1234);
    let a = Mlp::from_config(&config).unwrap();
    let b = Mlp::from_config(&config).unwrap();
    let pa: Vec<f64> = a.parameters().iter().map(Value::data).collect();
    let pb: Vec<f64> = b.parameters().iter().map(Value::data).collect();
    assert_eq!(pa, pb);
}

#[test]
fn test_mlp_linear_output() {
    let config = MlpConfig::new(2, &[3, 1])
        .with_init(Init::Constant(-1.0))
        .with_linear_output(true);
    let m = Mlp::from_config(&config).unwrap();
    let out = m
        .call(&[Value::new(1.0), Value::new(1.0)])
        .unwrap()
        .into_single()
        .unwrap();
    // Hidden layer: relu(-2) = 0 for every neuron; output: 0 + bias = 0, not rectified.
    assert_eq!(out.data(), 0.0);
    assert_eq!(out.op(), OpKind::Add);
}

#[test]
fn test_mlp_gradients_flow_to_every_layer() {
    let config = MlpConfig::new(2, &[2, 1])
        .with_init(Init::Constant(0.5))
        .with_seed(0);
    let m = Mlp::from_config(&config).unwrap();
    let out = m
        .call(&[Value::new(1.0), Value::new(2.0)])
        .unwrap()
        .into_single()
        .unwrap();
    // hidden = relu(0.5 + 1.0) = 1.5 each, out = relu(0.5 * 1.5 * 2) = 1.5
    assert_eq!(out.data(), 1.5);
    out.backward();

    let named = m.named_parameters();
    let grad_of = |name: &str| {
        named
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.grad())
            .unwrap()
    };
    assert_eq!(grad_of("layers.1.neurons.0.w.0"), 1.5);
    assert_eq!(grad_of("layers.1.neurons.0.b"), 1.0);
    // d out / d w(hidden 0, input 1) = w_out * x1 = 0.5 * 2
    assert_eq!(grad_of("layers.0.neurons.0.w.1"), 1.0);
    assert_eq!(grad_of("layers.0.neurons.1.b"), 0.5);
}

#[test]
fn test_mlp_zero_grad_resets_parameters() {
    let m = Mlp::from_config(&MlpConfig::default().with_init(Init::Constant(0.5))).unwrap();
    let out = m.call(&inputs()).unwrap().into_single().unwrap();
    out.backward();
    assert!(m.parameters().iter().any(|p| p.grad() != 0.0));
    m.zero_grad();
    assert!(m.parameters().iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_mlp_input_arity_error() {
    let m = Mlp::new(3, &[4, 1]).unwrap();
    assert!(matches!(
        m.call(&[Value::new(1.0)]),
        Err(ScalarGradError::InputArityMismatch {
            expected: 3,
            actual: 1,
            ..
        })
    ));
}

#[test]
fn test_mlp_invalid_config() {
    assert!(matches!(
        Mlp::new(3, &[]),
        Err(ScalarGradError::InvalidConfig(_))
    ));
}

#[test]
fn test_mlp_from_layers_checks_chaining() {
    let l0 = Layer::new(3, 4).unwrap();
    let l1 = Layer::new(5, 1).unwrap();
    assert!(matches!(
        Mlp::from_layers(vec![l0.clone(), l1]),
        Err(ScalarGradError::InputArityMismatch {
            expected: 4,
            actual: 5,
            ..
        })
    ));

    let head = Layer::from_neurons(
        4,
        vec![Neuron::from_parameters(
            (0..4).map(|_| Value::new(1.0)).collect(),
            Value::new(0.0),
            Activation::Linear,
        )],
    )
    .unwrap();
    let m = Mlp::from_layers(vec![l0, head]).unwrap();
    assert_eq!(m.num_parameters(), 16 + 5);
    assert!(matches!(
        Mlp::from_layers(Vec::new()),
        Err(ScalarGradError::EmptyInput(_))
    ));
}

#[test]
fn test_mlp_from_config_rejects_overflowing_uniform_range() {
    let config = MlpConfig::new(2, &[2, 1]).with_init(Init::Uniform {
        low: -f64::MAX,
        high: f64::MAX,
    });
    assert!(matches!(
        Mlp::from_config(&config),
        Err(ScalarGradError::InvalidConfig(_))
    ));
}
