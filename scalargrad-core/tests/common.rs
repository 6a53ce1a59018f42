use scalargrad_core::Value;

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn values(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

/// Builds `(a + b) * (a * b)` and returns the root.
#[allow(dead_code)]
pub fn shared_product(a: &Value, b: &Value) -> Value {
    let c = a + b;
    let d = a * b;
    c * d
}

/// Node labels and arities in topological order; equal for isomorphic graphs.
#[allow(dead_code)]
pub fn graph_shape(root: &Value) -> Vec<(String, usize)> {
    scalargrad_core::autograd::topological_sort(root)
        .iter()
        .map(|v| (v.op().to_string(), v.prev().len()))
        .collect()
}
