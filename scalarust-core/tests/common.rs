use scalarust_core::Scalar;

// Shared helpers for the integration tests.
// allow(dead_code): each test crate only uses part of this module.

/// Builds `((a * b) * b)` from fresh leaves and returns `(a, b, c)`.
#[allow(dead_code)]
pub(crate) fn build_reused_product(a: f64, b: f64) -> (Scalar, Scalar, Scalar) {
    let a = Scalar::new(a);
    let b = Scalar::new(b);
    let c = &(&a * &b) * &b;
    (a, b, c)
}

/// Collects every node's gradient in topological order.
#[allow(dead_code)]
pub(crate) fn graph_gradients(root: &Scalar) -> Vec<f64> {
    scalarust_core::autograd::graph::topological_sort(root)
        .iter()
        .map(Scalar::gradient)
        .collect()
}
