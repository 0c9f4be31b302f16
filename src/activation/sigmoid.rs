/// Logistic activation used by every non-input layer.
pub struct Sigmoid;

impl Sigmoid {
    /// σ(x) = 1 / (1 + e^-x)
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    /// Derivative expressed through the activation itself: σ·(1 - σ).
    ///
    /// Takes the already computed output `y = σ(x)`, not the pre-activation.
    pub fn derivative_from_output(y: f64) -> f64 {
        y * (1.0 - y)
    }
}
