use serde::{Serialize, Deserialize};

/// Activation applied to a neuron's weighted input sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Logistic sigmoid `1 / (1 + e^-x)`.
    #[default]
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Derivative with respect to the pre-activation sum `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_one_half() {
        let act = ActivationFunction::Sigmoid;
        assert_eq!(act.function(0.0), 0.5);
        assert_eq!(act.derivative(0.0), 0.25);
    }

    #[test]
    fn sigmoid_uses_the_natural_exponential() {
        let act = ActivationFunction::Sigmoid;
        for x in [-3.7, -0.25, 0.1, 1.0, 2.5, 9.0] {
            assert_eq!(act.function(x), 1.0 / (1.0 + (-x).exp()));
        }
    }

    #[test]
    fn sigmoid_saturates() {
        let act = ActivationFunction::Sigmoid;
        assert!(act.function(40.0) > 0.999_999);
        assert!(act.function(-40.0) < 1e-6);
        assert!(act.derivative(40.0) < 1e-6);
    }
}
