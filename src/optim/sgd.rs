/// Plain gradient step applied edge by edge during the backward pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// New weight for an edge whose source currently outputs `source_value`,
    /// given the destination's scaled error `w_delta`.
    pub fn step(&self, weight: f64, source_value: f64, w_delta: f64) -> f64 {
        weight - source_value * w_delta * self.learning_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_against_the_error() {
        let sgd = Sgd::new(0.5);
        assert!((sgd.step(1.0, 1.0, 0.2) - 0.9).abs() < 1e-12);
        assert!((sgd.step(1.0, 1.0, -0.2) - 1.1).abs() < 1e-12);
        // A silent source leaves its edge alone.
        assert_eq!(sgd.step(1.0, 0.0, 0.2), 1.0);
    }
}
