use crate::{
    frame::GRAPH_WIDTH,
    signal::{WaveformKind, evaluate},
};

/// Smoothing factor used by the visualizer. Small values give a long settling
/// time (roughly `1 / ALPHA` ticks).
pub const ALPHA: f64 = 0.1;

/// One step of a first-order exponential low-pass filter.
pub fn apply(new_value: f64, previous: f64, alpha: f64) -> f64 {
    (alpha * new_value) + ((1.0 - alpha) * previous)
}

/// The smoothed amplitude of each column of the graph. Each column is
/// filtered independently across ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState(Vec<f64>);

impl FilterState {
    pub fn new() -> Self {
        Self(vec![0.0; GRAPH_WIDTH])
    }

    pub fn reset(&mut self) {
        self.0.iter_mut().for_each(|value| *value = 0.0);
    }

    /// Feed the current waveform through the filter, column by column.
    pub fn update(
        &mut self,
        kind: WaveformKind,
        phase: f64,
        frequency: f64,
        alpha: f64,
    ) {
        for (x, value) in self.0.iter_mut().enumerate() {
            *value = apply(evaluate(x, kind, phase, frequency), *value, alpha);
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn converges_to_constant_input() {
        let target = 0.73;
        let mut previous = 0.0;
        for _ in 0..150 {
            previous = apply(target, previous, ALPHA);
        }
        assert!((previous - target).abs() < 1e-6);
    }

    #[test]
    fn alpha_of_one_passes_input_through() {
        assert_eq!(apply(0.25, -0.9, 1.0), 0.25);
    }

    #[test]
    fn first_update_is_a_tenth_of_the_signal() {
        let mut state = FilterState::new();
        state.update(WaveformKind::Square, 0.0, 1.0, ALPHA);
        assert_eq!(state.values().len(), GRAPH_WIDTH);
        assert!((state.values()[0] - 0.1).abs() < 1e-12);
        assert!((state.values()[GRAPH_WIDTH - 1] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn columns_settle_on_a_static_waveform() {
        let mut state = FilterState::new();
        for _ in 0..200 {
            state.update(WaveformKind::Sine, 0.4, 1.5, ALPHA);
        }
        for (x, &value) in state.values().iter().enumerate() {
            let expected = evaluate(x, WaveformKind::Sine, 0.4, 1.5);
            assert!((value - expected).abs() < 1e-6);
        }
        state.reset();
        assert!(state.values().iter().all(|&value| value == 0.0));
    }
}
