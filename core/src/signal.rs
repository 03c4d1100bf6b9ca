use crate::frame::GRAPH_WIDTH;
use std::{f64::consts::PI, fmt};

/// The periodic function used to synthesize the displayed signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveformKind {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl WaveformKind {
    /// All waveforms in cycling order.
    pub const ALL: [Self; 4] =
        [Self::Sine, Self::Square, Self::Triangle, Self::Sawtooth];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The waveform selected after this one when cycling.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Sawtooth => "sawtooth",
        }
    }
}

impl fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Instantaneous amplitude in [-1, 1] of the waveform at column `x`.
///
/// The column is normalized to a fraction of the graph width so that
/// `frequency` counts whole periods per horizontal sweep.
pub fn evaluate(
    x: usize,
    kind: WaveformKind,
    phase: f64,
    frequency: f64,
) -> f64 {
    let t = x as f64 / GRAPH_WIDTH as f64;
    let theta = (2.0 * PI * frequency * t) + phase;
    match kind {
        WaveformKind::Sine => theta.sin(),
        WaveformKind::Square => {
            if theta.sin() >= 0.0 {
                1.0
            } else {
                -1.0
            }
        }
        WaveformKind::Triangle => (2.0 / PI) * theta.sin().asin(),
        // The phase is applied a second time (halved) for sawtooth only.
        WaveformKind::Sawtooth => {
            (2.0 / PI) * (theta + (phase / 2.0)).tan().atan()
        }
    }
}

/// Like `evaluate` but selects the waveform by raw index, yielding silence
/// for indices that don't name a waveform.
pub fn evaluate_index(
    x: usize,
    index: usize,
    phase: f64,
    frequency: f64,
) -> f64 {
    WaveformKind::from_index(index)
        .map_or(0.0, |kind| evaluate(x, kind, phase, frequency))
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn all_waveforms_are_bounded() {
        let mut rng = StdRng::seed_from_u64(0x5ca1ab1e);
        for _ in 0..2000 {
            let x = rng.random_range(0..GRAPH_WIDTH);
            let phase = rng.random_range(0.0..1000.0);
            let frequency = rng.random_range(0.1..=5.0);
            for kind in WaveformKind::ALL {
                let value = evaluate(x, kind, phase, frequency);
                assert!(
                    (-1.0 - EPSILON..=1.0 + EPSILON).contains(&value),
                    "{kind} produced {value} at x={x} phase={phase} frequency={frequency}"
                );
            }
        }
    }

    #[test]
    fn square_is_exactly_unit() {
        for x in 0..GRAPH_WIDTH {
            let value = evaluate(x, WaveformKind::Square, 0.3, 2.7);
            assert!(value == 1.0 || value == -1.0);
        }
    }

    #[test]
    fn square_switches_at_zero_crossing() {
        // sin(0) == 0 counts as the positive half.
        assert_eq!(evaluate(0, WaveformKind::Square, 0.0, 1.0), 1.0);
        assert_eq!(evaluate(180, WaveformKind::Square, 0.0, 1.0), -1.0);
    }

    #[test]
    fn sine_quarter_period() {
        let value = evaluate(GRAPH_WIDTH / 4, WaveformKind::Sine, 0.0, 1.0);
        assert!((value - 1.0).abs() < EPSILON);
    }

    #[test]
    fn triangle_is_linear_between_peaks() {
        // A quarter of the way into the rising edge of the first period.
        let value = evaluate(GRAPH_WIDTH / 8, WaveformKind::Triangle, 0.0, 1.0);
        assert!((value - 0.5).abs() < 1e-9);
    }

    #[test]
    fn sawtooth_applies_half_phase_on_top_of_full_phase() {
        let x = 37;
        let phase = 1.3;
        let frequency = 2.2;
        let theta =
            (2.0 * PI * frequency * (x as f64 / GRAPH_WIDTH as f64)) + phase;
        let expected = (2.0 / PI) * (theta + (phase / 2.0)).tan().atan();
        assert_eq!(evaluate(x, WaveformKind::Sawtooth, phase, frequency), expected);
    }

    #[test]
    fn unknown_index_is_silent() {
        assert_eq!(evaluate_index(10, 4, 0.5, 1.0), 0.0);
        assert_eq!(evaluate_index(10, usize::MAX, 0.5, 1.0), 0.0);
        assert_eq!(
            evaluate_index(10, 1, 0.5, 1.0),
            evaluate(10, WaveformKind::Square, 0.5, 1.0)
        );
    }

    #[test]
    fn cycling_four_times_is_identity() {
        for kind in WaveformKind::ALL {
            assert_eq!(kind.next().next().next().next(), kind);
            assert_ne!(kind.next(), kind);
        }
    }
}
