use crate::signal::WaveformKind;

pub const AMPLITUDE_MIN: f64 = 0.0;
pub const AMPLITUDE_MAX: f64 = 1.0;
pub const FREQUENCY_MIN: f64 = 0.1;
pub const FREQUENCY_MAX: f64 = 5.0;

/// Amount amplitude and frequency change per command.
pub const STEP: f64 = 0.1;

/// Radians added to the phase each tick.
pub const PHASE_STEP: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AmplitudeUp,
    AmplitudeDown,
    FrequencyUp,
    FrequencyDown,
    CycleWaveform,
    Exit,
}

/// Live parameters of the visualizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    amplitude: f64,
    frequency: f64,
    waveform: WaveformKind,
    running: bool,
    phase: f64,
}

impl ControlState {
    /// Values outside the allowed ranges are clamped.
    pub fn new(amplitude: f64, frequency: f64, waveform: WaveformKind) -> Self {
        Self {
            amplitude: amplitude.clamp(AMPLITUDE_MIN, AMPLITUDE_MAX),
            frequency: frequency.clamp(FREQUENCY_MIN, FREQUENCY_MAX),
            waveform,
            running: true,
            phase: 0.0,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn waveform(&self) -> WaveformKind {
        self.waveform
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Moves the waveform along by one tick.
    pub fn advance_phase(&mut self) {
        self.phase += PHASE_STEP;
    }

    pub fn apply(&mut self, command: Command) {
        use Command::*;
        match command {
            AmplitudeUp => {
                self.amplitude = (self.amplitude + STEP).min(AMPLITUDE_MAX);
                log::info!("amplitude increased to {}", self.amplitude);
            }
            AmplitudeDown => {
                self.amplitude = (self.amplitude - STEP).max(AMPLITUDE_MIN);
                log::info!("amplitude decreased to {}", self.amplitude);
            }
            FrequencyUp => {
                self.frequency = (self.frequency + STEP).min(FREQUENCY_MAX);
                log::info!("frequency increased to {}", self.frequency);
            }
            FrequencyDown => {
                self.frequency = (self.frequency - STEP).max(FREQUENCY_MIN);
                log::info!("frequency decreased to {}", self.frequency);
            }
            CycleWaveform => {
                self.waveform = self.waveform.next();
                log::info!("waveform changed to {}", self.waveform);
            }
            Exit => {
                if self.running {
                    log::info!("exit requested");
                }
                self.running = false;
            }
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(0.0, 1.0, WaveformKind::Sine)
    }
}
