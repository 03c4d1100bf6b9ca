mod host;
mod keys;

use clap::{Parser, ValueEnum};
use host::SdlHost;
use std::time::Duration;
use wavescope_core::{Rgb24, Visualizer, WaveformKind};

#[derive(Clone, Copy, ValueEnum)]
enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl From<Waveform> for WaveformKind {
    fn from(waveform: Waveform) -> Self {
        match waveform {
            Waveform::Sine => Self::Sine,
            Waveform::Square => Self::Square,
            Waveform::Triangle => Self::Triangle,
            Waveform::Sawtooth => Self::Sawtooth,
        }
    }
}

/// Persistence-of-vision waveform display.
///
/// Arrow up/down change amplitude, arrow right/left change frequency, W or
/// space cycles the waveform, and M or escape exits.
#[derive(Parser)]
struct Args {
    /// Window pixels per graph pixel.
    #[arg(long, default_value_t = 3)]
    scale: u32,
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
    #[arg(long, default_value_t = 0.0)]
    amplitude: f64,
    #[arg(long, default_value_t = 1.0)]
    frequency: f64,
    #[arg(long, value_enum, default_value_t = Waveform::Sine)]
    waveform: Waveform,
    #[arg(long, default_value_t = 0)]
    background_red: u8,
    #[arg(long, default_value_t = 0)]
    background_green: u8,
    #[arg(long, default_value_t = 0)]
    background_blue: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut host = SdlHost::new("Wavescope", args.scale.max(1))?;
    let visualizer = Visualizer::builder()
        .tick_period(Duration::from_millis(args.tick_ms))
        .amplitude(args.amplitude)
        .frequency(args.frequency)
        .waveform(args.waveform.into())
        .background(Rgb24::new(
            args.background_red,
            args.background_green,
            args.background_blue,
        ))
        .build();
    let control = visualizer.run(&mut host);
    log::info!(
        "stopped on {} with amplitude {:.1} and frequency {:.1}",
        control.waveform(),
        control.amplitude(),
        control.frequency(),
    );
    Ok(())
}
