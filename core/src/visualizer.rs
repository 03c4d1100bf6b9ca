use crate::{
    control::ControlState,
    frame::FramePoints,
    gradient::{BACKGROUND, ColorGradient},
    history::HistoryBuffer,
    host::{Host, HostStatus},
    input::InputController,
    signal::WaveformKind,
    smoother::{ALPHA, FilterState},
};
use rgb_int::Rgb24;
use std::{
    thread,
    time::{Duration, Instant},
};

const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Running,
    Teardown,
    Stopped,
}

pub struct VisualizerBuilder {
    tick_period: Option<Duration>,
    alpha: Option<f64>,
    amplitude: Option<f64>,
    frequency: Option<f64>,
    waveform: Option<WaveformKind>,
    background: Option<Rgb24>,
}

impl VisualizerBuilder {
    pub fn new() -> Self {
        Self {
            tick_period: None,
            alpha: None,
            amplitude: None,
            frequency: None,
            waveform: None,
            background: None,
        }
    }

    pub fn tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = Some(tick_period);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn waveform(mut self, waveform: WaveformKind) -> Self {
        self.waveform = Some(waveform);
        self
    }

    pub fn background(mut self, background: Rgb24) -> Self {
        self.background = Some(background);
        self
    }

    pub fn build(self) -> Visualizer {
        let defaults = ControlState::default();
        Visualizer {
            tick_period: self.tick_period.unwrap_or(DEFAULT_TICK_PERIOD),
            // Alpha must be in (0, 1] for the filter to make progress.
            alpha: self.alpha.unwrap_or(ALPHA).clamp(f64::EPSILON, 1.0),
            initial: ControlState::new(
                self.amplitude.unwrap_or(defaults.amplitude()),
                self.frequency.unwrap_or(defaults.frequency()),
                self.waveform.unwrap_or(defaults.waveform()),
            ),
            background: self.background.unwrap_or(Rgb24::hex(BACKGROUND)),
        }
    }
}

impl Default for VisualizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration of a visualizer run. Each call to `run` or `start` begins a
/// fresh session with zeroed filters and an empty history.
pub struct Visualizer {
    tick_period: Duration,
    alpha: f64,
    initial: ControlState,
    background: Rgb24,
}

impl Visualizer {
    pub fn builder() -> VisualizerBuilder {
        VisualizerBuilder::new()
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Runs until the exit command arrives or the host shuts down, then
    /// tears down and returns the final control state.
    pub fn run<H: Host + ?Sized>(&self, host: &mut H) -> ControlState {
        let mut session = self.start(host);
        let mut ticker = Ticker::new(self.tick_period);
        while session.step(host) == Stage::Running {
            ticker.wait();
        }
        session.finish(host)
    }

    /// Performs initialisation and returns the session, ready to tick.
    pub fn start<H: Host + ?Sized>(&self, host: &mut H) -> Session {
        log::debug!("starting visualizer");
        let mut session = Session {
            stage: Stage::Init,
            control: self.initial,
            filter: FilterState::new(),
            history: HistoryBuffer::new(),
            gradient: ColorGradient::build(),
            input: InputController::default(),
            alpha: self.alpha,
            background: self.background,
        };
        host.set_menu_visible(false);
        session.input.attach(host, session.control.waveform());
        host.clear(session.background);
        host.present();
        session.stage = Stage::Running;
        session
    }
}

/// State that lives for one run of the visualizer.
pub struct Session {
    stage: Stage,
    control: ControlState,
    filter: FilterState,
    history: HistoryBuffer,
    gradient: ColorGradient,
    input: InputController,
    alpha: f64,
    background: Rgb24,
}

impl Session {
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn control(&self) -> &ControlState {
        &self.control
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Applies pending input, then renders a frame unless the visualizer
    /// should stop. Returns the stage the session is in afterwards.
    pub fn step<H: Host + ?Sized>(&mut self, host: &mut H) -> Stage {
        if self.stage != Stage::Running {
            return self.stage;
        }
        let status = self.input.poll(&mut self.control, host);
        if status == HostStatus::Shutdown {
            log::debug!("host is shutting down");
            self.stage = Stage::Teardown;
        } else if !self.control.running() {
            self.stage = Stage::Teardown;
        } else {
            self.render_frame(host);
        }
        self.stage
    }

    /// One tick of the pipeline. Returns the frame that was evicted from the
    /// history and erased.
    pub fn render_frame<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> FramePoints {
        let snapshot = self.control;
        self.filter.update(
            snapshot.waveform(),
            snapshot.phase(),
            snapshot.frequency(),
            self.alpha,
        );
        let frame = FramePoints::build(&self.filter, snapshot.amplitude());
        let evicted = self.history.advance(
            frame,
            host,
            &self.gradient,
            self.background,
        );
        host.present();
        self.control.advance_phase();
        evicted
    }

    /// Releases the input device, shows the cleared indicators and hands
    /// control back to the menu. Returns the final control state.
    pub fn finish<H: Host + ?Sized>(&mut self, host: &mut H) -> ControlState {
        if self.stage != Stage::Stopped {
            self.stage = Stage::Teardown;
            self.input.detach(host);
            host.present();
            host.set_menu_visible(true);
            self.stage = Stage::Stopped;
            log::debug!("visualizer stopped");
        }
        self.control
    }
}

struct Ticker {
    period: Duration,
    prev_tick_complete: Instant,
}

impl Ticker {
    fn new(period: Duration) -> Self {
        Self {
            period,
            prev_tick_complete: Instant::now(),
        }
    }

    fn wait(&mut self) {
        if let Some(period_to_sleep) = (self.prev_tick_complete + self.period)
            .checked_duration_since(Instant::now())
        {
            thread::sleep(period_to_sleep);
        }
        self.prev_tick_complete = Instant::now();
    }
}
