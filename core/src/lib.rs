//! Persistence-of-vision waveform display.
//!
//! A periodic signal is synthesized for each column of a 240x240 graph,
//! smoothed over time by a per-column low-pass filter, and drawn along with
//! the previous 11 frames in colours that fade with age. Only the pixels of
//! the frame leaving the history are erased each tick.

pub mod control;
pub use control::{Command, ControlState};

pub mod frame;
pub use frame::{
    FramePoints, GRAPH_CENTER_Y, GRAPH_HEIGHT, GRAPH_SCALE, GRAPH_WIDTH, Point,
};

pub mod gradient;
pub use gradient::{ColorGradient, Rgb24};

pub mod history;
pub use history::{HISTORY_LEN, HistoryBuffer};

pub mod host;
pub use host::{Host, HostStatus, InputDevice, PixelSurface, Shell};

pub mod input;
pub use input::{Bindings, InputController, InputEvent};

pub mod signal;
pub use signal::{WaveformKind, evaluate};

pub mod smoother;
pub use smoother::FilterState;

pub mod visualizer;
pub use visualizer::{Session, Stage, Visualizer, VisualizerBuilder};
