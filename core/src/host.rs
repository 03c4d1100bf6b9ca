//! Capabilities the visualizer needs from whatever is hosting it.

use crate::input::InputEvent;
use rgb_int::Rgb24;

/// The display. Coordinates passed to `set_pixel` are always inside the
/// 240x240 graph.
pub trait PixelSurface {
    fn clear(&mut self, color: Rgb24);

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb24);

    /// Called once per tick after all pixels for that tick have been set.
    fn present(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStatus {
    Running,
    /// The host is going away. The visualizer will clean up and stop.
    Shutdown,
}

/// Source of discrete input events and owner of the indicator LEDs.
pub trait InputDevice {
    /// Start delivering the given events.
    fn attach(&mut self, events: &[InputEvent]);

    /// Stop delivering events.
    fn detach(&mut self);

    /// Appends the attached events that occurred since the previous poll.
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) -> HostStatus;

    fn indicators(&self) -> u8;

    fn set_indicators(&mut self, indicators: u8);

    /// Push the current indicator state out to the hardware.
    fn scan(&mut self);
}

/// The menu that launched the visualizer.
pub trait Shell {
    fn set_menu_visible(&mut self, visible: bool);
}

pub trait Host: PixelSurface + InputDevice + Shell {}

impl<H: PixelSurface + InputDevice + Shell> Host for H {}
