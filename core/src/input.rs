use crate::{
    control::{Command, ControlState},
    host::{HostStatus, InputDevice},
    signal::WaveformKind,
};
use std::collections::HashMap;

/// Named controls of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    JoyUp,
    JoyDown,
    JoyRight,
    JoyLeft,
    Wave,
    Menu,
}

/// Indicator bits reserved for showing the selected waveform.
pub const WAVEFORM_INDICATOR_MASK: u8 = 0b0011_1100;

/// The single indicator bit lit while `kind` is selected.
pub fn waveform_indicator(kind: WaveformKind) -> u8 {
    match kind {
        WaveformKind::Sine => 1 << 5,
        WaveformKind::Square => 1 << 4,
        WaveformKind::Triangle => 1 << 3,
        WaveformKind::Sawtooth => 1 << 2,
    }
}

/// Which command each input event triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings(HashMap<InputEvent, Command>);

impl Bindings {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn bind(mut self, event: InputEvent, command: Command) -> Self {
        self.0.insert(event, command);
        self
    }

    pub fn command(&self, event: InputEvent) -> Option<Command> {
        self.0.get(&event).copied()
    }

    pub fn events(&self) -> Vec<InputEvent> {
        self.0.keys().copied().collect()
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::empty()
            .bind(InputEvent::JoyUp, Command::AmplitudeUp)
            .bind(InputEvent::JoyDown, Command::AmplitudeDown)
            .bind(InputEvent::JoyRight, Command::FrequencyUp)
            .bind(InputEvent::JoyLeft, Command::FrequencyDown)
            .bind(InputEvent::Wave, Command::CycleWaveform)
            .bind(InputEvent::Menu, Command::Exit)
    }
}

/// Turns input events into changes to the control state and keeps the
/// waveform indicators in sync with the selected waveform.
pub struct InputController {
    bindings: Bindings,
}

impl InputController {
    pub fn new(bindings: Bindings) -> Self {
        Self { bindings }
    }

    /// Registers for the bound events and lights the indicator for the
    /// current waveform.
    pub fn attach<D: InputDevice + ?Sized>(
        &self,
        device: &mut D,
        waveform: WaveformKind,
    ) {
        let mut events = self.bindings.events();
        events.sort_by_key(|&event| event as u8);
        device.attach(&events);
        show_waveform(device, waveform);
    }

    /// Turns off the waveform indicators and stops receiving events.
    pub fn detach<D: InputDevice + ?Sized>(&self, device: &mut D) {
        device.set_indicators(device.indicators() & !WAVEFORM_INDICATOR_MASK);
        device.scan();
        device.detach();
    }

    pub fn handle<D: InputDevice + ?Sized>(
        &self,
        command: Command,
        control: &mut ControlState,
        device: &mut D,
    ) {
        control.apply(command);
        if command == Command::CycleWaveform {
            show_waveform(device, control.waveform());
        }
    }

    pub fn dispatch<D: InputDevice + ?Sized>(
        &self,
        event: InputEvent,
        control: &mut ControlState,
        device: &mut D,
    ) {
        match self.bindings.command(event) {
            Some(command) => self.handle(command, control, device),
            None => log::debug!("ignoring unbound input event {:?}", event),
        }
    }

    /// Applies every event that arrived since the last poll, in order.
    pub fn poll<D: InputDevice + ?Sized>(
        &self,
        control: &mut ControlState,
        device: &mut D,
    ) -> HostStatus {
        let mut pending = Vec::new();
        let status = device.poll_events(&mut pending);
        for event in pending {
            self.dispatch(event, control, device);
        }
        status
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(Bindings::default())
    }
}

fn show_waveform<D: InputDevice + ?Sized>(device: &mut D, kind: WaveformKind) {
    let others = device.indicators() & !WAVEFORM_INDICATOR_MASK;
    device.set_indicators(others | waveform_indicator(kind));
    device.scan();
}
