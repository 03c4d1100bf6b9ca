use crate::keys;
use anyhow::anyhow;
use sdl2::{
    EventPump, event::Event, pixels::Color, rect::Rect, render::Canvas,
    video::Window,
};
use wavescope_core::{
    GRAPH_HEIGHT, GRAPH_WIDTH, HostStatus, InputDevice, InputEvent,
    PixelSurface, Rgb24, Shell, WaveformKind, input::waveform_indicator,
};

/// Height of the indicator strip below the graph, in graph pixels.
const LED_STRIP_HEIGHT: u32 = 16;
const LED_SIZE: u32 = 10;

const LED_ON: Color = Color::RGB(0, 255, 0);
const LED_OFF: Color = Color::RGB(40, 40, 40);

fn sdl_color(color: Rgb24) -> Color {
    Color::RGB(color.r, color.g, color.b)
}

/// Graph coordinates and colour of every framebuffer pixel that differs from
/// the background.
fn lit_pixels(
    pixels: &[Rgb24],
    background: Rgb24,
) -> impl Iterator<Item = (usize, usize, Rgb24)> + '_ {
    pixels
        .iter()
        .enumerate()
        .filter(move |&(_, &color)| color != background)
        .map(|(i, &color)| (i % GRAPH_WIDTH, i / GRAPH_WIDTH, color))
}

/// Runs the visualizer in an SDL window. The graph is kept in a software
/// framebuffer that is scaled up onto the window each time it's presented.
/// Waveform indicator LEDs are drawn in a strip under the graph.
pub struct SdlHost {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    scale: u32,
    background: Rgb24,
    pixels: Vec<Rgb24>,
    attached: Vec<InputEvent>,
    indicators: u8,
    scanned_indicators: u8,
}

impl SdlHost {
    pub fn new(title: &str, scale: u32) -> anyhow::Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let width_px = GRAPH_WIDTH as u32 * scale;
        let height_px = (GRAPH_HEIGHT as u32 + LED_STRIP_HEIGHT) * scale;
        let window = video_subsystem
            .window(title, width_px, height_px)
            .position_centered()
            .build()?;
        let canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let background = Rgb24::new_grey(0);
        Ok(Self {
            canvas,
            event_pump,
            scale,
            background,
            pixels: vec![background; GRAPH_WIDTH * GRAPH_HEIGHT],
            attached: Vec::new(),
            indicators: 0,
            scanned_indicators: 0,
        })
    }

    fn render_graph(&mut self) {
        for (x, y, color) in lit_pixels(&self.pixels, self.background) {
            let x = x as i32 * self.scale as i32;
            let y = y as i32 * self.scale as i32;
            self.canvas.set_draw_color(sdl_color(color));
            let rect = Rect::new(x, y, self.scale, self.scale);
            let _ = self.canvas.fill_rect(rect);
        }
    }

    fn render_leds(&mut self) {
        let slot_width = GRAPH_WIDTH as u32 / WaveformKind::ALL.len() as u32;
        let top = GRAPH_HEIGHT as u32 + ((LED_STRIP_HEIGHT - LED_SIZE) / 2);
        for (i, kind) in WaveformKind::ALL.into_iter().enumerate() {
            let lit = self.scanned_indicators & waveform_indicator(kind) != 0;
            let left = (i as u32 * slot_width) + ((slot_width - LED_SIZE) / 2);
            self.canvas.set_draw_color(if lit { LED_ON } else { LED_OFF });
            let _ = self.canvas.fill_rect(Rect::new(
                (left * self.scale) as i32,
                (top * self.scale) as i32,
                LED_SIZE * self.scale,
                LED_SIZE * self.scale,
            ));
        }
    }
}

impl PixelSurface for SdlHost {
    fn clear(&mut self, color: Rgb24) {
        self.background = color;
        self.pixels.fill(color);
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb24) {
        let (x, y) = (x as usize, y as usize);
        if x < GRAPH_WIDTH && y < GRAPH_HEIGHT {
            self.pixels[(y * GRAPH_WIDTH) + x] = color;
        } else {
            log::warn!("Ignoring pixel outside of the graph at ({x}, {y}).");
        }
    }

    fn present(&mut self) {
        self.canvas.set_draw_color(sdl_color(self.background));
        self.canvas.clear();
        self.render_graph();
        self.render_leds();
        self.canvas.present();
    }
}

impl InputDevice for SdlHost {
    fn attach(&mut self, events: &[InputEvent]) {
        log::debug!("attaching input events {:?}", events);
        self.attached = events.to_vec();
    }

    fn detach(&mut self) {
        log::debug!("detaching input events");
        self.attached.clear();
    }

    fn poll_events(&mut self, events: &mut Vec<InputEvent>) -> HostStatus {
        let mut status = HostStatus::Running;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => status = HostStatus::Shutdown,
                Event::KeyDown {
                    scancode: Some(scancode),
                    ..
                } => {
                    if let Some(input_event) = keys::input_event(scancode) {
                        if self.attached.contains(&input_event) {
                            events.push(input_event);
                        }
                    }
                }
                _ => (),
            }
        }
        status
    }

    fn indicators(&self) -> u8 {
        self.indicators
    }

    fn set_indicators(&mut self, indicators: u8) {
        self.indicators = indicators;
    }

    fn scan(&mut self) {
        log::debug!("indicators: {:#010b}", self.indicators);
        self.scanned_indicators = self.indicators;
    }
}

impl Shell for SdlHost {
    fn set_menu_visible(&mut self, visible: bool) {
        if visible {
            log::info!("visualizer finished, menu visible");
        } else {
            log::info!("visualizer started, menu hidden");
        }
    }
}
