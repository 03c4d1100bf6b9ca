use crate::{host::PixelSurface, smoother::FilterState};
use rgb_int::Rgb24;

pub const GRAPH_WIDTH: usize = 240;
pub const GRAPH_HEIGHT: usize = 240;
pub const GRAPH_CENTER_Y: i64 = (GRAPH_HEIGHT / 2) as i64;
/// Pixels per unit of signal at full amplitude.
pub const GRAPH_SCALE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// The pixels lit by one tick's waveform. Holds at most one point per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FramePoints(Vec<Point>);

impl FramePoints {
    /// Maps the filtered signal to pixel space. Amplitude zooms vertically
    /// around the centre line. Points that land outside the graph are
    /// dropped.
    pub fn build(filtered: &FilterState, amplitude: f64) -> Self {
        let points = filtered
            .values()
            .iter()
            .enumerate()
            .filter_map(|(x, &value)| {
                // `as` truncates toward zero.
                let offset = (amplitude * GRAPH_SCALE * value) as i64;
                let y = GRAPH_CENTER_Y - offset;
                if (0..GRAPH_HEIGHT as i64).contains(&y) {
                    Some(Point {
                        x: x as u32,
                        y: y as u32,
                    })
                } else {
                    None
                }
            })
            .collect();
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }

    pub fn draw<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        color: Rgb24,
    ) {
        for Point { x, y } in self.iter() {
            surface.set_pixel(x, y, color);
        }
    }
}

impl FromIterator<Point> for FramePoints {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{signal::WaveformKind, smoother::ALPHA};

    #[test]
    fn zero_amplitude_is_a_flat_centre_line() {
        let mut filtered = FilterState::new();
        filtered.update(WaveformKind::Square, 0.0, 3.0, ALPHA);
        let frame = FramePoints::build(&filtered, 0.0);
        assert_eq!(frame.len(), GRAPH_WIDTH);
        assert!(frame.iter().all(|p| p.y == GRAPH_CENTER_Y as u32));
        assert!(frame.iter().enumerate().all(|(x, p)| p.x == x as u32));
    }

    #[test]
    fn offsets_truncate_toward_zero() {
        let mut filtered = FilterState::new();
        filtered.update(WaveformKind::Square, 0.0, 1.0, 0.0155);
        let frame = FramePoints::build(&filtered, 1.0);
        // +/-1.55 pixels from the centre line, truncated to +/-1.
        assert_eq!(frame.points()[0].y, 119);
        assert_eq!(frame.points()[GRAPH_WIDTH - 1].y, 121);
    }

    #[test]
    fn points_outside_the_graph_are_dropped() {
        let mut filtered = FilterState::new();
        for _ in 0..100 {
            filtered.update(WaveformKind::Square, 0.0, 1.0, 1.0);
        }
        // Fully settled square wave at 1.0 amplitude reaches y = 20 and 220,
        // well inside the graph.
        let frame = FramePoints::build(&filtered, 1.0);
        assert_eq!(frame.len(), GRAPH_WIDTH);
        assert!(frame.iter().all(|p| p.y == 20 || p.y == 220));
        // Amplitudes above the intended range push the peaks off the graph.
        let frame = FramePoints::build(&filtered, 1.3);
        assert!(frame.is_empty());
    }
}
