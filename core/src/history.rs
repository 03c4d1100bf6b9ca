use crate::{frame::FramePoints, gradient::ColorGradient, host::PixelSurface};
use rgb_int::Rgb24;
use std::collections::VecDeque;

/// Number of frames kept on screen at once.
pub const HISTORY_LEN: usize = 12;

/// Fixed-depth FIFO of the frames currently on screen, oldest first. Knowing
/// exactly what was drawn lets each tick erase only the pixels of the frame
/// that falls off the end rather than clearing the whole surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryBuffer(VecDeque<FramePoints>);

impl HistoryBuffer {
    pub fn new() -> Self {
        let mut frames = VecDeque::with_capacity(HISTORY_LEN + 1);
        frames.resize_with(HISTORY_LEN, FramePoints::default);
        Self(frames)
    }

    /// Appends `frame` as the newest and returns the oldest, which is no
    /// longer part of the history.
    pub fn push_and_evict(&mut self, frame: FramePoints) -> FramePoints {
        self.0.push_back(frame);
        self.0.pop_front().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn oldest(&self) -> Option<&FramePoints> {
        self.0.front()
    }

    pub fn newest(&self) -> Option<&FramePoints> {
        self.0.back()
    }

    /// Frames from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &FramePoints> {
        self.0.iter()
    }

    /// Frames from oldest to newest, each paired with its age in ticks (0 is
    /// the newest frame).
    pub fn iter_with_age(
        &self,
    ) -> impl Iterator<Item = (usize, &FramePoints)> {
        let len = self.0.len();
        self.0
            .iter()
            .enumerate()
            .map(move |(slot, frame)| (len - 1 - slot, frame))
    }

    /// Draws every frame, oldest first so newer frames end up on top.
    pub fn draw<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        gradient: &ColorGradient,
    ) {
        for (age, frame) in self.iter_with_age() {
            frame.draw(surface, gradient.color(age));
        }
    }

    /// Pushes `frame`, erases the pixels of the evicted frame and then
    /// redraws the whole history with colours shifted by one generation.
    pub fn advance<S: PixelSurface + ?Sized>(
        &mut self,
        frame: FramePoints,
        surface: &mut S,
        gradient: &ColorGradient,
        background: Rgb24,
    ) -> FramePoints {
        let evicted = self.push_and_evict(frame);
        evicted.draw(surface, background);
        self.draw(surface, gradient);
        evicted
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frame::Point;

    fn frame(tag: u32) -> FramePoints {
        (0..3).map(|x| Point { x, y: tag }).collect()
    }

    #[test]
    fn starts_full_of_empty_frames() {
        let history = HistoryBuffer::new();
        assert_eq!(history.len(), HISTORY_LEN);
        assert!(history.iter().all(FramePoints::is_empty));
    }

    #[test]
    fn evicts_in_fifo_order() {
        let mut history = HistoryBuffer::new();
        for tag in 0..HISTORY_LEN as u32 {
            assert!(history.push_and_evict(frame(tag)).is_empty());
            assert_eq!(history.len(), HISTORY_LEN);
        }
        let depth = HISTORY_LEN as u32;
        for tag in 0..30 {
            let evicted = history.push_and_evict(frame(tag + 100));
            let expected = if tag < depth {
                frame(tag)
            } else {
                frame(tag - depth + 100)
            };
            assert_eq!(evicted, expected);
            assert_eq!(history.len(), HISTORY_LEN);
            assert_eq!(history.newest(), Some(&frame(tag + 100)));
        }
    }

    #[test]
    fn newest_frame_has_age_zero() {
        let mut history = HistoryBuffer::new();
        history.push_and_evict(frame(7));
        let (age, newest) = history.iter_with_age().last().unwrap();
        assert_eq!(age, 0);
        assert_eq!(newest, &frame(7));
        let (age, _) = history.iter_with_age().next().unwrap();
        assert_eq!(age, HISTORY_LEN - 1);
    }
}
