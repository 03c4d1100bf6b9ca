use crate::history::HISTORY_LEN;
pub use rgb_int::Rgb24;

/// Colour of the most recent frame.
pub const NEWEST: u32 = 0xFFFFFF;
/// Colour half way through the history.
pub const MIDDLE: u32 = 0x00FF00;
/// Colour of the oldest retained frame.
pub const OLDEST: u32 = 0x90EE90;

/// Colour of pixels that are not lit.
pub const BACKGROUND: u32 = 0x000000;

#[cfg(test)]
pub(crate) fn rgb24_to_u32(rgb24: Rgb24) -> u32 {
    ((rgb24.r as u32) << 16) | ((rgb24.g as u32) << 8) | (rgb24.b as u32)
}

/// Linearly interpolates each channel of two packed 0xRRGGBB colours. Channel
/// values are truncated rather than rounded.
pub fn interpolate(from: u32, to: u32, factor: f64) -> u32 {
    let channel = |shift: u32| {
        let c1 = ((from >> shift) & 0xFF) as f64;
        let c2 = ((to >> shift) & 0xFF) as f64;
        let c = (c1 + ((c2 - c1) * factor)) as u32;
        c.min(0xFF) << shift
    };
    channel(16) | channel(8) | channel(0)
}

/// One colour per history slot, fading with age from `NEWEST` through
/// `MIDDLE` to `OLDEST`. Index 0 is the colour of the newest frame.
#[derive(Clone, Copy)]
pub struct ColorGradient([u32; HISTORY_LEN]);

impl ColorGradient {
    pub fn build() -> Self {
        let last = (HISTORY_LEN - 1) as f64;
        let mut colors = [0; HISTORY_LEN];
        for (i, color) in colors.iter_mut().enumerate() {
            let factor = i as f64 / last;
            *color = if factor < 0.5 {
                interpolate(NEWEST, MIDDLE, factor * 2.0)
            } else {
                interpolate(MIDDLE, OLDEST, (factor - 0.5) * 2.0)
            };
        }
        Self(colors)
    }

    /// Packed colour of a frame `age` ticks old (0 is the newest frame).
    /// Ages beyond the history depth get the oldest colour.
    pub fn packed(&self, age: usize) -> u32 {
        self.0[age.min(HISTORY_LEN - 1)]
    }

    pub fn color(&self, age: usize) -> Rgb24 {
        Rgb24::hex(self.packed(age))
    }
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn channel_distance(a: u32, b: u32) -> u32 {
        [16, 8, 0]
            .into_iter()
            .map(|shift| {
                (((a >> shift) & 0xFF) as i32 - ((b >> shift) & 0xFF) as i32)
                    .unsigned_abs()
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn endpoints_are_exact() {
        let gradient = ColorGradient::build();
        assert_eq!(gradient.packed(0), NEWEST);
        assert_eq!(gradient.packed(HISTORY_LEN - 1), OLDEST);
    }

    #[test]
    fn middle_slots_are_close_to_middle_anchor() {
        let gradient = ColorGradient::build();
        assert_eq!(gradient.packed(5), 0x17FF17);
        assert_eq!(gradient.packed(6), 0x0DFD0D);
        for age in [5, 6] {
            assert!(channel_distance(gradient.packed(age), MIDDLE) < 24);
        }
    }

    #[test]
    fn interpolation_truncates() {
        // 0xFF * 0.5 == 127.5
        assert_eq!(interpolate(0x000000, 0xFFFFFF, 0.5), 0x7F7F7F);
        assert_eq!(interpolate(0x123456, 0xABCDEF, 0.0), 0x123456);
        assert_eq!(interpolate(0x123456, 0xABCDEF, 1.0), 0xABCDEF);
    }

    #[test]
    fn ages_past_the_end_use_the_oldest_colour() {
        let gradient = ColorGradient::build();
        assert_eq!(gradient.packed(100), OLDEST);
    }

    #[test]
    fn colours_unpack_channel_by_channel() {
        let gradient = ColorGradient::build();
        let oldest = gradient.color(HISTORY_LEN - 1);
        assert_eq!((oldest.r, oldest.g, oldest.b), (0x90, 0xEE, 0x90));
        for age in 0..HISTORY_LEN {
            let color = gradient.color(age);
            assert_eq!(rgb24_to_u32(color), gradient.packed(age));
        }
    }
}
