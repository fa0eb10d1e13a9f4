mod test_utils;

use derive_more::Display;

use crate::numeric;

/// Hue, saturation, lightness. Hue is degrees in `[0, 360]`, the other two
/// are percentages in `[0, 100]`; the constructor clamps whatever it is
/// given. Field order in the `Display` form follows the panel layout, which
/// puts lightness before saturation.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display(fmt = "hls({}, {}, {})", h, l, s)]
pub struct Hsl {
    h: f64,
    s: f64,
    l: f64,
}

impl Default for Hsl {
    fn default() -> Self {
        Hsl::new(0.0, 0.0, 0.0)
    }
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl {
            h: numeric::clamp(h, 0.0, 360.0),
            s: numeric::clamp(s, 0.0, 100.0),
            l: numeric::clamp(l, 0.0, 100.0),
        }
    }

    pub fn set(&mut self, c: Hsl) {
        *self = c;
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn l(&self) -> f64 {
        self.l
    }
}
