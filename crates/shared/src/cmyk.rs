mod test_utils;

use derive_more::Display;

use crate::numeric;

/// Cyan, magenta, yellow, key, each a percentage in `[0, 100]`. The
/// constructor clamps.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
#[display(fmt = "cmyk({}, {}, {}, {})", c, m, y, k)]
pub struct Cmyk {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl Default for Cmyk {
    fn default() -> Self {
        Cmyk::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Cmyk {
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Cmyk {
            c: numeric::clamp(c, 0.0, 100.0),
            m: numeric::clamp(m, 0.0, 100.0),
            y: numeric::clamp(y, 0.0, 100.0),
            k: numeric::clamp(k, 0.0, 100.0),
        }
    }

    pub fn set(&mut self, c: Cmyk) {
        *self = c;
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn k(&self) -> f64 {
        self.k
    }
}
