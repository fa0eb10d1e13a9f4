use derive_more::Display;

/// The canonical color value. Every other representation is derived from
/// this one, and the `Display` form is the literal `rgb(R, G, B)` string a
/// preview area consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "rgb({}, {}, {})", red, green, blue)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::new(0, 0, 0)
    }
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    pub fn set(&mut self, c: Rgb) {
        *self = c;
    }
}
