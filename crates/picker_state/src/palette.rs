use thiserror::Error;

/// The fixed swatch strip, left to right. Stored in the hex form the
/// update path accepts, lowercase as authored.
pub const PRESET_SWATCHES: [&str; 20] = [
    "#000000", "#808080", "#c0c0c0", "#ffffff", "#ff0000", "#ff7f00", "#ffff00", "#00ff00",
    "#00ffff", "#0000ff", "#8b00ff", "#ff1493", "#20b2aa", "#ffa500", "#a52a2a", "#deb887",
    "#2e8b57", "#6b8e23", "#708090", "#4aa3ff",
];

/// The color a fresh picker starts on, also the last swatch in the strip.
pub const DEFAULT_HEX: &str = "#4aa3ff";

#[derive(Error, Debug)]
pub(crate) enum PaletteError {
    #[error("no preset swatch at index {0}, the strip has {1} entries")]
    SwatchOutOfRange(usize, usize),
}
