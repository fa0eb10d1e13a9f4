mod palette;
mod picker_state;
mod sync_state;

pub use crate::palette::{DEFAULT_HEX, PRESET_SWATCHES};
pub use crate::picker_state::{Panel, PickerState};
