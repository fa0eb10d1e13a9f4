use anyhow::Result;

use colorspace::{cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl};
use shared::{numeric, Cmyk, Hsl, Rgb};

use crate::palette::{PaletteError, DEFAULT_HEX, PRESET_SWATCHES};
use crate::sync_state::SyncState;

/// Everything the picker displays, exactly as it must be shown after an
/// update. The HSL and CMYK entries hold what the user typed (clamped and
/// rounded), not necessarily the values derived from the canonical color,
/// so an edit never jumps to a slightly different equivalent under the
/// user's cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub rgb: Rgb,
    pub hls: Hsl,
    pub cmyk: Cmyk,
    pub hex: String,
}

impl Default for Panel {
    fn default() -> Self {
        Panel {
            rgb: Rgb::default(),
            hls: Hsl::default(),
            cmyk: Cmyk::new(0.0, 0.0, 0.0, 100.0),
            hex: rgb_to_hex(Rgb::default()),
        }
    }
}

/// Owns the canonical color plus the displayed panel, and fans any edit out
/// to every other representation. One entry point per editable surface;
/// each runs under a sync guard so a cascade cannot loop.
#[derive(Debug)]
pub struct PickerState {
    panel: Panel,
    warning: bool,
    sync: SyncState,
}

impl Default for PickerState {
    fn default() -> Self {
        PickerState::new()
    }
}

impl PickerState {
    /// A fresh picker starts on [DEFAULT_HEX].
    pub fn new() -> Self {
        let mut state = PickerState {
            panel: Panel::default(),
            warning: false,
            sync: SyncState::default(),
        };
        state.update_all_from_hex(DEFAULT_HEX);
        state
    }

    /// The current displayed values. A presentation layer repaints every
    /// field from this after each update call.
    pub fn panel(&self) -> Panel {
        self.panel.clone()
    }

    /// The color the preview area shows, always equal to the RGB fields.
    pub fn preview(&self) -> Rgb {
        self.panel.rgb
    }

    /// Whether the last accepted update had to change the input to fit.
    pub fn warning(&self) -> bool {
        self.warning
    }

    /// Entry point for the RGB fields, and the hub every other entry point
    /// delegates to. Raw values are rounded to integers and clamped to
    /// `[0, 255]`; the warning reports whether that changed anything.
    pub fn update_all_from_rgb(&mut self, r: f64, g: f64, b: f64) {
        if self.sync.begin().is_err() {
            return;
        }
        let (red, r_clipped) = sanitize_channel(r);
        let (green, g_clipped) = sanitize_channel(g);
        let (blue, b_clipped) = sanitize_channel(b);
        let rgb = Rgb::new(red, green, blue);

        let hsl = rgb_to_hsl(rgb);
        let cmyk = rgb_to_cmyk(rgb);

        self.panel.rgb.set(rgb);
        self.panel.hls.set(Hsl::new(
            numeric::round(hsl.h(), 1),
            numeric::round(hsl.s(), 1),
            numeric::round(hsl.l(), 1),
        ));
        self.panel.cmyk.set(Cmyk::new(
            numeric::round(cmyk.c(), 1),
            numeric::round(cmyk.m(), 1),
            numeric::round(cmyk.y(), 1),
            numeric::round(cmyk.k(), 1),
        ));
        self.panel.hex = rgb_to_hex(rgb);
        self.warning = r_clipped || g_clipped || b_clipped;
        self.sync.finish();
    }

    /// Entry point for the H, L and S fields, in the panel's layout order.
    /// Converting through RGB is lossy, so after the cascade this puts the
    /// user's own clamped values back into the HLS fields.
    pub fn update_all_from_hls(&mut self, h: f64, l: f64, s: f64) {
        if self.sync.begin().is_err() {
            return;
        }
        let hh = numeric::clamp(h, 0.0, 360.0);
        let ll = numeric::clamp(l, 0.0, 100.0);
        let ss = numeric::clamp(s, 0.0, 100.0);
        let clipped = hh != h || ll != l || ss != s;

        let rgb = hsl_to_rgb(Hsl::new(hh, ss, ll));
        self.sync.finish();
        self.update_all_from_rgb(f64::from(rgb.red), f64::from(rgb.green), f64::from(rgb.blue));

        self.panel.hls.set(Hsl::new(
            numeric::round(hh, 1),
            numeric::round(ss, 1),
            numeric::round(ll, 1),
        ));
        self.warning = clipped;
    }

    /// Entry point for the CMYK fields. Same shape as the HLS path: clamp,
    /// fan out through RGB, then restore the typed ink values.
    pub fn update_all_from_cmyk(&mut self, c: f64, m: f64, y: f64, k: f64) {
        if self.sync.begin().is_err() {
            return;
        }
        let cc = numeric::clamp(c, 0.0, 100.0);
        let mm = numeric::clamp(m, 0.0, 100.0);
        let yy = numeric::clamp(y, 0.0, 100.0);
        let kk = numeric::clamp(k, 0.0, 100.0);
        let clipped = cc != c || mm != m || yy != y || kk != k;

        let rgb = cmyk_to_rgb(Cmyk::new(cc, mm, yy, kk));
        self.sync.finish();
        self.update_all_from_rgb(f64::from(rgb.red), f64::from(rgb.green), f64::from(rgb.blue));

        self.panel.cmyk.set(Cmyk::new(
            numeric::round(cc, 1),
            numeric::round(mm, 1),
            numeric::round(yy, 1),
            numeric::round(kk, 1),
        ));
        self.warning = clipped;
    }

    /// Entry point for the hex field, fed by live typing. Text that does
    /// not parse as a color is dropped without touching anything, warning
    /// included; numeric fields clamp bad input, the hex field cannot.
    pub fn update_all_from_hex(&mut self, hex: &str) {
        if let Ok(rgb) = hex_to_rgb(hex) {
            self.update_all_from_rgb(f64::from(rgb.red), f64::from(rgb.green), f64::from(rgb.blue));
        }
    }

    /// Applies the preset swatch at `index` through the hex entry point.
    pub fn select_swatch(&mut self, index: usize) -> Result<()> {
        match PRESET_SWATCHES.get(index) {
            Some(hex) => {
                self.update_all_from_hex(hex);
                Ok(())
            }
            None => Err(PaletteError::SwatchOutOfRange(index, PRESET_SWATCHES.len()).into()),
        }
    }
}

/// Rounds to the nearest integer, then clamps to `[0, 255]`. The flag says
/// whether the raw value had to change at all, which is what the clipping
/// warning reports; a NaN collapses to zero and counts as clipped.
fn sanitize_channel(raw: f64) -> (u8, bool) {
    let sanitized = numeric::clamp(raw.round(), 0.0, 255.0);
    (sanitized as u8, sanitized != raw)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use shared::Rgb;

    use super::{PickerState, DEFAULT_HEX};

    #[test]
    fn starts_on_the_default_swatch() {
        let state = PickerState::new();
        let panel = state.panel();
        assert_eq!(panel.rgb, Rgb::new(74, 163, 255));
        assert_eq!(panel.hex, "#4AA3FF");
        assert_relative_eq!(panel.hls.h(), 210.5);
        assert_relative_eq!(panel.hls.s(), 100.0);
        assert_relative_eq!(panel.hls.l(), 64.5);
        assert_relative_eq!(panel.cmyk.c(), 71.0);
        assert_relative_eq!(panel.cmyk.m(), 36.1);
        assert_relative_eq!(panel.cmyk.y(), 0.0);
        assert_relative_eq!(panel.cmyk.k(), 0.0);
        assert!(!state.warning());
    }

    #[test]
    fn rgb_update_synchronizes_every_view() {
        let mut state = PickerState::new();
        state.update_all_from_rgb(200.0, 120.0, 40.0);
        let panel = state.panel();
        assert_eq!(panel.rgb, Rgb::new(200, 120, 40));
        assert_eq!(panel.hex, "#C87828");
        assert_relative_eq!(panel.hls.h(), 30.0);
        assert_relative_eq!(panel.hls.s(), 66.7);
        assert_relative_eq!(panel.hls.l(), 47.1);
        assert_relative_eq!(panel.cmyk.c(), 0.0);
        assert_relative_eq!(panel.cmyk.m(), 40.0);
        assert_relative_eq!(panel.cmyk.y(), 80.0);
        assert_relative_eq!(panel.cmyk.k(), 21.6);
        assert_eq!(state.preview(), Rgb::new(200, 120, 40));
        assert!(!state.warning());
    }

    #[test]
    fn out_of_range_rgb_is_clamped_and_flagged() {
        let mut state = PickerState::new();
        state.update_all_from_rgb(300.0, -10.0, 128.0);
        assert_eq!(state.panel().rgb, Rgb::new(255, 0, 128));
        assert_eq!(state.panel().hex, "#FF0080");
        assert!(state.warning());

        // The flag reports the last update only.
        state.update_all_from_rgb(10.0, 20.0, 30.0);
        assert!(!state.warning());
    }

    #[test]
    fn non_integer_rgb_is_rounded_and_flagged() {
        let mut state = PickerState::new();
        state.update_all_from_rgb(127.5, 0.0, 0.0);
        assert_eq!(state.panel().rgb, Rgb::new(128, 0, 0));
        assert!(state.warning());
    }

    #[test]
    fn nan_rgb_collapses_to_zero_and_flags() {
        let mut state = PickerState::new();
        state.update_all_from_rgb(f64::NAN, 80.0, 80.0);
        assert_eq!(state.panel().rgb, Rgb::new(0, 80, 80));
        assert!(state.warning());
    }

    #[test]
    fn hls_round_trip_holds_user_values() {
        let mut state = PickerState::new();
        state.update_all_from_hls(210.5, 64.5, 100.0);
        let panel = state.panel();
        assert_eq!(panel.rgb, Rgb::new(74, 163, 255));
        assert_eq!(panel.hex, "#4AA3FF");
        assert_relative_eq!(panel.hls.h(), 210.5);
        assert_relative_eq!(panel.hls.s(), 100.0);
        assert_relative_eq!(panel.hls.l(), 64.5);
        assert!(!state.warning());
    }

    #[test]
    fn hls_keeps_the_user_hue_for_achromatic_colors() {
        let mut state = PickerState::new();
        state.update_all_from_hls(200.0, 50.0, 0.0);
        let panel = state.panel();
        assert_eq!(panel.rgb, Rgb::new(128, 128, 128));
        assert_eq!(panel.hex, "#808080");
        // The derived hue for any gray would be zero. The typed one stays.
        assert_relative_eq!(panel.hls.h(), 200.0);
        assert_relative_eq!(panel.hls.s(), 0.0);
        assert_relative_eq!(panel.hls.l(), 50.0);
        assert_relative_eq!(panel.cmyk.k(), 49.8);
        assert!(!state.warning());
    }

    #[test]
    fn hls_out_of_range_is_clamped_and_flagged() {
        let mut state = PickerState::new();
        state.update_all_from_hls(400.0, 50.0, 50.0);
        let panel = state.panel();
        assert_relative_eq!(panel.hls.h(), 360.0);
        assert_eq!(panel.rgb, Rgb::new(191, 64, 64));
        assert!(state.warning());
    }

    #[test]
    fn cmyk_updates_preserve_typed_inks() {
        let mut state = PickerState::new();
        state.update_all_from_cmyk(60.0, 10.0, 95.0, 100.0);
        let panel = state.panel();
        // Full key forces black, but the typed inks stay on display.
        assert_eq!(panel.rgb, Rgb::new(0, 0, 0));
        assert_eq!(panel.hex, "#000000");
        assert_relative_eq!(panel.cmyk.c(), 60.0);
        assert_relative_eq!(panel.cmyk.m(), 10.0);
        assert_relative_eq!(panel.cmyk.y(), 95.0);
        assert_relative_eq!(panel.cmyk.k(), 100.0);
        assert_relative_eq!(panel.hls.l(), 0.0);
        assert!(!state.warning());
    }

    #[test]
    fn cmyk_out_of_range_is_clamped_and_flagged() {
        let mut state = PickerState::new();
        state.update_all_from_cmyk(120.0, -5.0, 0.0, 0.0);
        let panel = state.panel();
        assert_eq!(panel.rgb, Rgb::new(0, 255, 255));
        assert_eq!(panel.hex, "#00FFFF");
        assert_relative_eq!(panel.cmyk.c(), 100.0);
        assert_relative_eq!(panel.cmyk.m(), 0.0);
        assert!(state.warning());
    }

    #[test]
    fn valid_hex_updates_and_clears_the_warning() {
        let mut state = PickerState::new();
        state.update_all_from_rgb(300.0, 0.0, 0.0);
        assert!(state.warning());

        state.update_all_from_hex("  #123456  ");
        assert_eq!(state.panel().rgb, Rgb::new(18, 52, 86));
        assert_eq!(state.panel().hex, "#123456");
        assert!(!state.warning());
    }

    #[test]
    fn malformed_hex_changes_nothing() {
        let mut state = PickerState::new();
        state.update_all_from_rgb(300.0, 0.0, 0.0);
        let before = state.panel();

        for input in ["", "   ", "#12345", "#1234567", "not-a-color", "#ggffee"] {
            state.update_all_from_hex(input);
            assert_eq!(state.panel(), before);
            // Even the warning from the earlier clamp stays up.
            assert!(state.warning());
        }
    }

    #[test]
    fn nested_updates_while_syncing_are_dropped() {
        let mut state = PickerState::new();
        let before = state.panel();

        assert!(state.sync.begin().is_ok());
        state.update_all_from_rgb(10.0, 20.0, 30.0);
        state.update_all_from_hls(10.0, 20.0, 30.0);
        state.update_all_from_cmyk(10.0, 20.0, 30.0, 40.0);
        state.update_all_from_hex("#102030");
        assert_eq!(state.panel(), before);
        state.sync.finish();

        state.update_all_from_rgb(10.0, 20.0, 30.0);
        assert_eq!(state.panel().rgb, Rgb::new(10, 20, 30));
    }

    #[test]
    fn swatch_selection_goes_through_the_hex_path() {
        let mut state = PickerState::new();
        assert!(state.select_swatch(4).is_ok());
        assert_eq!(state.panel().rgb, Rgb::new(255, 0, 0));
        assert_eq!(state.panel().hex, "#FF0000");

        assert!(state.select_swatch(0).is_ok());
        assert_eq!(state.panel().rgb, Rgb::new(0, 0, 0));
    }

    #[test]
    fn swatch_index_out_of_range_is_an_error() {
        let mut state = PickerState::new();
        let before = state.panel();
        assert!(state.select_swatch(20).is_err());
        assert_eq!(state.panel(), before);
        assert_eq!(state.panel().hex, DEFAULT_HEX.to_uppercase());
    }
}
