use shared::{Cmyk, Rgb};

/// Derives the CMYK view of a color, every component a percentage.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let r = f64::from(rgb.red) / 255.0;
    let g = f64::from(rgb.green) / 255.0;
    let b = f64::from(rgb.blue) / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k == 1.0 {
        // Pure black. The division below would be 0/0, and the key alone
        // already carries the whole color.
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    Cmyk::new(c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

/// Rebuilds the nearest 8-bit color from a CMYK quadruple.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let c = cmyk.c() / 100.0;
    let m = cmyk.m() / 100.0;
    let y = cmyk.y() / 100.0;
    let k = cmyk.k() / 100.0;

    Rgb::new(
        (255.0 * (1.0 - c) * (1.0 - k)).round() as u8,
        (255.0 * (1.0 - m) * (1.0 - k)).round() as u8,
        (255.0 * (1.0 - y) * (1.0 - k)).round() as u8,
    )
}
