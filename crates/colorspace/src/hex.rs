use anyhow::Result;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map_res, opt};
use nom::sequence::{preceded, tuple};

use shared::Rgb;

use crate::error::HexColorError;
use crate::NomResult;

/// Formats the hex view of a color: `#` plus three uppercase pairs.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_pair(input: &str) -> NomResult<u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |pair: &str| {
        u8::from_str_radix(pair, 16)
    })(input)
}

fn hex_triplet(input: &str) -> NomResult<(u8, u8, u8)> {
    preceded(opt(char('#')), tuple((hex_pair, hex_pair, hex_pair)))(input)
}

/// Parses a 6-digit hex color, case insensitive, with or without the
/// leading `#` and with surrounding whitespace ignored. Everything else is
/// an error, which callers driven by live typing simply discard.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let trimmed = hex.trim();
    if trimmed.is_empty() {
        return Err(HexColorError::Empty.into());
    }
    match all_consuming(hex_triplet)(trimmed) {
        Ok((_, (red, green, blue))) => Ok(Rgb::new(red, green, blue)),
        Err(_) => Err(HexColorError::Malformed(trimmed.to_string()).into()),
    }
}

#[cfg(test)]
mod test {
    use shared::Rgb;

    use super::{hex_to_rgb, rgb_to_hex};
    use crate::error::HexColorError;

    #[test]
    fn formats_uppercase_with_hash() {
        assert_eq!(rgb_to_hex(Rgb::new(74, 163, 255)), "#4AA3FF");
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(rgb_to_hex(Rgb::new(255, 255, 255)), "#FFFFFF");
        assert_eq!(rgb_to_hex(Rgb::new(255, 20, 147)), "#FF1493");
    }

    #[test]
    fn zero_pads_small_channels() {
        assert_eq!(rgb_to_hex(Rgb::new(1, 2, 3)), "#010203");
        assert_eq!(rgb_to_hex(Rgb::new(0, 15, 16)), "#000F10");
    }

    #[test]
    fn parses_any_case_with_or_without_hash() {
        let expected = Rgb::new(74, 163, 255);
        assert_eq!(hex_to_rgb("#4aa3ff").unwrap(), expected);
        assert_eq!(hex_to_rgb("#4AA3FF").unwrap(), expected);
        assert_eq!(hex_to_rgb("#4Aa3Ff").unwrap(), expected);
        assert_eq!(hex_to_rgb("4aa3ff").unwrap(), expected);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(hex_to_rgb("  #4aa3ff  ").unwrap(), Rgb::new(74, 163, 255));
        assert_eq!(hex_to_rgb("\t00ff00\n").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn blank_input_is_an_empty_error() {
        for input in ["", "   ", "\t\n"] {
            let err = hex_to_rgb(input).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<HexColorError>(),
                Some(HexColorError::Empty)
            ));
        }
    }

    #[test]
    fn wrong_shapes_are_malformed_errors() {
        for input in [
            "#4aa3f", "#4aa3ff0", "#4aa3ffaa", "zz0000", "#gg0000", "#", "##ff0000",
            "not-a-color", "rgb(1, 2, 3)", "# 4aa3ff", "#4aa 3ff",
        ] {
            let err = hex_to_rgb(input).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<HexColorError>(),
                    Some(HexColorError::Malformed(_))
                ),
                "{:?} should be rejected as malformed",
                input
            );
        }
    }

    #[test]
    fn shorthand_triplets_are_rejected() {
        assert!(hex_to_rgb("#fff").is_err());
        assert!(hex_to_rgb("fff").is_err());
    }

    #[test]
    fn every_channel_value_round_trips_exactly() {
        for value in 0..=255u8 {
            for rgb in [
                Rgb::new(value, 0, 128),
                Rgb::new(37, value, 212),
                Rgb::new(214, 91, value),
            ] {
                assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
            }
        }
    }
}
