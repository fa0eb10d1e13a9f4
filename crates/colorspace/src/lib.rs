use nom::IResult;

mod cmyk;
mod error;
mod hex;
mod hsl;

pub use crate::cmyk::{cmyk_to_rgb, rgb_to_cmyk};
pub use crate::error::HexColorError;
pub use crate::hex::{hex_to_rgb, rgb_to_hex};
pub use crate::hsl::{hsl_to_rgb, rgb_to_hsl};

type NomError = ();
type NomResult<'a, O, E = NomError> = IResult<&'a str, O, E>;
