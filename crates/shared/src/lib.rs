//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod cmyk;
mod hsl;
pub mod numeric;
mod rgb;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use rgb::Rgb;
