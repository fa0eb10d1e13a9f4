use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexColorError {
    #[error("empty hex color string")]
    Empty,
    #[error("malformed hex color {0:?}: expected 6 hex digits with an optional leading '#'")]
    Malformed(String),
}
