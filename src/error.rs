//! Crate error type.
//!
//! The box pipeline itself never fails; errors only come from the host side:
//! SDL setup and presentation, image encoding, and startup configuration.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// SDL reports failures as plain strings.
    Sdl(String),
    Image(image::ImageError),
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sdl(msg) => write!(f, "SDL error: {msg}"),
            Error::Image(err) => write!(f, "image error: {err}"),
            Error::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(err) => Some(err),
            Error::Sdl(_) | Error::InvalidConfig(_) => None,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Sdl(msg)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Image(err)
    }
}
