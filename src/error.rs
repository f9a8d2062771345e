// SPDX-License-Identifier: MPL-2.0
use crate::domain::gallery::GalleryError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Gallery(GalleryError),
    Gui(String),
    Logging(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Gallery(err) => err.i18n_key(),
            Error::Io(_) | Error::Config(_) => "error-config-load",
            Error::Gui(_) | Error::Logging(_) => "error-startup",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
            Error::Logging(e) => write!(f, "Logging Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
