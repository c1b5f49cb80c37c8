// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Domain and port errors ([`PayloadError`](crate::domain::enhancement::PayloadError),
//! [`EnhanceError`](crate::application::port::EnhanceError)) stay in their own layers;
//! this type covers startup, configuration and file I/O.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The uploaded file could not be read as an image.
    #[error("Decode Error: {0}")]
    Decode(String),

    /// The enhanced image could not be written out.
    #[error("Encode Error: {0}")]
    Encode(String),

    /// No API key was supplied by the environment.
    #[error("Missing credential: set the {0} environment variable")]
    MissingCredential(&'static str),

    #[error("HTTP Error: {0}")]
    Http(String),
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Decode(_) => "error-decode",
            Error::Encode(_) => "error-encode",
            Error::MissingCredential(_) => "error-missing-credential",
            Error::Http(_) => "error-http",
        }
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<crate::domain::enhancement::PayloadError> for Error {
    fn from(err: crate::domain::enhancement::PayloadError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = Error::MissingCredential("GEMINI_API_KEY");
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert_eq!(err.i18n_key(), "error-missing-credential");
    }

    #[test]
    fn payload_error_becomes_decode_error() {
        let err: Error = crate::domain::enhancement::PayloadError::Empty.into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.i18n_key(), "error-decode");
    }
}
