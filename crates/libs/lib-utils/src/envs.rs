//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! Gateway settings all have defaults, so lookups usually go through
//! [`get_env_or`] and typed values through [`parse_value`].

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, or `default` when it is not set.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Parse a raw value read for `name`.
pub fn parse_value<T: FromStr>(name: &'static str, val: &str) -> Result<T, Error> {
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

// endregion: --- Tests
