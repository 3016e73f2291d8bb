//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, or `default` when it is unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an environment variable, falling back to `default` only when it is unset.
///
/// A value that is set but malformed is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} is not set"),
            Error::WrongFormat(name) => write!(fmt, "{name} has an invalid format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared.

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_SURELY_UNSET"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_SURELY_UNSET"))
        );
        assert_eq!(get_env_or("LIB_UTILS_TEST_SURELY_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_UNSET_NUMBER", 42u64), Ok(42));

        env::set_var("LIB_UTILS_TEST_BAD_NUMBER", "forty-two");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_BAD_NUMBER", 42u64),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_NUMBER"))
        );

        env::set_var("LIB_UTILS_TEST_GOOD_NUMBER", " 7 ");
        assert_eq!(get_env_parse::<u64>("LIB_UTILS_TEST_GOOD_NUMBER"), Ok(7));
    }
}
