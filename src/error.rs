use std::fmt;

use thiserror::Error;

/// Why an amount falls outside the convertible domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Negative,
    NotFinite,
    /// 10^12 rubles or more.
    OutOfRange,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidReason::Negative => "negative amounts are not supported",
            InvalidReason::NotFinite => "amount is not a finite number",
            InvalidReason::OutOfRange => "amount must be below 1 000 000 000 000 rubles",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: InvalidReason },

    #[error("cannot parse '{0}' as a ruble amount")]
    Unparsable(String),
}

impl Error {
    pub(crate) fn invalid(input: impl Into<String>, reason: InvalidReason) -> Self {
        Error::InvalidAmount { input: input.into(), reason }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
