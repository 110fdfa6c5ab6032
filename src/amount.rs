use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidReason, Result};

/// Largest ruble count the engine can spell (just under one trillion).
pub const MAX_RUBLES: u64 = 999_999_999_999;

/// A validated non-negative ruble amount with kopeck precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Amount {
    rubles: u64,
    kopecks: u8,
}

impl Amount {
    pub fn new(rubles: u64, kopecks: u8) -> Result<Self> {
        if rubles > MAX_RUBLES {
            return Err(Error::invalid(format!("{rubles}.{kopecks:02}"), InvalidReason::OutOfRange));
        }
        if kopecks >= 100 {
            return Err(Error::Unparsable(format!("{rubles}.{kopecks}")));
        }
        Ok(Amount { rubles, kopecks })
    }

    pub fn rubles(&self) -> u64 {
        self.rubles
    }

    pub fn kopecks(&self) -> u8 {
        self.kopecks
    }

    /// The same amount with the kopecks dropped (not rounded).
    pub fn truncated(&self) -> Self {
        Amount { rubles: self.rubles, kopecks: 0 }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.rubles, self.kopecks)
    }
}

/// Converts a float by formatting it to exactly two fractional digits first,
/// so `100.21` yields 21 kopecks rather than a binary approximation of them.
impl TryFrom<f64> for Amount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::invalid(value.to_string(), InvalidReason::NotFinite));
        }
        if value < 0.0 {
            return Err(Error::invalid(value.to_string(), InvalidReason::Negative));
        }
        if value >= 1e12 {
            return Err(Error::invalid(value.to_string(), InvalidReason::OutOfRange));
        }

        // -0.0 would otherwise format as "-0.00".
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{value:.2}").parse()
    }
}

/// Parses decimal text such as `"208 676"`, `"100.21"` or `"4702,5"`.
///
/// Spaces, underscores and no-break spaces are accepted as digit-group
/// separators; either `.` or `,` separates kopecks.
impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String =
            s.trim().chars().filter(|c| !matches!(c, ' ' | '_' | '\u{00a0}' | '\u{202f}')).collect();

        let caps = regex!(r"^(-)?([0-9]+)(?:[.,]([0-9]{1,2}))?$")
            .captures(&compact)
            .ok_or_else(|| Error::Unparsable(s.to_string()))?;

        let integer = caps.get(2).map_or("", |m| m.as_str()).trim_start_matches('0');
        if integer.len() > 12 {
            return Err(Error::invalid(s.trim(), InvalidReason::OutOfRange));
        }

        let rubles = if integer.is_empty() {
            0
        } else {
            integer.parse::<u64>().map_err(|_| Error::Unparsable(s.to_string()))?
        };

        let kopecks = match caps.get(3) {
            Some(m) => {
                let digits = m.as_str();
                let v = digits.parse::<u8>().map_err(|_| Error::Unparsable(s.to_string()))?;
                if digits.len() == 1 { v * 10 } else { v }
            }
            None => 0,
        };

        if caps.get(1).is_some() && (rubles > 0 || kopecks > 0) {
            return Err(Error::invalid(s.trim(), InvalidReason::Negative));
        }

        Amount::new(rubles, kopecks)
    }
}
