// SPDX-License-Identifier: CC0-1.0

//! Parsing intervals from strings.
//!
//! Reads back what the `Display` impl of [`Interval`] writes: a magnitude followed by the unit
//! name, singular or plural.
//!
//! ```
//! use time_interval::{Interval, Minute, ToInterval};
//!
//! let parsed = "90 minutes".parse::<Interval<Minute>>()?;
//! assert_eq!(parsed, 1.5.hours());
//! # Ok::<(), time_interval::parse::ParseIntervalError>(())
//! ```

use alloc::string::{String, ToString};
use core::fmt;
use core::num::ParseFloatError;
use core::str::FromStr;

use internals::write_err;

use crate::{Interval, TimeUnit};

/// Error returned when parsing an [`Interval`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntervalError(pub(crate) ParseIntervalErrorInner);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseIntervalErrorInner {
    /// The input has no unit after the magnitude.
    MissingUnit(MissingUnitError),
    /// The magnitude is not a number.
    Magnitude(InvalidMagnitudeError),
    /// The unit is not the one being parsed.
    UnitMismatch(UnitMismatchError),
}

impl From<MissingUnitError> for ParseIntervalError {
    fn from(e: MissingUnitError) -> Self { Self(ParseIntervalErrorInner::MissingUnit(e)) }
}

impl From<InvalidMagnitudeError> for ParseIntervalError {
    fn from(e: InvalidMagnitudeError) -> Self { Self(ParseIntervalErrorInner::Magnitude(e)) }
}

impl From<UnitMismatchError> for ParseIntervalError {
    fn from(e: UnitMismatchError) -> Self { Self(ParseIntervalErrorInner::UnitMismatch(e)) }
}

impl fmt::Display for ParseIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseIntervalErrorInner as E;

        match self.0 {
            E::MissingUnit(ref e) => write_err!(f, "invalid interval"; e),
            E::Magnitude(ref e) => write_err!(f, "invalid interval magnitude"; e),
            E::UnitMismatch(ref e) => write_err!(f, "invalid interval unit"; e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseIntervalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use ParseIntervalErrorInner as E;

        match self.0 {
            E::MissingUnit(ref e) => Some(e),
            E::Magnitude(ref e) => Some(e),
            E::UnitMismatch(ref e) => Some(e),
        }
    }
}

/// Error returned when the input doesn't contain a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MissingUnitError {
    input: String,
}

impl MissingUnitError {
    /// Returns the input that was attempted to be parsed.
    pub fn input(&self) -> &str { &self.input }
}

impl fmt::Display for MissingUnitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "the input '{}' doesn't contain a unit", self.input)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MissingUnitError {}

/// Error returned when the magnitude of an interval is not a valid number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct InvalidMagnitudeError {
    input: String,
    source: ParseFloatError,
}

impl InvalidMagnitudeError {
    /// Returns the magnitude that was attempted to be parsed.
    pub fn input(&self) -> &str { &self.input }
}

impl fmt::Display for InvalidMagnitudeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_err!(f, "failed to parse '{}' as a number", self.input; self.source)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidMagnitudeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { Some(&self.source) }
}

impl From<InvalidMagnitudeError> for ParseFloatError {
    fn from(value: InvalidMagnitudeError) -> Self { value.source }
}

/// Error returned when the unit in the input is not the unit of the interval being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnitMismatchError {
    expected: &'static str,
    found: String,
}

impl UnitMismatchError {
    /// Returns the name of the unit that was expected.
    pub fn expected(&self) -> &'static str { self.expected }

    /// Returns the unit found in the input.
    pub fn found(&self) -> &str { &self.found }
}

impl fmt::Display for UnitMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected unit '{}' but found '{}'", self.expected, self.found)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnitMismatchError {}

/// Returns true if `found` is `name` in singular or plural form.
fn is_unit_name(name: &str, found: &str) -> bool {
    found == name || found.strip_suffix('s') == Some(name)
}

impl<U: TimeUnit + Default> FromStr for Interval<U> {
    type Err = ParseIntervalError;

    /// Parses `"<magnitude> <unit>"`, e.g. `"5 minutes"` or `"1.5 hour"`.
    ///
    /// # Errors
    ///
    /// - If there is no unit after the magnitude a [`MissingUnitError`] is returned.
    /// - If the magnitude can't be parsed as an `f64` an [`InvalidMagnitudeError`] is returned.
    /// - If the unit isn't `U` an [`UnitMismatchError`] is returned. No conversion is attempted,
    ///   parse into the matching type and use [`Interval::converted`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = U::default();

        let trimmed = s.trim();
        let (magnitude, name) = match trimmed.split_once(char::is_whitespace) {
            Some((magnitude, name)) => (magnitude, name.trim_start()),
            None => return Err(MissingUnitError { input: s.into() }.into()),
        };

        let value = magnitude
            .parse::<f64>()
            .map_err(|source| InvalidMagnitudeError { input: magnitude.into(), source })?;

        if !is_unit_name(unit.name(), name) {
            return Err(UnitMismatchError { expected: unit.name(), found: name.to_string() }.into());
        }

        Ok(Interval::new(value, unit))
    }
}
