// SPDX-License-Identifier: CC0-1.0

//! Constructing intervals from primitive numbers.
//!
//! The [`ToInterval`] trait adds a method per built-in unit to the primitive numeric types, so
//! intervals read naturally in code:
//!
//! ```
//! use time_interval::ToInterval;
//!
//! let timeout = 30.seconds();
//! let budget = 1.5.minutes();
//! assert!(budget > timeout);
//! ```
//!
//! Custom units plug in through [`ToInterval::interval`], typically wrapped in an extension trait
//! of their own:
//!
//! ```
//! use time_interval::{Interval, TimeUnit, ToInterval};
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! struct Week;
//!
//! impl TimeUnit for Week {
//!     fn time_interval_ratio(&self) -> f64 { 604_800.0 }
//!     fn name(&self) -> &'static str { "week" }
//! }
//!
//! trait ToWeeks: ToInterval {
//!     fn weeks(self) -> Interval<Week> { self.interval(Week) }
//! }
//!
//! impl<T: ToInterval> ToWeeks for T {}
//!
//! assert_eq!(2.weeks(), 14.days());
//! ```

use crate::unit::{Day, Hour, Microsecond, Millisecond, Minute, Nanosecond, Second, TimeUnit};
use crate::Interval;

mod sealed {
    pub trait Sealed {}
}

/// A primitive number usable as the magnitude of an [`Interval`] or as a scalar factor.
///
/// Every magnitude is stored and computed as an `f64`. Conversion from `i64` rounds to the
/// nearest representable value for magnitudes above 2^53.
pub trait Magnitude: Copy + sealed::Sealed {
    /// Returns this number as an `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_magnitude_lossless {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Magnitude for $ty {
            #[inline]
            fn to_f64(self) -> f64 { f64::from(self) }
        }
    )*};
}

impl_magnitude_lossless!(i8, i16, i32, u8, u16, u32, f64);

impl sealed::Sealed for i64 {}

impl Magnitude for i64 {
    #[inline]
    #[allow(clippy::cast_precision_loss)] // Documented on the trait.
    fn to_f64(self) -> f64 { self as f64 }
}

/// Constructs intervals from primitive numbers, one method per built-in unit.
pub trait ToInterval: Magnitude {
    /// Constructs an interval of `self` in the given unit.
    #[inline]
    fn interval<U: TimeUnit>(self, unit: U) -> Interval<U> { Interval::from_magnitude(self, unit) }

    /// Constructs an interval of `self` days.
    #[inline]
    fn days(self) -> Interval<Day> { self.interval(Day) }

    /// Constructs an interval of `self` hours.
    #[inline]
    fn hours(self) -> Interval<Hour> { self.interval(Hour) }

    /// Constructs an interval of `self` minutes.
    #[inline]
    fn minutes(self) -> Interval<Minute> { self.interval(Minute) }

    /// Constructs an interval of `self` seconds.
    #[inline]
    fn seconds(self) -> Interval<Second> { self.interval(Second) }

    /// Constructs an interval of `self` milliseconds.
    #[inline]
    fn milliseconds(self) -> Interval<Millisecond> { self.interval(Millisecond) }

    /// Constructs an interval of `self` microseconds.
    #[inline]
    fn microseconds(self) -> Interval<Microsecond> { self.interval(Microsecond) }

    /// Constructs an interval of `self` nanoseconds.
    #[inline]
    fn nanoseconds(self) -> Interval<Nanosecond> { self.interval(Nanosecond) }

    /// Equivalent to `days()`, but reads better for singular units.
    #[inline]
    fn day(self) -> Interval<Day> { self.days() }

    /// Equivalent to `hours()`, but reads better for singular units.
    #[inline]
    fn hour(self) -> Interval<Hour> { self.hours() }

    /// Equivalent to `minutes()`, but reads better for singular units.
    #[inline]
    fn minute(self) -> Interval<Minute> { self.minutes() }

    /// Equivalent to `seconds()`, but reads better for singular units.
    #[inline]
    fn second(self) -> Interval<Second> { self.seconds() }

    /// Equivalent to `milliseconds()`, but reads better for singular units.
    #[inline]
    fn millisecond(self) -> Interval<Millisecond> { self.milliseconds() }

    /// Equivalent to `microseconds()`, but reads better for singular units.
    #[inline]
    fn microsecond(self) -> Interval<Microsecond> { self.microseconds() }

    /// Equivalent to `nanoseconds()`, but reads better for singular units.
    #[inline]
    fn nanosecond(self) -> Interval<Nanosecond> { self.nanoseconds() }
}

impl ToInterval for i8 {}
impl ToInterval for i16 {}
impl ToInterval for i32 {}
impl ToInterval for i64 {}
impl ToInterval for u8 {}
impl ToInterval for u16 {}
impl ToInterval for u32 {}
impl ToInterval for f64 {}
