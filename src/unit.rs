// SPDX-License-Identifier: CC0-1.0

//! Units of time.
//!
//! A unit is described solely by its ratio to the base unit, the second. The [`TimeUnit`] trait
//! captures that ratio together with a display name, and this module provides the built-in
//! units from [`Day`] down to [`Nanosecond`].
//!
//! New units are added by implementing [`TimeUnit`] on a type of your own:
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
//! assert_eq!(Interval::new(2.0, Week), 14.days());
//! ```

use core::fmt;

#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};

/// A unit of time.
///
/// Implementors must return a strictly positive, finite ratio. This is not checked, a zero or
/// negative ratio produces meaningless (possibly non-finite) conversions.
pub trait TimeUnit: Copy + fmt::Debug {
    /// Returns the number of seconds one instance of this unit represents.
    fn time_interval_ratio(&self) -> f64;

    /// Returns the singular, lower-case name of this unit e.g., "minute".
    fn name(&self) -> &'static str;

    /// Returns the factor that converts a magnitude expressed in `self` into one expressed in
    /// `other`.
    ///
    /// Converting a unit to itself always gives `1.0`.
    #[inline]
    fn conversion_rate<V: TimeUnit>(&self, other: &V) -> f64 {
        self.time_interval_ratio() / other.time_interval_ratio()
    }
}

macro_rules! define_time_unit {
    ($($(#[$attr:meta])* $ty:ident, $ratio:expr, $name:literal);* $(;)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $ty;

            impl $ty {
                /// The number of seconds in this unit.
                pub const RATIO: f64 = $ratio;
            }

            impl TimeUnit for $ty {
                #[inline]
                fn time_interval_ratio(&self) -> f64 { Self::RATIO }

                #[inline]
                fn name(&self) -> &'static str { $name }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str($name) }
            }

            #[cfg(feature = "arbitrary")]
            impl<'a> Arbitrary<'a> for $ty {
                fn arbitrary(_: &mut Unstructured<'a>) -> arbitrary::Result<Self> { Ok($ty) }
            }
        )*
    };
}

define_time_unit! {
    /// A day of 86 400 seconds (no calendar or leap second awareness).
    Day, 86_400.0, "day";
    /// An hour, 3 600 seconds.
    Hour, 3_600.0, "hour";
    /// A minute, 60 seconds.
    Minute, 60.0, "minute";
    /// The second, base unit of all ratios.
    Second, 1.0, "second";
    /// A millisecond, also the canonical unit intervals are compared in.
    Millisecond, 1e-3, "millisecond";
    /// A microsecond.
    Microsecond, 1e-6, "microsecond";
    /// A nanosecond.
    Nanosecond, 1e-9, "nanosecond";
}
