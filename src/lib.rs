// SPDX-License-Identifier: CC0-1.0

//! Time interval library
//!
//! This library provides [`Interval`], a value type holding a magnitude expressed in some unit of
//! time, and the [`TimeUnit`] trait describing such units. Intervals in different units can be
//! converted, compared and combined freely:
//!
//! ```
//! use time_interval::ToInterval;
//!
//! assert!(5.minutes() > 120.seconds());
//! assert_eq!(60.seconds() + 2.minutes() - 20.seconds(), 160.seconds());
//! assert_eq!(24.hours().in_days().value(), 1.0);
//! assert_eq!(90.seconds().to_string(), "90 seconds");
//! ```
//!
//! ## Available feature flags
//!
//! * `std` - the usual dependency on `std` (default).
//! * `alloc` - enables parsing intervals from strings.
//! * `arbitrary` - (dependency), implements `arbitrary::Arbitrary` for the public types.

#![no_std]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod float;
mod internal_macros;

pub mod ext;
pub mod interval;
#[cfg(feature = "alloc")]
pub mod parse;
pub mod unit;

#[doc(inline)]
#[rustfmt::skip]
pub use self::{
    ext::{Magnitude, ToInterval},
    interval::Interval,
    unit::{Day, Hour, Microsecond, Millisecond, Minute, Nanosecond, Second, TimeUnit},
};
