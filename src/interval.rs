// SPDX-License-Identifier: CC0-1.0

//! Implements [`Interval`] and associated features.
//!
//! An interval is a magnitude tagged with a unit of time. Intervals of different units interoperate
//! directly: they can be added, subtracted and compared without converting either side first.
//! Arithmetic keeps the unit of the left operand, comparison and equality look only at the length
//! of time represented, never at the unit tag.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::{fmt, ops};

#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};

use crate::ext::Magnitude;
use crate::internal_macros::{
    impl_add_assign, impl_mul_interval_for_scalar, impl_op_for_references, impl_scalar_op,
    impl_sub_assign,
};
use crate::unit::{Day, Hour, Microsecond, Millisecond, Minute, Nanosecond, Second, TimeUnit};

mod encapsulate {
    use crate::unit::TimeUnit;

    /// A length of time expressed in some unit.
    ///
    /// The magnitude is an `f64` stored exactly as supplied, no validation is performed so NaN
    /// and infinities propagate through every operation following IEEE 754 semantics.
    ///
    /// Equality, ordering and hashing compare the length of time represented, converted to the
    /// canonical unit (milliseconds), so `1.minutes() == 60.seconds()` even though the two carry
    /// different units.
    #[derive(Debug, Clone, Copy)]
    pub struct Interval<U: TimeUnit> {
        value: f64,
        unit: U,
    }

    impl<U: TimeUnit> Interval<U> {
        /// Constructs a new [`Interval`] of `value` in `unit`.
        #[inline]
        pub const fn new(value: f64, unit: U) -> Self { Self { value, unit } }

        /// Returns the magnitude, exactly as supplied on construction.
        #[inline]
        pub const fn value(&self) -> f64 { self.value }

        /// Returns the unit this interval is expressed in.
        #[inline]
        pub const fn unit(&self) -> U { self.unit }
    }
}
#[doc(inline)]
pub use encapsulate::Interval;

impl<U: TimeUnit> Interval<U> {
    /// Constructs a new [`Interval`] from any primitive number.
    #[inline]
    pub fn from_magnitude<N: Magnitude>(value: N, unit: U) -> Self {
        Self::new(value.to_f64(), unit)
    }

    /// Constructs an empty interval in `unit`.
    #[inline]
    pub const fn zero(unit: U) -> Self { Self::new(0.0, unit) }

    /// Returns the magnitude rounded to the nearest integer, ties to even.
    ///
    /// Values outside the `i64` range saturate and NaN becomes zero.
    pub fn long_value(&self) -> i64 { crate::float::round_ties_even(self.value()) as i64 }

    /// Returns true if the magnitude has no fractional part.
    pub fn is_whole(&self) -> bool { self.value() % 1.0 == 0.0 }

    /// Returns the magnitude expressed in the canonical unit, milliseconds.
    ///
    /// This is the quantity used for equality, ordering and hashing.
    #[inline]
    pub fn in_canonical(&self) -> f64 { self.value() * self.unit().conversion_rate(&Millisecond) }

    /// Converts this interval to the unit `to`.
    ///
    /// The conversion is a linear rescale by [`TimeUnit::conversion_rate`], converting back
    /// reproduces the original magnitude up to floating point rounding.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_interval::{Minute, ToInterval};
    ///
    /// assert_eq!(2.hours().converted(Minute).value(), 120.0);
    /// ```
    #[inline]
    pub fn converted<V: TimeUnit>(self, to: V) -> Interval<V> {
        Interval::new(self.value() * self.unit().conversion_rate(&to), to)
    }

    /// Converts this interval to days.
    pub fn in_days(self) -> Interval<Day> { self.converted(Day) }

    /// Converts this interval to hours.
    pub fn in_hours(self) -> Interval<Hour> { self.converted(Hour) }

    /// Converts this interval to minutes.
    pub fn in_minutes(self) -> Interval<Minute> { self.converted(Minute) }

    /// Converts this interval to seconds.
    pub fn in_seconds(self) -> Interval<Second> { self.converted(Second) }

    /// Converts this interval to milliseconds.
    pub fn in_milliseconds(self) -> Interval<Millisecond> { self.converted(Millisecond) }

    /// Converts this interval to microseconds.
    pub fn in_microseconds(self) -> Interval<Microsecond> { self.converted(Microsecond) }

    /// Converts this interval to nanoseconds.
    pub fn in_nanoseconds(self) -> Interval<Nanosecond> { self.converted(Nanosecond) }

    /// Adds `other`, keeping the unit of `self`.
    ///
    /// Also available as the `+` operator.
    #[must_use]
    #[allow(clippy::should_implement_trait)] // `ops::Add` is implemented in terms of this.
    pub fn add<V: TimeUnit>(self, other: Interval<V>) -> Self {
        let unit = self.unit();
        Self::new(self.value() + other.value() * other.unit().conversion_rate(&unit), unit)
    }

    /// Subtracts `other`, keeping the unit of `self`.
    ///
    /// Also available as the `-` operator.
    #[must_use]
    pub fn subtract<V: TimeUnit>(self, other: Interval<V>) -> Self {
        let unit = self.unit();
        Self::new(self.value() - other.value() * other.unit().conversion_rate(&unit), unit)
    }

    /// Multiplies the magnitude by `factor`.
    ///
    /// Also available as the `*` operator.
    #[must_use]
    pub fn scale<N: Magnitude>(self, factor: N) -> Self {
        Self::new(self.value() * factor.to_f64(), self.unit())
    }

    /// Divides the magnitude by `divisor`.
    ///
    /// Dividing by zero gives an infinite or NaN magnitude. Also available as the `/` operator.
    #[must_use]
    pub fn divide<N: Magnitude>(self, divisor: N) -> Self {
        Self::new(self.value() / divisor.to_f64(), self.unit())
    }

    /// Adds one of the current unit, `2.days()` becomes `3.days()`.
    #[must_use]
    pub fn increment(self) -> Self { Self::new(self.value() + 1.0, self.unit()) }

    /// Subtracts one of the current unit, `2.days()` becomes `1.days()`.
    #[must_use]
    pub fn decrement(self) -> Self { Self::new(self.value() - 1.0, self.unit()) }

    /// Returns the interval with a non-negative magnitude.
    #[must_use]
    pub fn abs(self) -> Self { Self::new(crate::float::abs(self.value()), self.unit()) }

    /// Compares the length of time of `self` and `other`, regardless of their units.
    ///
    /// Both sides are converted to milliseconds and compared with [`f64::total_cmp`], this is
    /// therefore a total order: `-0.0` sorts below `0.0` and NaN is equal to itself.
    pub fn compare<V: TimeUnit>(&self, other: &Interval<V>) -> Ordering {
        self.in_canonical().total_cmp(&other.in_canonical())
    }

    /// Returns true if `self` is at least as long as `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_interval::ToInterval;
    ///
    /// assert!(4.hours().contains(&60.minutes()));
    /// assert!(2.minutes().contains(&120.seconds()));
    /// assert!(!24.hours().contains(&2.days()));
    /// ```
    pub fn contains<V: TimeUnit>(&self, other: &Interval<V>) -> bool {
        self.in_canonical() >= other.in_canonical()
    }

    /// Returns true if `other` is at least as long as `self`, reads as "`self` in `other`".
    ///
    /// # Examples
    ///
    /// ```
    /// use time_interval::ToInterval;
    ///
    /// assert!(60.minutes().is_within(&4.hours()));
    /// assert!(!2.days().is_within(&24.hours()));
    /// ```
    pub fn is_within<V: TimeUnit>(&self, other: &Interval<V>) -> bool { other.contains(self) }
}

impl<U: TimeUnit, V: TimeUnit> PartialEq<Interval<V>> for Interval<U> {
    fn eq(&self, other: &Interval<V>) -> bool { self.compare(other) == Ordering::Equal }
}

impl<U: TimeUnit> Eq for Interval<U> {}

impl<U: TimeUnit, V: TimeUnit> PartialOrd<Interval<V>> for Interval<U> {
    fn partial_cmp(&self, other: &Interval<V>) -> Option<Ordering> { Some(self.compare(other)) }
}

impl<U: TimeUnit> Ord for Interval<U> {
    fn cmp(&self, other: &Self) -> Ordering { self.compare(other) }
}

impl<U: TimeUnit> Hash for Interval<U> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.in_canonical().to_bits().hash(state) }
}

/// Renders `"<magnitude> <unit>"` with the unit pluralised unless the magnitude is exactly one.
///
/// Whole magnitudes are rendered without a decimal point.
impl<U: TimeUnit> fmt::Display for Interval<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.value();
        if self.is_whole() {
            fmt::Display::fmt(&self.long_value(), f)?;
        } else {
            fmt::Display::fmt(&value, f)?;
        }
        let plural = if value == 1.0 { "" } else { "s" };
        write!(f, " {}{}", self.unit().name(), plural)
    }
}

impl_op_for_references! {
    impl<U: TimeUnit, V: TimeUnit> ops::Add<Interval<V>> for Interval<U> {
        type Output = Interval<U>;

        fn add(self, rhs: Interval<V>) -> Self::Output { Interval::add(self, rhs) }
    }
    impl<U: TimeUnit, V: TimeUnit> ops::Sub<Interval<V>> for Interval<U> {
        type Output = Interval<U>;

        fn sub(self, rhs: Interval<V>) -> Self::Output { self.subtract(rhs) }
    }
}
impl_add_assign!();
impl_sub_assign!();

impl_scalar_op! {
    Mul, mul, scale;
    Div, div, divide;
}
impl_mul_interval_for_scalar!(i8, i16, i32, i64, u8, u16, u32, f64);

impl<U: TimeUnit, N: Magnitude> ops::MulAssign<N> for Interval<U> {
    fn mul_assign(&mut self, rhs: N) { *self = self.scale(rhs); }
}

impl<U: TimeUnit, N: Magnitude> ops::DivAssign<N> for Interval<U> {
    fn div_assign(&mut self, rhs: N) { *self = self.divide(rhs); }
}

impl<U: TimeUnit> ops::Neg for Interval<U> {
    type Output = Self;

    fn neg(self) -> Self::Output { Self::new(-self.value(), self.unit()) }
}

impl<U: TimeUnit + Default> core::iter::Sum for Interval<U> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::zero(U::default()), |acc, x| acc + x)
    }
}

impl<'a, U: TimeUnit + Default + 'a> core::iter::Sum<&'a Self> for Interval<U> {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Self>,
    {
        iter.copied().sum()
    }
}

#[cfg(feature = "arbitrary")]
impl<'a, U: TimeUnit + Arbitrary<'a>> Arbitrary<'a> for Interval<U> {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let value = f64::arbitrary(u)?;
        let unit = U::arbitrary(u)?;
        Ok(Self::new(value, unit))
    }
}
