// SPDX-License-Identifier: CC0-1.0

//! Internal macros.
//!
//! Macros meant to be used inside the `time-interval` library.

/// Implements an opcode for various reference combinations.
///
/// Given `$ty`, implements `$op_trait<$other_ty>` on it using the given body, and implements the
/// same trait with the full matrix of `&$ty` and `&$other_ty`:
///
/// - `Add<$other_ty> for &$ty`
/// - `Add<&$other_ty> for $ty`
/// - `Add<&$other_ty> for &$ty`
///
/// # Limitations
///
/// Every generic parameter needs exactly one bound, and you may not use `Self`. So e.g. you need
/// to write `impl<U: TimeUnit, V: TimeUnit> ops::Add<Interval<V>> for Interval<U> { ... }`.
macro_rules! impl_op_for_references {
    ($(
        impl<$($gen:ident: $bound:path),+> $($op_trait:ident)::+<$other_ty:ty> for $ty:ty {
            type Output = $main_output:ty;
            fn $op:ident($($main_args:tt)*) -> Self::Output {
                $($main_impl:tt)*
            }
        }
    )+) => {$(
        impl<$($gen: $bound),+> $($op_trait)::+<$other_ty> for $ty {
            type Output = $main_output;
            fn $op($($main_args)*) -> Self::Output {
                $($main_impl)*
            }
        }

        impl<$($gen: $bound),+> $($op_trait)::+<$other_ty> for &$ty {
            type Output = <$ty as $($op_trait)::+<$other_ty>>::Output;
            fn $op(self, rhs: $other_ty) -> Self::Output {
                $($op_trait)::+::$op(*self, rhs)
            }
        }

        impl<$($gen: $bound),+> $($op_trait)::+<&$other_ty> for $ty {
            type Output = <$ty as $($op_trait)::+<$other_ty>>::Output;
            fn $op(self, rhs: &$other_ty) -> Self::Output {
                $($op_trait)::+::$op(self, *rhs)
            }
        }

        impl<'a, $($gen: $bound),+> $($op_trait)::+<&'a $other_ty> for &$ty {
            type Output = <$ty as $($op_trait)::+<$other_ty>>::Output;
            fn $op(self, rhs: &$other_ty) -> Self::Output {
                $($op_trait)::+::$op(*self, *rhs)
            }
        }
    )+};
}
pub(crate) use impl_op_for_references;

/// Implements an opcode taking a [`Magnitude`](crate::Magnitude) scalar on the right-hand side,
/// for both `Interval<U>` and `&Interval<U>`.
macro_rules! impl_scalar_op {
    ($($op_trait:ident, $op:ident, $method:ident);* $(;)?) => {$(
        impl<U: TimeUnit, N: Magnitude> core::ops::$op_trait<N> for Interval<U> {
            type Output = Interval<U>;
            fn $op(self, rhs: N) -> Self::Output { self.$method(rhs) }
        }

        impl<U: TimeUnit, N: Magnitude> core::ops::$op_trait<N> for &Interval<U> {
            type Output = Interval<U>;
            fn $op(self, rhs: N) -> Self::Output { (*self).$method(rhs) }
        }
    )*};
}
pub(crate) use impl_scalar_op;

/// Implements `ops::Mul<Interval<U>>` for the given primitive scalar types.
macro_rules! impl_mul_interval_for_scalar {
    ($($scalar:ty),* $(,)?) => {$(
        impl<U: TimeUnit> core::ops::Mul<Interval<U>> for $scalar {
            type Output = Interval<U>;
            fn mul(self, rhs: Interval<U>) -> Self::Output { rhs.scale(self) }
        }

        impl<U: TimeUnit> core::ops::Mul<&Interval<U>> for $scalar {
            type Output = Interval<U>;
            fn mul(self, rhs: &Interval<U>) -> Self::Output { rhs.scale(self) }
        }
    )*};
}
pub(crate) use impl_mul_interval_for_scalar;

/// Implement `ops::AddAssign` for `Interval<U>` with `Interval<V>` and `&Interval<V>`.
macro_rules! impl_add_assign {
    () => {
        impl<U: TimeUnit, V: TimeUnit> core::ops::AddAssign<Interval<V>> for Interval<U> {
            fn add_assign(&mut self, rhs: Interval<V>) { *self = *self + rhs }
        }

        impl<U: TimeUnit, V: TimeUnit> core::ops::AddAssign<&Interval<V>> for Interval<U> {
            fn add_assign(&mut self, rhs: &Interval<V>) { *self = *self + *rhs }
        }
    };
}
pub(crate) use impl_add_assign;

/// Implement `ops::SubAssign` for `Interval<U>` with `Interval<V>` and `&Interval<V>`.
macro_rules! impl_sub_assign {
    () => {
        impl<U: TimeUnit, V: TimeUnit> core::ops::SubAssign<Interval<V>> for Interval<U> {
            fn sub_assign(&mut self, rhs: Interval<V>) { *self = *self - rhs }
        }

        impl<U: TimeUnit, V: TimeUnit> core::ops::SubAssign<&Interval<V>> for Interval<U> {
            fn sub_assign(&mut self, rhs: &Interval<V>) { *self = *self - *rhs }
        }
    };
}
pub(crate) use impl_sub_assign;
