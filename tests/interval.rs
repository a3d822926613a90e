// SPDX-License-Identifier: CC0-1.0

//! Behavioural tests for intervals across units, including a unit defined outside the crate.

use time_interval::{
    Day, Hour, Interval, Microsecond, Millisecond, Minute, Nanosecond, Second, TimeUnit,
    ToInterval,
};

/// A unit the library knows nothing about.
#[derive(Debug, Clone, Copy, Default)]
struct Week;

impl TimeUnit for Week {
    fn time_interval_ratio(&self) -> f64 { 604_800.0 }
    fn name(&self) -> &'static str { "week" }
}

trait ToWeeks: ToInterval {
    fn weeks(self) -> Interval<Week> { self.interval(Week) }
}

impl<T: ToInterval> ToWeeks for T {}

trait InWeeks {
    fn in_weeks(self) -> Interval<Week>;
}

impl<U: TimeUnit> InWeeks for Interval<U> {
    fn in_weeks(self) -> Interval<Week> { self.converted(Week) }
}

#[track_caller]
fn assert_close(got: f64, want: f64) {
    let tolerance = 1e-12 * want.abs().max(1.0);
    assert!((got - want).abs() <= tolerance, "got {}, want {}", got, want);
}

/// Converts `magnitude` from `from` to `to` and back, returning the final magnitude.
fn round_trip<U: TimeUnit, V: TimeUnit>(magnitude: f64, from: U, to: V) -> f64 {
    Interval::new(magnitude, from).converted(to).converted(from).value()
}

macro_rules! check_round_trips {
    (@inner $from:expr; ($($to:expr),*)) => {
        $(
            for magnitude in [0.0, 1.0, 2.5, 60.0, 1_000.0, 123_456.789, -42.0] {
                assert_close(round_trip(magnitude, $from, $to), magnitude);
            }
        )*
    };
    ($($from:expr),*; $to:tt) => {
        $(
            check_round_trips!(@inner $from; $to);
        )*
    };
}

#[test]
fn round_trip_between_all_built_in_units() {
    check_round_trips!(
        Day, Hour, Minute, Second, Millisecond, Microsecond, Nanosecond;
        (Day, Hour, Minute, Second, Millisecond, Microsecond, Nanosecond)
    );
}

#[test]
fn round_trip_through_custom_unit() {
    for magnitude in [0.0, 1.0, 3.5, 336.0] {
        assert_close(round_trip(magnitude, Hour, Week), magnitude);
        assert_close(round_trip(magnitude, Week, Nanosecond), magnitude);
    }
}

#[test]
fn time_comparisons_work_as_expected() {
    assert!(5.minutes() > 120.seconds());
    assert!(2.days() < 48.5.hours());
    assert!(1000.microseconds() > 2000.nanoseconds());
    assert!(60.seconds() == 60000.milliseconds());
}

#[test]
fn time_conversions_work_as_expected() {
    let twenty_four_hours = 24.hours();

    let value_in_days = twenty_four_hours
        .in_seconds()
        .in_minutes()
        .in_nanoseconds()
        .in_microseconds()
        .in_hours()
        .in_milliseconds()
        .in_days();

    assert_eq!(value_in_days.value(), 1.0);
}

#[test]
fn basic_time_operators_work_as_expected() {
    let sixty_secs = 60.seconds();

    let mut new_value = sixty_secs + 2.minutes();
    new_value -= 20.seconds();
    new_value += 10.seconds();

    assert_eq!(new_value, 170.seconds());
    assert_eq!(60.seconds() + 2.minutes() - 20.seconds() + 10.seconds(), 170.seconds());
}

#[test]
fn time_in_relation_works_as_expected() {
    assert!(60.minutes().is_within(&4.hours()));
    assert!(!2.days().is_within(&24.hours()));
    assert!(120.seconds().is_within(&2.minutes()));
}

#[test]
fn multiplication_and_division_work_as_expected() {
    let sixty_secs = 60.seconds();

    let multiplied = sixty_secs * 2;
    let divided = sixty_secs / 2;

    assert_eq!(multiplied, 120.seconds());
    assert_eq!(divided, 30.seconds());
}

#[test]
fn increment_and_decrement_work_as_expected() {
    let mut days = 2.days();

    days = days.increment();
    assert_eq!(days, 3.days());
    assert_eq!(days.in_seconds().value(), 259_200.0);

    days = days.decrement();
    assert_eq!(days, 2.days());
}

#[test]
fn custom_time_units_work_as_expected() {
    let two_weeks = 2.weeks();
    let fourteen_days = 14.days();

    assert!(two_weeks == fourteen_days);
    assert_eq!(336.hours().in_weeks(), two_weeks);
    assert_eq!(336.hours().in_weeks().value(), 2.0);
}

#[test]
fn custom_time_units_have_operator_parity() {
    assert_eq!(1.weeks() + 7.days(), 2.weeks());
    assert_eq!((1.weeks() + 7.days()).unit().name(), "week");
    assert_eq!(2.weeks() - 1.weeks(), 168.hours());
    assert_eq!(1.weeks() * 4, 28.days());
    assert_eq!(4.weeks() / 2, 14.days());
    assert_eq!(1.weeks().increment(), 2.weeks());
    assert!(1.weeks() > 6.days());
    assert!(1.weeks().contains(&7.days()));
    assert!(8.days().is_within(&2.weeks()));
    assert_eq!(1.weeks().in_hours().value(), 168.0);
}

#[test]
#[cfg(feature = "alloc")]
fn custom_time_units_display_and_parse() {
    assert_eq!(2.weeks().to_string(), "2 weeks");
    assert_eq!(1.weeks().to_string(), "1 week");
    assert_eq!("3 weeks".parse::<Interval<Week>>().unwrap(), 21.days());
}

#[test]
fn left_operand_unit_wins() {
    let a = 90.seconds() + 1.minutes();
    let b = 1.minutes() + 90.seconds();

    assert_eq!(a, b);
    assert_eq!(a.unit(), Second);
    assert_eq!(b.unit(), Minute);
    assert_eq!(a.value(), 150.0);
    assert_eq!(b.value(), 2.5);
}

#[test]
fn unit_tag_is_not_part_of_equality() {
    assert_eq!(1.days(), 24.hours());
    assert_eq!(1.hours(), 3_600_000.milliseconds());
    assert_ne!(1.days().unit().name(), 24.hours().unit().name());
}
