#![cfg_attr(fuzzing, no_main)]
#![cfg_attr(not(fuzzing), allow(unused))]

use std::cmp::Ordering;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use time_interval::{Day, Interval, Millisecond, Nanosecond, Second};

#[cfg(not(fuzzing))]
fn main() {}

fn do_test(data: &[u8]) {
    let mut u = Unstructured::new(data);

    let (a, b) = match (Interval::<Day>::arbitrary(&mut u), Interval::<Nanosecond>::arbitrary(&mut u)) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return,
    };

    // Ordering and equality agree and are antisymmetric across units.
    let ord = a.compare(&b);
    assert_eq!(ord == Ordering::Equal, a == b);
    assert_eq!(b.compare(&a), ord.reverse());
    assert_eq!(a.contains(&b), a.in_canonical() >= b.in_canonical());

    // Arithmetic never panics and keeps the left unit.
    let _ = (a + b).unit();
    let _ = (b - a).unit();
    let _ = a.increment().decrement();
    let _ = a.long_value();
    let _ = a.to_string();

    if let Ok(scalar) = u.arbitrary::<f64>() {
        let _ = a * scalar;
        let _ = b / scalar;
    }

    let _: Interval<Second> = a.converted(Second);
    let _: Interval<Millisecond> = b.in_milliseconds();
}

fuzz_target!(|data| {
    do_test(data);
});
