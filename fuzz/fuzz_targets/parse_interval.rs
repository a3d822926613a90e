#![cfg_attr(fuzzing, no_main)]
#![cfg_attr(not(fuzzing), allow(unused))]

use libfuzzer_sys::fuzz_target;
use time_interval::{Interval, Minute, Second};

#[cfg(not(fuzzing))]
fn main() {}

fn do_test(data: &[u8]) {
    let data_str = String::from_utf8_lossy(data);

    let seconds = match data_str.parse::<Interval<Second>>() {
        Ok(i) => i,
        Err(_) => return,
    };
    // Beyond the i64 range whole magnitudes are rendered saturated.
    if seconds.value().is_finite() && seconds.value().abs() < 9.0e18 {
        let roundtrip = seconds.to_string().parse::<Interval<Second>>().unwrap();
        assert_eq!(roundtrip.value(), seconds.value());
    }

    let _ = data_str.parse::<Interval<Minute>>();
}

fuzz_target!(|data| {
    do_test(data);
});
