#![no_main]

use std::str::{self, FromStr};
use libfuzzer_sys::fuzz_target;
use rpki_resources::{AsBlocks, Ipv4Blocks, Ipv6Blocks};

fn check<T>(s: &str)
where T: FromStr + ToString + PartialEq + std::fmt::Debug {
    if let Ok(set) = T::from_str(s) {
        let canonical = set.to_string();
        match T::from_str(&canonical) {
            Ok(reparsed) => assert_eq!(set, reparsed),
            Err(_) => panic!("canonical form '{}' rejected", canonical),
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let (which, data) = match data.split_first() {
        Some((first, data)) => (*first, data),
        None => return,
    };
    let s = match str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    match which % 3 {
        0 => check::<AsBlocks>(s),
        1 => check::<Ipv4Blocks>(s),
        2 => check::<Ipv6Blocks>(s),
        _ => panic!("what?"),
    }
});
