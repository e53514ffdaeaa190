#![allow(dead_code)]
// tests/common/fixtures.rs
//! Interval fixtures.

use closed_interval::{ClosedInterval, NaturalOrder, Reversed};

pub fn zero_to_ten() -> ClosedInterval<i32> {
    ClosedInterval::new(0, 10)
}

pub fn five_to_ten() -> ClosedInterval<i32> {
    ClosedInterval::new(5, 10)
}

pub fn reversed_order() -> Reversed<NaturalOrder> {
    NaturalOrder.reversed()
}
