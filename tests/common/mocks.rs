#![allow(dead_code)]
// tests/common/mocks.rs
//! Mock comparators.

use std::{
    cmp::Ordering,
    sync::{Arc, Mutex},
};

use closed_interval::{Comparator, NaturalOrder};

// ============================================================================
// RecordingComparer
// ============================================================================

/// Delegates to an inner comparator and records every call it receives.
pub struct RecordingComparer<C = NaturalOrder> {
    inner: C,
    calls: Arc<Mutex<Vec<(i32, i32)>>>,
}

impl RecordingComparer {
    pub fn natural() -> Self {
        Self::wrapping(NaturalOrder)
    }
}

impl<C> RecordingComparer<C> {
    pub fn wrapping(inner: C) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(i32, i32)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<C: Comparator<i32>> Comparator<i32> for RecordingComparer<C> {
    fn compare(&self, a: &i32, b: &i32) -> Ordering {
        self.calls.lock().unwrap().push((*a, *b));
        self.inner.compare(a, b)
    }
}
