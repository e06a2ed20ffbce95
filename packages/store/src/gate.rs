//! The mutual-exclusion gate.
//!
//! A counting permit primitive, initialized to one permit for binary
//! (mutex-like) use. `acquire` blocks until a permit is free and returns an
//! RAII pass; dropping the pass returns the permit, on every exit path
//! including panics.

use parking_lot::{Condvar, Mutex};

/// A counting permit gate limiting concurrent critical-section entry.
///
/// Not reentrant: a thread that already holds a pass must not call
/// `acquire` again, or it deadlocks against itself. This is a contract on
/// callers, not something the gate detects.
pub struct Gate {
    permits: Mutex<usize>,
    available: Condvar,
}

impl Gate {
    /// Create a gate with the given number of permits.
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            available: Condvar::new(),
        }
    }

    /// Create a binary gate: one permit, one holder at a time.
    pub fn binary() -> Self {
        Self::new(1)
    }

    /// Block until a permit is free, then take it.
    ///
    /// The permit is returned when the `GatePass` drops.
    pub fn acquire(&self) -> GatePass<'_> {
        let mut permits = self.permits.lock();
        while *permits == 0 {
            self.available.wait(&mut permits);
        }
        *permits -= 1;
        GatePass { gate: self }
    }

    /// Take a permit without blocking, if one is free.
    pub fn try_acquire(&self) -> Option<GatePass<'_>> {
        let mut permits = self.permits.lock();
        if *permits == 0 {
            return None;
        }
        *permits -= 1;
        Some(GatePass { gate: self })
    }

    fn release(&self) {
        let mut permits = self.permits.lock();
        *permits += 1;
        self.available.notify_one();
    }
}

/// An acquired permit. Dropping it releases the gate.
#[must_use = "the gate is released as soon as the pass is dropped"]
pub struct GatePass<'a> {
    gate: &'a Gate,
}

impl Drop for GatePass<'_> {
    fn drop(&mut self) {
        self.gate.release();
    }
}
