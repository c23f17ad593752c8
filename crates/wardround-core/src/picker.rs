//! Pluggable randomness source.
//!
//! All random selection in the crate goes through [`Picker`], a single
//! "pick one of N" operation. Production code uses [`RngPicker`]; tests
//! use [`ScriptedPicker`] to pin exact disorder and symptom choices.

use rand::Rng;

/// Source of uniform random indices.
pub trait Picker {
    /// Return an index uniformly distributed in `0..len`.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RngPicker;

impl Picker for RngPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic picker replaying a fixed index script (test support).
///
/// Each call consumes the next scripted value, reduced modulo `len`;
/// the script wraps around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedPicker {
    /// Create a picker that replays `script` in order.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "picker script must not be empty");
        Self { script, pos: 0 }
    }
}

impl Picker for ScriptedPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        value % len
    }
}
