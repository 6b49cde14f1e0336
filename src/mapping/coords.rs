//! Coordinate mapping - pure transforms from raw motion to gamepad axes
//!
//! Two stateless algorithms: a linear rescale for absolute devices and a
//! clamped accumulation for relative devices. Both target the fixed
//! logical axis range of the virtual gamepad.

pub use crate::backend::{AXIS_MAX, AXIS_MIN};

/// An absolute axis range as reported by a physical device.
///
/// Construction enforces `min < max`, so a degenerate range can never
/// reach the rescale math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    min: i32,
    max: i32,
}

impl AxisRange {
    /// Create a range, rejecting degenerate (zero or negative width) input.
    pub fn new(min: i32, max: i32) -> Option<Self> {
        if min < max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

/// Linearly rescale an absolute position into the gamepad axis range.
///
/// `source.min` maps exactly to [`AXIS_MIN`] and `source.max` exactly to
/// [`AXIS_MAX`]. Raw values outside the reported range are clamped.
pub fn rescale(value: i32, source: AxisRange) -> i32 {
    let span_in = source.max as i64 - source.min as i64;
    let span_out = (AXIS_MAX - AXIS_MIN) as f64;

    let offset = (value as i64 - source.min as i64) as f64;
    let mapped = (offset / span_in as f64 * span_out + AXIS_MIN as f64).round() as i32;
    mapped.clamp(AXIS_MIN, AXIS_MAX)
}

/// Integrate a relative delta into an accumulator, clamped to the gamepad
/// axis range.
///
/// Once saturated at an extreme, further motion in the same direction has
/// no effect until motion reverses. Intermediate math is done in `i64` so
/// large deltas and sensitivities cannot overflow.
pub fn accumulate(prev: i32, delta: i32, sensitivity: i32) -> i32 {
    let next = prev as i64 + delta as i64 * sensitivity as i64;
    next.clamp(AXIS_MIN as i64, AXIS_MAX as i64) as i32
}
