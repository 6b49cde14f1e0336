//! Mapping module - classifies devices and converts raw motion into
//! gamepad axis/button events

pub mod classify;
pub mod coords;
pub mod translator;

pub use classify::{classify, Classification, MotionModel};
pub use coords::{accumulate, rescale, AxisRange, AXIS_MAX, AXIS_MIN};
pub use translator::{pad_button_for, AxisRanges, DeviceDescriptor, Translator};
