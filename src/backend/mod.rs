//! Backend abstraction for physical input sources and virtual gamepads
//!
//! This module defines the seam between the translation core and the
//! operating system: a blocking stream of raw events coming in, and a
//! synthetic gamepad accepting atomic frames going out.

pub mod evdev_source;
pub mod mock_pad;
pub mod mock_source;
pub mod uinput_pad;

pub use evdev_source::{list_devices, EvdevSource};
pub use mock_pad::MockGamepad;
pub use mock_source::MockSource;
pub use uinput_pad::UinputGamepad;

use thiserror::Error;

/// Lower bound of the virtual gamepad axes.
pub const AXIS_MIN: i32 = -32768;

/// Upper bound of the virtual gamepad axes.
pub const AXIS_MAX: i32 = 32767;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to open input device: {0}")]
    Open(std::io::Error),

    #[error("Failed to read from input device: {0}")]
    Read(std::io::Error),

    #[error("Failed to create virtual gamepad: {0}")]
    Create(std::io::Error),

    #[error("Failed to emit to virtual gamepad: {0}")]
    Emit(std::io::Error),
}

/// Horizontal or vertical motion axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Physical mouse button recognized by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceButton {
    Left,
    Right,
    Middle,
}

/// Button exposed on the virtual gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    A,
    B,
    X,
}

/// One raw event read from a physical device.
///
/// Events the translator has no use for (scroll wheels, extra buttons,
/// misc event types) are surfaced as `Other` so the worker still commits
/// a frame for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEvent {
    /// Incremental motion from a relative device.
    Relative { axis: Axis, delta: i32 },
    /// Positioned motion from an absolute device.
    Absolute { axis: Axis, value: i32 },
    /// Button state change; `value` is the raw press value (0 = up,
    /// 1 = down, 2 = repeat) and is passed through unchanged.
    Button { button: SourceButton, value: i32 },
    /// Anything else the device reported.
    Other,
}

/// One emission destined for the virtual gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadEvent {
    Axis { axis: Axis, value: i32 },
    Button { button: PadButton, value: i32 },
}

/// Declared motion capabilities of a physical device, reduced to the
/// four axes the classifier cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    pub rel_x: bool,
    pub rel_y: bool,
    pub abs_x: bool,
    pub abs_y: bool,
}

/// Blocking sequence of raw events from one opened device.
///
/// The sequence is lazy, unbounded and not restartable: `Ok(None)` means
/// the device is gone for good.
pub trait EventSource {
    fn next_event(&mut self) -> Result<Option<SourceEvent>, BackendError>;
}

/// Virtual gamepad accepting one atomic frame at a time.
///
/// A frame is a batch of emissions followed by a sync commit; consumers
/// of the virtual device never observe a partially written frame. An
/// empty frame is a bare commit.
pub trait Gamepad {
    fn emit_frame(&mut self, events: &[PadEvent]) -> Result<(), BackendError>;
}
