//! mouse2joy: mouse to virtual gamepad bridge
//!
//! This library remaps physical pointing devices (mice, touchpads,
//! absolute digitizers) into synthetic gamepads backed by uinput, one
//! independent translation worker per bound device.

pub mod backend;
pub mod manager;
pub mod mapping;

// Re-export commonly used items
pub use backend::{EventSource, Gamepad, MockGamepad, MockSource};
pub use manager::{resolve, BindError, BindingManager, ResolvedInput};
pub use mapping::{classify, Classification, DeviceDescriptor, MotionModel, Translator};
