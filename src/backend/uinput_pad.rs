//! uinput-backed virtual gamepad
//!
//! Creates a synthetic gamepad with two absolute axes and three buttons,
//! and writes each translated frame as one atomic batch. The evdev crate
//! appends the SYN_REPORT commit to every `emit` call, so a frame is
//! visible to consumers all at once.

use crate::backend::{Axis, BackendError, Gamepad, PadButton, PadEvent, AXIS_MAX, AXIS_MIN};
use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AbsInfo, AbsoluteAxisType, AttributeSet, EventType, InputEvent, Key, UinputAbsSetup};
use log::debug;

fn axis_code(axis: Axis) -> AbsoluteAxisType {
    match axis {
        Axis::X => AbsoluteAxisType::ABS_X,
        Axis::Y => AbsoluteAxisType::ABS_Y,
    }
}

// Linux gamepad codes: BTN_SOUTH is BTN_A, BTN_EAST is BTN_B,
// BTN_NORTH is BTN_X.
fn button_code(button: PadButton) -> Key {
    match button {
        PadButton::A => Key::BTN_SOUTH,
        PadButton::B => Key::BTN_EAST,
        PadButton::X => Key::BTN_NORTH,
    }
}

/// A uinput device the rest of the system sees as a real gamepad.
pub struct UinputGamepad {
    name: String,
    device: VirtualDevice,
}

impl UinputGamepad {
    /// Create a virtual gamepad with the fixed axis range and the three
    /// mapped buttons.
    pub fn create(name: &str) -> Result<Self, BackendError> {
        let abs_info = AbsInfo::new(0, AXIS_MIN, AXIS_MAX, 0, 0, 0);

        let mut buttons = AttributeSet::<Key>::new();
        buttons.insert(Key::BTN_SOUTH);
        buttons.insert(Key::BTN_EAST);
        buttons.insert(Key::BTN_NORTH);

        let device = VirtualDeviceBuilder::new()
            .map_err(BackendError::Create)?
            .name(name)
            .with_absolute_axis(&UinputAbsSetup::new(AbsoluteAxisType::ABS_X, abs_info))
            .map_err(BackendError::Create)?
            .with_absolute_axis(&UinputAbsSetup::new(AbsoluteAxisType::ABS_Y, abs_info))
            .map_err(BackendError::Create)?
            .with_keys(&buttons)
            .map_err(BackendError::Create)?
            .build()
            .map_err(BackendError::Create)?;

        Ok(Self {
            name: name.to_string(),
            device,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Gamepad for UinputGamepad {
    fn emit_frame(&mut self, events: &[PadEvent]) -> Result<(), BackendError> {
        let batch: Vec<InputEvent> = events
            .iter()
            .map(|event| match *event {
                PadEvent::Axis { axis, value } => {
                    InputEvent::new(EventType::ABSOLUTE, axis_code(axis).0, value)
                }
                PadEvent::Button { button, value } => {
                    InputEvent::new(EventType::KEY, button_code(button).code(), value)
                }
            })
            .collect();

        debug!("'{}': frame {:?}", self.name, events);
        // An empty batch still writes the SYN_REPORT commit
        self.device.emit(&batch).map_err(BackendError::Emit)
    }
}
