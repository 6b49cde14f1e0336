//! evdev-backed event source
//!
//! Wraps an opened `/dev/input/event*` device: exposes its declared
//! capabilities as a typed [`CapabilitySet`], its reported absolute axis
//! ranges, and a blocking converted event stream. Kernel SYN markers are
//! consumed by the evdev crate's sync handling and never surfaced.

use crate::backend::{Axis, BackendError, CapabilitySet, EventSource, SourceButton, SourceEvent};
use evdev::{AbsoluteAxisType, Device, InputEvent, InputEventKind, Key, RelativeAxisType};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Enumerate every readable input device as `(path, name)`.
pub fn list_devices() -> Vec<(PathBuf, String)> {
    evdev::enumerate()
        .map(|(path, device)| {
            let name = device.name().unwrap_or("Unknown").to_string();
            (path, name)
        })
        .collect()
}

/// Find and open the first device whose reported name matches exactly.
pub fn find_by_name(wanted: &str) -> Option<EvdevSource> {
    for (path, device) in evdev::enumerate() {
        if device.name() == Some(wanted) {
            return Some(EvdevSource::from_device(path, device));
        }
    }
    None
}

/// One opened physical input device.
pub struct EvdevSource {
    device: Device,
    path: PathBuf,
    pending: VecDeque<SourceEvent>,
}

impl EvdevSource {
    /// Open a device by path.
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        let device = Device::open(path).map_err(BackendError::Open)?;
        Ok(Self::from_device(path.to_path_buf(), device))
    }

    /// Wrap a device already opened during enumeration.
    pub fn from_device(path: PathBuf, device: Device) -> Self {
        Self {
            device,
            path,
            pending: VecDeque::new(),
        }
    }

    pub fn name(&self) -> String {
        self.device.name().unwrap_or("Unknown").to_string()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reduce the device's declared capabilities to the axes the
    /// classifier cares about.
    pub fn capabilities(&self) -> CapabilitySet {
        let rel = self.device.supported_relative_axes();
        let abs = self.device.supported_absolute_axes();

        CapabilitySet {
            rel_x: rel.map_or(false, |r| r.contains(RelativeAxisType::REL_X)),
            rel_y: rel.map_or(false, |r| r.contains(RelativeAxisType::REL_Y)),
            abs_x: abs.map_or(false, |a| a.contains(AbsoluteAxisType::ABS_X)),
            abs_y: abs.map_or(false, |a| a.contains(AbsoluteAxisType::ABS_Y)),
        }
    }

    /// The raw `(min, max)` the device reports for an absolute axis, if
    /// it reports the axis at all. The range is not validated here.
    pub fn abs_range(&self, axis: Axis) -> Option<(i32, i32)> {
        let wanted = match axis {
            Axis::X => AbsoluteAxisType::ABS_X,
            Axis::Y => AbsoluteAxisType::ABS_Y,
        };

        let state = self.device.get_abs_state().ok()?;
        let info = state.get(wanted.0 as usize)?;
        Some((info.minimum, info.maximum))
    }
}

impl EventSource for EvdevSource {
    fn next_event(&mut self) -> Result<Option<SourceEvent>, BackendError> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }

            // Blocks until the kernel has at least one event for us
            let events = self.device.fetch_events().map_err(BackendError::Read)?;
            for event in events {
                if let Some(converted) = convert(&event) {
                    self.pending.push_back(converted);
                }
            }
        }
    }
}

/// Convert a kernel event into the translator's vocabulary.
///
/// Returns `None` only for synchronization markers; everything else maps
/// to a [`SourceEvent`], falling back to `Other` for codes the translator
/// ignores.
fn convert(event: &InputEvent) -> Option<SourceEvent> {
    let converted = match event.kind() {
        InputEventKind::RelAxis(axis) => match axis {
            RelativeAxisType::REL_X => SourceEvent::Relative {
                axis: Axis::X,
                delta: event.value(),
            },
            RelativeAxisType::REL_Y => SourceEvent::Relative {
                axis: Axis::Y,
                delta: event.value(),
            },
            _ => SourceEvent::Other,
        },
        InputEventKind::AbsAxis(axis) => match axis {
            AbsoluteAxisType::ABS_X => SourceEvent::Absolute {
                axis: Axis::X,
                value: event.value(),
            },
            AbsoluteAxisType::ABS_Y => SourceEvent::Absolute {
                axis: Axis::Y,
                value: event.value(),
            },
            _ => SourceEvent::Other,
        },
        InputEventKind::Key(key) => match key {
            Key::BTN_LEFT => SourceEvent::Button {
                button: SourceButton::Left,
                value: event.value(),
            },
            Key::BTN_RIGHT => SourceEvent::Button {
                button: SourceButton::Right,
                value: event.value(),
            },
            Key::BTN_MIDDLE => SourceEvent::Button {
                button: SourceButton::Middle,
                value: event.value(),
            },
            _ => SourceEvent::Other,
        },
        InputEventKind::Synchronization(_) => return None,
        _ => SourceEvent::Other,
    };

    Some(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evdev::EventType;

    #[test]
    fn converts_motion_and_buttons() {
        let rel = InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_X.0, 3);
        assert_eq!(
            convert(&rel),
            Some(SourceEvent::Relative {
                axis: Axis::X,
                delta: 3
            })
        );

        let abs = InputEvent::new(EventType::ABSOLUTE, AbsoluteAxisType::ABS_Y.0, 512);
        assert_eq!(
            convert(&abs),
            Some(SourceEvent::Absolute {
                axis: Axis::Y,
                value: 512
            })
        );

        let btn = InputEvent::new(EventType::KEY, Key::BTN_LEFT.code(), 1);
        assert_eq!(
            convert(&btn),
            Some(SourceEvent::Button {
                button: SourceButton::Left,
                value: 1
            })
        );
    }

    #[test]
    fn unrecognized_codes_become_other() {
        let wheel = InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_WHEEL.0, 1);
        assert_eq!(convert(&wheel), Some(SourceEvent::Other));

        let side = InputEvent::new(EventType::KEY, Key::BTN_SIDE.code(), 1);
        assert_eq!(convert(&side), Some(SourceEvent::Other));
    }

    #[test]
    fn sync_markers_are_dropped() {
        let syn = InputEvent::new(EventType::SYNCHRONIZATION, 0, 0);
        assert_eq!(convert(&syn), None);
    }
}
