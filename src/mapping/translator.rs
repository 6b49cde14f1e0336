//! Event translator - per-device worker turning raw events into frames
//!
//! One translator instance runs per binding. It owns its descriptor, its
//! relative accumulator and its gamepad handle exclusively; nothing is
//! shared with sibling workers, so no locking is involved.

use crate::backend::{Axis, BackendError, EventSource, Gamepad, PadButton, PadEvent, SourceButton, SourceEvent};
use crate::mapping::classify::MotionModel;
use crate::mapping::coords::{accumulate, rescale, AxisRange};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Immutable description of one bound physical device.
#[derive(Debug, Clone)]
pub struct DeviceDescriptor {
    pub name: String,
    pub path: PathBuf,
    pub motion_mode: MotionModel,
    pub sensitivity: i32,
}

/// Validated absolute ranges for the two axes of one device.
///
/// `None` means the device reported no usable range for that axis
/// (missing or degenerate); motion on that axis emits nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisRanges {
    pub x: Option<AxisRange>,
    pub y: Option<AxisRange>,
}

impl AxisRanges {
    fn get(&self, axis: Axis) -> Option<AxisRange> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Relative-mode accumulator, always clamped to the gamepad axis range.
#[derive(Debug, Clone, Copy, Default)]
struct WorkerState {
    x: i32,
    y: i32,
}

/// Map a physical mouse button onto its gamepad button.
pub fn pad_button_for(button: SourceButton) -> PadButton {
    match button {
        SourceButton::Left => PadButton::A,
        SourceButton::Right => PadButton::B,
        SourceButton::Middle => PadButton::X,
    }
}

/// Translates the raw event stream of one device into gamepad frames.
pub struct Translator<S, G>
where
    S: EventSource,
    G: Gamepad,
{
    descriptor: DeviceDescriptor,
    ranges: AxisRanges,
    source: S,
    pad: G,
    state: WorkerState,
}

impl<S, G> Translator<S, G>
where
    S: EventSource,
    G: Gamepad,
{
    pub fn new(descriptor: DeviceDescriptor, ranges: AxisRanges, source: S, pad: G) -> Self {
        Self {
            descriptor,
            ranges,
            source,
            pad,
            state: WorkerState::default(),
        }
    }

    /// Run the translation loop until the source ends, a read fails, or
    /// the stop token is raised.
    ///
    /// Every processed raw event is followed by a frame commit, even when
    /// it produced no emission, so consumers always see a consistent axis
    /// pair. The blocking read is the only suspension point; the stop
    /// token is checked between events.
    pub fn run(mut self, stop: Arc<AtomicBool>) -> Result<(), BackendError> {
        info!(
            "'{}': translating {:?} events from {}",
            self.descriptor.name,
            self.descriptor.motion_mode,
            self.descriptor.path.display()
        );

        while !stop.load(Ordering::SeqCst) {
            match self.source.next_event() {
                Ok(Some(event)) => {
                    let frame = self.translate(&event);
                    self.pad.emit_frame(&frame)?;
                }
                Ok(None) => {
                    info!("'{}': device stream ended", self.descriptor.name);
                    break;
                }
                Err(e) => {
                    warn!("'{}': read failed, terminating worker: {}", self.descriptor.name, e);
                    return Err(e);
                }
            }
        }

        info!("'{}': translator terminated", self.descriptor.name);
        Ok(())
    }

    /// Translate one raw event into the emissions of its frame.
    fn translate(&mut self, event: &SourceEvent) -> Vec<PadEvent> {
        match (self.descriptor.motion_mode, *event) {
            (MotionModel::Absolute, SourceEvent::Absolute { axis, value }) => {
                match self.ranges.get(axis) {
                    Some(range) => vec![PadEvent::Axis {
                        axis,
                        value: rescale(value, range),
                    }],
                    // Degenerate range was reported at bind time; skip the axis
                    None => Vec::new(),
                }
            }
            (MotionModel::Relative, SourceEvent::Relative { axis, delta }) => {
                let slot = match axis {
                    Axis::X => &mut self.state.x,
                    Axis::Y => &mut self.state.y,
                };
                *slot = accumulate(*slot, delta, self.descriptor.sensitivity);
                vec![PadEvent::Axis { axis, value: *slot }]
            }
            (_, SourceEvent::Button { button, value }) => vec![PadEvent::Button {
                button: pad_button_for(button),
                value,
            }],
            (_, other) => {
                debug!("'{}': ignoring event {:?}", self.descriptor.name, other);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_mapping_is_total() {
        assert_eq!(pad_button_for(SourceButton::Left), PadButton::A);
        assert_eq!(pad_button_for(SourceButton::Right), PadButton::B);
        assert_eq!(pad_button_for(SourceButton::Middle), PadButton::X);
    }
}
