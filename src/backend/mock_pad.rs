//! Mock gamepad for testing.
//!
//! Records every committed frame instead of writing to uinput, so tests
//! can assert on emission order and on commit boundaries. Clones share
//! the same recording.

use crate::backend::{BackendError, Gamepad, PadEvent};
use log::info;
use std::sync::{Arc, Mutex};

/// Frame-recording gamepad.
#[derive(Clone, Default)]
pub struct MockGamepad {
    frames: Arc<Mutex<Vec<Vec<PadEvent>>>>,
}

impl MockGamepad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame committed so far, in order. Empty frames are bare
    /// commits.
    pub fn frames(&self) -> Vec<Vec<PadEvent>> {
        self.frames.lock().unwrap().clone()
    }
}

impl Gamepad for MockGamepad {
    fn emit_frame(&mut self, events: &[PadEvent]) -> Result<(), BackendError> {
        info!("[MOCK PAD] frame: {:?}", events);
        self.frames.lock().unwrap().push(events.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Axis, PadEvent};

    #[test]
    fn records_frames_in_order() {
        let mut pad = MockGamepad::new();
        let observer = pad.clone();

        pad.emit_frame(&[PadEvent::Axis {
            axis: Axis::X,
            value: 100,
        }])
        .unwrap();
        pad.emit_frame(&[]).unwrap();

        let frames = observer.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(
            frames[0],
            vec![PadEvent::Axis {
                axis: Axis::X,
                value: 100
            }]
        );
        assert!(frames[1].is_empty());
    }
}
