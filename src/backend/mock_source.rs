//! Mock event source for testing.
//!
//! Plays back a scripted sequence of raw events instead of reading a
//! physical device. Useful for exercising the translator without any
//! hardware or elevated permissions.

use crate::backend::{BackendError, EventSource, SourceEvent};
use std::collections::VecDeque;

/// Scripted event source that ends (or faults) once the script runs out.
pub struct MockSource {
    events: VecDeque<SourceEvent>,
    fail_at_end: bool,
}

impl MockSource {
    /// A source that yields the script and then ends cleanly.
    pub fn new(events: Vec<SourceEvent>) -> Self {
        Self {
            events: events.into(),
            fail_at_end: false,
        }
    }

    /// A source that yields the script and then fails with a read error,
    /// like a device yanked mid-stream.
    pub fn failing(events: Vec<SourceEvent>) -> Self {
        Self {
            events: events.into(),
            fail_at_end: true,
        }
    }
}

impl EventSource for MockSource {
    fn next_event(&mut self) -> Result<Option<SourceEvent>, BackendError> {
        match self.events.pop_front() {
            Some(event) => Ok(Some(event)),
            None if self.fail_at_end => Err(BackendError::Read(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock device removed",
            ))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Axis, SourceEvent};

    #[test]
    fn plays_script_then_ends() {
        let mut source = MockSource::new(vec![SourceEvent::Relative {
            axis: Axis::X,
            delta: 1,
        }]);

        assert!(matches!(source.next_event(), Ok(Some(_))));
        assert!(matches!(source.next_event(), Ok(None)));
        // Not restartable
        assert!(matches!(source.next_event(), Ok(None)));
    }

    #[test]
    fn failing_source_faults_after_script() {
        let mut source = MockSource::failing(vec![SourceEvent::Other]);
        assert!(matches!(source.next_event(), Ok(Some(SourceEvent::Other))));
        assert!(source.next_event().is_err());
    }
}
