//! Capability classifier - labels a device's motion model
//!
//! A device is `Relative` when it declares relative motion on both the
//! horizontal and vertical axes (standard mice), `Absolute` when it
//! declares absolute positions on both axes (touch digitizers), and
//! `Unsupported` otherwise. Relative wins when a device declares both.

use crate::backend::CapabilitySet;

/// Motion model of a successfully classified device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionModel {
    Relative,
    Absolute,
}

/// Outcome of inspecting a device's declared capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Relative,
    Absolute,
    Unsupported,
}

impl Classification {
    /// The motion model for a supported device, `None` for `Unsupported`.
    pub fn motion_model(self) -> Option<MotionModel> {
        match self {
            Classification::Relative => Some(MotionModel::Relative),
            Classification::Absolute => Some(MotionModel::Absolute),
            Classification::Unsupported => None,
        }
    }
}

/// Classify a device from its declared capabilities.
///
/// Relative is checked before absolute, so a device declaring both
/// capability sets is treated as a relative mouse.
pub fn classify(caps: &CapabilitySet) -> Classification {
    if caps.rel_x && caps.rel_y {
        Classification::Relative
    } else if caps.abs_x && caps.abs_y {
        Classification::Absolute
    } else {
        Classification::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(rel_x: bool, rel_y: bool, abs_x: bool, abs_y: bool) -> CapabilitySet {
        CapabilitySet {
            rel_x,
            rel_y,
            abs_x,
            abs_y,
        }
    }

    #[test]
    fn relative_needs_both_axes() {
        assert_eq!(classify(&caps(true, true, false, false)), Classification::Relative);
        assert_eq!(classify(&caps(true, false, false, false)), Classification::Unsupported);
        assert_eq!(classify(&caps(false, true, false, false)), Classification::Unsupported);
    }

    #[test]
    fn absolute_needs_both_axes() {
        assert_eq!(classify(&caps(false, false, true, true)), Classification::Absolute);
        assert_eq!(classify(&caps(false, false, true, false)), Classification::Unsupported);
    }

    #[test]
    fn relative_takes_precedence_over_absolute() {
        assert_eq!(classify(&caps(true, true, true, true)), Classification::Relative);
    }

    #[test]
    fn empty_capabilities_are_unsupported() {
        assert_eq!(classify(&CapabilitySet::default()), Classification::Unsupported);
        assert_eq!(Classification::Unsupported.motion_model(), None);
    }

    #[test]
    fn partial_relative_falls_back_to_absolute() {
        // A digitizer with a stray REL_X still classifies as absolute
        assert_eq!(classify(&caps(true, false, true, true)), Classification::Absolute);
    }
}
