//! Binding orchestrator
//!
//! Resolves requested device names and paths into classified devices,
//! allocates one virtual gamepad per device, then runs one translation
//! worker thread per binding until every worker has terminated. The
//! binding set is fixed once the workers start; workers share nothing
//! but the stop token.

use crate::backend::{evdev_source, Axis, EvdevSource, UinputGamepad};
use crate::mapping::classify::classify;
use crate::mapping::coords::AxisRange;
use crate::mapping::translator::{AxisRanges, DeviceDescriptor, Translator};
use crate::mapping::MotionModel;
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("No device names or paths were requested")]
    NothingRequested,

    #[error("No requested device could be bound")]
    EmptyBindingSet,

    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// One requested device, classified and opened, ready to be bound.
pub struct ResolvedInput {
    pub descriptor: DeviceDescriptor,
    pub ranges: AxisRanges,
    source: EvdevSource,
}

/// Resolve the requested names and paths into classified devices.
///
/// Requests that cannot be resolved or classified are reported and
/// dropped; only a wholly empty outcome is an error. The same physical
/// device requested twice (by name and by path, say) is bound once.
pub fn resolve(
    names: &[String],
    paths: &[PathBuf],
    sensitivity: i32,
) -> Result<Vec<ResolvedInput>, BindError> {
    if names.is_empty() && paths.is_empty() {
        return Err(BindError::NothingRequested);
    }

    let mut resolved: Vec<ResolvedInput> = Vec::new();

    for name in names {
        debug!("Resolving device name: '{}'", name);
        match evdev_source::find_by_name(name) {
            Some(source) => {
                if let Some(input) = classify_source(source, sensitivity) {
                    push_unique(&mut resolved, input);
                }
            }
            None => error!("No input device matches name '{}'", name),
        }
    }

    for path in paths {
        debug!("Resolving device path: {}", path.display());
        match EvdevSource::open(path) {
            Ok(source) => {
                if let Some(input) = classify_source(source, sensitivity) {
                    push_unique(&mut resolved, input);
                }
            }
            Err(e) => error!("Failed to open device {}: {}", path.display(), e),
        }
    }

    if resolved.is_empty() {
        return Err(BindError::EmptyBindingSet);
    }

    Ok(resolved)
}

/// Classify an opened device; `None` (with a warning) when it matches
/// neither motion model.
fn classify_source(source: EvdevSource, sensitivity: i32) -> Option<ResolvedInput> {
    let name = source.name();
    let caps = source.capabilities();

    let Some(motion_mode) = classify(&caps).motion_model() else {
        warn!(
            "Device '{}' ({}) is not recognized as a mouse, skipping",
            name,
            source.path().display()
        );
        return None;
    };

    let ranges = match motion_mode {
        MotionModel::Absolute => AxisRanges {
            x: validated_range(&source, Axis::X, &name),
            y: validated_range(&source, Axis::Y, &name),
        },
        MotionModel::Relative => AxisRanges::default(),
    };

    Some(ResolvedInput {
        descriptor: DeviceDescriptor {
            name,
            path: source.path().to_path_buf(),
            motion_mode,
            sensitivity,
        },
        ranges,
        source,
    })
}

fn validated_range(source: &EvdevSource, axis: Axis, name: &str) -> Option<AxisRange> {
    match source.abs_range(axis) {
        Some((min, max)) => {
            let range = AxisRange::new(min, max);
            if range.is_none() {
                warn!(
                    "'{}': degenerate {:?} range [{}, {}], skipping that axis",
                    name, axis, min, max
                );
            }
            range
        }
        None => {
            warn!("'{}': no reported {:?} range, skipping that axis", name, axis);
            None
        }
    }
}

fn push_unique(resolved: &mut Vec<ResolvedInput>, input: ResolvedInput) {
    if resolved
        .iter()
        .any(|r| r.descriptor.path == input.descriptor.path)
    {
        debug!(
            "Device {} already bound, skipping duplicate request",
            input.descriptor.path.display()
        );
        return;
    }

    info!(
        "Resolved '{}' ({}) as {:?}",
        input.descriptor.name,
        input.descriptor.path.display(),
        input.descriptor.motion_mode
    );
    resolved.push(input);
}

/// Owns the stop token and the worker lifecycle.
pub struct BindingManager {
    stop: Arc<AtomicBool>,
}

impl BindingManager {
    pub fn new() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared stop token; raise it (e.g. from a Ctrl-C handler) to ask
    /// the workers to wind down after their next event.
    pub fn stop_signal(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Create one virtual gamepad per resolved device, start one worker
    /// per binding, and block until every worker has terminated.
    pub fn run(&self, inputs: Vec<ResolvedInput>) -> Result<(), BindError> {
        let mut workers = Vec::new();

        for (index, input) in inputs.into_iter().enumerate() {
            let pad_name = format!("Mouse gamepad {index}");
            let pad = match UinputGamepad::create(&pad_name) {
                Ok(pad) => pad,
                Err(e) => {
                    error!(
                        "Failed to create virtual gamepad for '{}': {}",
                        input.descriptor.name, e
                    );
                    continue;
                }
            };

            info!("Mapping device '{}' to '{}'", input.descriptor.name, pad_name);

            let device_name = input.descriptor.name.clone();
            let translator = Translator::new(input.descriptor, input.ranges, input.source, pad);
            let stop = Arc::clone(&self.stop);

            let handle = thread::Builder::new()
                .name(format!("translator-{index}"))
                .spawn(move || {
                    // Read failures are logged at worker granularity and
                    // must not take sibling workers down
                    let _ = translator.run(stop);
                })?;

            workers.push((device_name, handle));
        }

        if workers.is_empty() {
            return Err(BindError::EmptyBindingSet);
        }

        for (device_name, handle) in workers {
            if handle.join().is_err() {
                error!("Worker for '{}' panicked", device_name);
            }
        }

        info!("All translation workers terminated");
        Ok(())
    }
}

impl Default for BindingManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_is_a_configuration_error() {
        let result = resolve(&[], &[], 100);
        assert!(matches!(result, Err(BindError::NothingRequested)));
    }
}
