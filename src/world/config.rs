#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning knobs for a `Scene`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Emit a `trace!` line for every collision dispatched by `tick`.
    pub log_collisions: bool,
    /// Reject pairs whose bounding boxes are apart before running SAT.
    /// Never changes a verdict, only skips work.
    pub broad_phase: bool,
    /// Bodies to reserve room for up front.
    pub initial_capacity: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            log_collisions: false,
            broad_phase: true,
            initial_capacity: 16,
        }
    }
}
