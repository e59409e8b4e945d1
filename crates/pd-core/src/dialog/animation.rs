use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Iterations {
    Infinite,
}

/// Keyframed rotation played on the dialog's busy indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationAnimation {
    pub from_deg: f32,
    pub to_deg: f32,
    pub cycle: Duration,
    pub easing: Easing,
    pub iterations: Iterations,
}

impl RotationAnimation {
    pub const DEFAULT_CYCLE_MS: u64 = 800;

    /// Full turn per cycle, looping until the window goes away.
    pub fn spinner(cycle: Duration) -> Self {
        Self {
            from_deg: 0.0,
            to_deg: 360.0,
            cycle,
            easing: Easing::Linear,
            iterations: Iterations::Infinite,
        }
    }
}

impl Default for RotationAnimation {
    fn default() -> Self {
        Self::spinner(Duration::from_millis(Self::DEFAULT_CYCLE_MS))
    }
}
