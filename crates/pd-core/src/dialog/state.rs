use serde::{Deserialize, Serialize};

/// Lifecycle of the content inside one overlay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationState {
    /// Content bound, window not yet visible.
    Loaded,
    /// Visible and waiting for the user's decision.
    Shown,
    /// User cancelled; the zombie guard is armed.
    Cancelling,
    /// The guard fired before the host tore the window down.
    Zombie,
    /// The window and its content are gone.
    Destroyed,
}

