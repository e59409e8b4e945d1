use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Fixed value payload sent with every native event.
pub const EVENT_VALUE: &str = "value";

/// Events the dialog page reports to its native caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogEvent {
    #[serde(rename = "EVENT_INIT")]
    Init,
    #[serde(rename = "EVENT_CANCEL")]
    Cancel,
}

impl DialogEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogEvent::Init => "EVENT_INIT",
            DialogEvent::Cancel => "EVENT_CANCEL",
        }
    }
}

impl Display for DialogEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs driving [`super::PresentationStateMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationEvent {
    /// The window became visible with the dialog content loaded.
    Displayed,
    /// The user dismissed the dialog.
    CancelRequested,
    /// The zombie guard armed on cancel has fired.
    ZombieTimerElapsed,
    /// The owning lifecycle manager destroyed the window.
    TornDown,
}
