//! In-window dialog presentation: events exchanged with the native caller,
//! the busy indicator animation and the presentation state machine.

pub mod action;
pub mod animation;
pub mod event;
pub mod state;
pub mod state_machine;

pub use action::{PresentationAction, ToastKind};
pub use animation::{Easing, Iterations, RotationAnimation};
pub use event::{DialogEvent, PresentationEvent, EVENT_VALUE};
pub use state::PresentationState;
pub use state_machine::PresentationStateMachine;
