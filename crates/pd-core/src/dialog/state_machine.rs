#[cfg(feature = "tracing")]
use tracing::debug;

use super::action::{PresentationAction, ToastKind};
use super::event::{DialogEvent, PresentationEvent};
use super::state::PresentationState;

pub struct PresentationStateMachine;

impl PresentationStateMachine {
    pub fn transition(
        state: PresentationState,
        event: PresentationEvent,
    ) -> (PresentationState, Vec<PresentationAction>) {
        match (state, event) {
            (PresentationState::Loaded, PresentationEvent::Displayed) => (
                PresentationState::Shown,
                vec![
                    PresentationAction::NotifyNative {
                        event: DialogEvent::Init,
                    },
                    PresentationAction::StartBusyIndicator,
                ],
            ),

            (PresentationState::Shown, PresentationEvent::CancelRequested) => (
                PresentationState::Cancelling,
                vec![
                    PresentationAction::NotifyNative {
                        event: DialogEvent::Cancel,
                    },
                    PresentationAction::ShowToast(ToastKind::Cancelled),
                    PresentationAction::ArmZombieGuard,
                ],
            ),

            (PresentationState::Cancelling, PresentationEvent::ZombieTimerElapsed) => (
                PresentationState::Zombie,
                vec![
                    PresentationAction::ReportZombie,
                    PresentationAction::ShowToast(ToastKind::Zombie),
                ],
            ),

            (PresentationState::Destroyed, PresentationEvent::TornDown) => {
                (PresentationState::Destroyed, vec![])
            }
            (_, PresentationEvent::TornDown) => (
                PresentationState::Destroyed,
                vec![PresentationAction::DisarmZombieGuard],
            ),

            (state, _event) => {
                #[cfg(feature = "tracing")]
                debug!(?state, ?_event, "presentation event ignored");
                (state, vec![])
            }
        }
    }
}
