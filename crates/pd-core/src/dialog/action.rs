use super::event::DialogEvent;

/// Localized toast messages the dialog can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Cancelled,
    Zombie,
}

/// Side effects requested by a presentation transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationAction {
    NotifyNative { event: DialogEvent },
    StartBusyIndicator,
    ShowToast(ToastKind),
    ArmZombieGuard,
    DisarmZombieGuard,
    ReportZombie,
}
