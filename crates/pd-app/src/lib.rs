//! Pasteboard dialog application layer
//!
//! Use cases driving the consent dialog: geometry resolution, the single
//! overlay window's lifecycle, the in-window presentation and the host-facing
//! extension ability.

pub mod usecases;

pub use usecases::{
    ConnectOutcome, CreateOutcome, DialogExtensionAbility, DialogExtensionAbilityDeps,
    DialogPresentationController, RequestContextStore, ResolveDialogGeometry, WindowHandle,
    WindowLifecycleManager, WindowRegistry,
};
