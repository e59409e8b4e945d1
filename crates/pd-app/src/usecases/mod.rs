pub mod ability;
pub mod presentation;
pub mod request_context;
pub mod resolve_geometry;
pub mod window_lifecycle;
pub mod window_registry;

pub use ability::{ConnectOutcome, DialogExtensionAbility, DialogExtensionAbilityDeps};
pub use presentation::{DialogPresentationController, PresentationPorts, ZombieGuard};
pub use request_context::RequestContextStore;
pub use resolve_geometry::{ResolveDialogGeometry, ResolveGeometryError};
pub use window_lifecycle::{CreateOutcome, WindowLifecycleManager};
pub use window_registry::{RequestTicket, WindowHandle, WindowRegistry};
