mod controller;
mod zombie_guard;

pub use controller::{DialogPresentationController, PresentationPorts};
pub use zombie_guard::ZombieGuard;
