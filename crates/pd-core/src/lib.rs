//! # pd-core
//!
//! Core domain models and port interfaces for the pasteboard consent dialog.
//!
//! This crate contains pure logic without any platform dependencies: the
//! request context, the placement resolver, the presentation state machine
//! and the traits the platform layer implements.

pub mod config;
pub mod dialog;
pub mod geometry;
pub mod ids;
pub mod ports;
pub mod request;
pub mod stub;
pub mod window;

// Re-export commonly used types at the crate root
pub use config::DialogConfig;
pub use dialog::{DialogEvent, PresentationState, RotationAnimation, EVENT_VALUE};
pub use geometry::{DialogRect, DisplayInfo, GeometryError, GeometryPolicy};
pub use ids::{ContextId, WindowId};
pub use request::{RequestContext, Want, DEFAULT_LABEL};
pub use stub::ConnectionStub;
pub use window::{WindowConfig, WindowType};
