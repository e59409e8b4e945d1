//! Port interfaces for the dialog controller
//!
//! Ports define the contract between the use cases and the platform that
//! actually queries displays, paints windows and talks to the native caller.
//! The host runtime supplies implementations; tests supply mocks.

pub mod ability_context;
mod clock;
pub mod display;
pub mod errors;
pub mod native_handler;
pub mod toast;
pub mod window;

pub use ability_context::AbilityContextPort;
pub use clock::*;
pub use display::DisplayPort;
pub use errors::{DisplayError, WindowError};
pub use native_handler::NativeHandlerPort;
pub use toast::ToastPort;
pub use window::{DialogViewPort, FloatWindowPort, WindowToolkitPort};
