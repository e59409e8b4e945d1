//! # pd-platform
//!
//! Platform-side implementations of the dialog ports.
//!
//! The headless toolkit keeps windows in memory and records what would have
//! been painted, which is what the host binary and the tests run against.

pub mod adapters;

pub use adapters::{
    ChannelNativeHandler, HeadlessDisplay, HeadlessWindowToolkit, LoggingToast, NativeMessage,
    SystemClock, TokenAbilityContext, ToolkitFaults, WindowSnapshot,
};
