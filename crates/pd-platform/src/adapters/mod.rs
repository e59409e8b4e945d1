mod ability_context;
mod clock;
mod display;
mod native_handler;
mod toast;
mod toolkit;

pub use ability_context::TokenAbilityContext;
pub use clock::SystemClock;
pub use display::HeadlessDisplay;
pub use native_handler::{ChannelNativeHandler, NativeMessage};
pub use toast::LoggingToast;
pub use toolkit::{HeadlessWindowToolkit, ToolkitFaults, WindowSnapshot};
