//! Assembles the extension ability from configuration and headless
//! platform adapters.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use pd_app::usecases::PresentationPorts;
use pd_app::{
    DialogExtensionAbility, DialogExtensionAbilityDeps, ResolveDialogGeometry,
    WindowLifecycleManager, WindowRegistry,
};
use pd_core::{ContextId, DialogConfig};
use pd_platform::{
    ChannelNativeHandler, HeadlessDisplay, HeadlessWindowToolkit, LoggingToast, NativeMessage,
    SystemClock, TokenAbilityContext,
};

pub const ABILITY_CONTEXT_ID: &str = "pasteboard-dialog-ability";

/// The wired ability plus the adapter ends the host observes.
pub struct HeadlessHost {
    pub ability: DialogExtensionAbility,
    pub toolkit: HeadlessWindowToolkit,
    pub toast: Arc<LoggingToast>,
    pub context: TokenAbilityContext,
    pub native_rx: UnboundedReceiver<NativeMessage>,
}

pub fn wire_headless(config: DialogConfig, display: HeadlessDisplay) -> HeadlessHost {
    let config = Arc::new(config);
    let toolkit = HeadlessWindowToolkit::new();
    let toast = Arc::new(LoggingToast::new());
    let context = TokenAbilityContext::new(ContextId::from(ABILITY_CONTEXT_ID));
    let (native, native_rx) = ChannelNativeHandler::channel();

    let geometry = Arc::new(ResolveDialogGeometry::new(
        Arc::new(display),
        config.geometry(),
        config.display_query_timeout(),
    ));
    let lifecycle = Arc::new(WindowLifecycleManager::new(
        Arc::new(toolkit.clone()),
        Arc::new(context.clone()),
        Arc::new(WindowRegistry::new()),
        PresentationPorts {
            native: Arc::new(native),
            toast: toast.clone(),
        },
        config.clone(),
    ));

    let ability = DialogExtensionAbility::from_deps(DialogExtensionAbilityDeps {
        config,
        geometry,
        lifecycle,
        clock: Arc::new(SystemClock),
        context: Arc::new(context.clone()),
    });

    HeadlessHost {
        ability,
        toolkit,
        toast,
        context,
        native_rx,
    }
}
