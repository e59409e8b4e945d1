#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use pd_app::usecases::presentation::PresentationPorts;
use pd_app::{
    DialogExtensionAbility, DialogExtensionAbilityDeps, ResolveDialogGeometry,
    WindowLifecycleManager, WindowRegistry,
};
use pd_core::ports::ClockPort;
use pd_core::{ContextId, DialogConfig, DialogEvent, Want};
use pd_platform::{
    ChannelNativeHandler, HeadlessDisplay, HeadlessWindowToolkit, LoggingToast, NativeMessage,
    TokenAbilityContext,
};

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

pub struct Fixture {
    pub ability: DialogExtensionAbility,
    pub toolkit: HeadlessWindowToolkit,
    pub toast: Arc<LoggingToast>,
    pub context: TokenAbilityContext,
    pub native_rx: UnboundedReceiver<NativeMessage>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with(HeadlessDisplay::new(1080, 2340), DialogConfig::default())
    }

    pub fn with(display: HeadlessDisplay, config: DialogConfig) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();

        let config = Arc::new(config);
        let toolkit = HeadlessWindowToolkit::new();
        let toast = Arc::new(LoggingToast::new());
        let context = TokenAbilityContext::new(ContextId::from("pasteboard-dialog-ability"));
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
            clock: Arc::new(FixedClock(1_700_000_000_000)),
            context: Arc::new(context.clone()),
        });

        Self {
            ability,
            toolkit,
            toast,
            context,
            native_rx,
        }
    }

    /// Drain every native message delivered so far.
    pub fn native_events(&mut self) -> Vec<DialogEvent> {
        let mut events = Vec::new();
        while let Ok(message) = self.native_rx.try_recv() {
            assert_eq!(message.value, "value");
            events.push(message.event);
        }
        events
    }
}

pub fn want(app_name: &str, device_type: &str) -> Want {
    Want::new()
        .with_param("appName", app_name)
        .with_param("deviceType", device_type)
}

pub const ZOMBIE_DELAY: Duration = Duration::from_millis(5_000);
