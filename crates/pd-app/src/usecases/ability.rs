//! Host-facing entry points of the dialog extension.
//!
//! The host runtime instantiates [`DialogExtensionAbility`] and drives it
//! through the `on_*` callbacks. Connecting returns a [`ConnectionStub`]
//! right away; the window is built in a background task.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{error, info, warn, Instrument};

use pd_core::ports::{AbilityContextPort, ClockPort};
use pd_core::window::window_name;
use pd_core::{ConnectionStub, DialogConfig, RequestContext, Want};

use super::request_context::RequestContextStore;
use super::resolve_geometry::{ResolveDialogGeometry, ResolveGeometryError};
use super::window_lifecycle::{CreateOutcome, WindowLifecycleManager};
use super::window_registry::{RequestTicket, WindowRegistry};

/// How a connect request ended.
#[derive(Debug)]
pub enum ConnectOutcome {
    Window(CreateOutcome),
    /// The display could not be measured; no window was attempted.
    GeometryUnavailable(ResolveGeometryError),
}

impl ConnectOutcome {
    pub fn is_shown(&self) -> bool {
        matches!(self, ConnectOutcome::Window(outcome) if outcome.is_shown())
    }
}

pub struct DialogExtensionAbilityDeps {
    pub config: Arc<DialogConfig>,
    pub geometry: Arc<ResolveDialogGeometry>,
    pub lifecycle: Arc<WindowLifecycleManager>,
    pub clock: Arc<dyn ClockPort>,
    pub context: Arc<dyn AbilityContextPort>,
}

pub struct DialogExtensionAbility {
    config: Arc<DialogConfig>,
    requests: Arc<RequestContextStore>,
    geometry: Arc<ResolveDialogGeometry>,
    lifecycle: Arc<WindowLifecycleManager>,
    clock: Arc<dyn ClockPort>,
    context: Arc<dyn AbilityContextPort>,
    pending: Mutex<Vec<JoinHandle<ConnectOutcome>>>,
}

impl DialogExtensionAbility {
    pub fn from_deps(deps: DialogExtensionAbilityDeps) -> Self {
        let DialogExtensionAbilityDeps {
            config,
            geometry,
            lifecycle,
            clock,
            context,
        } = deps;

        Self {
            config,
            requests: Arc::new(RequestContextStore::new()),
            geometry,
            lifecycle,
            clock,
            context,
            pending: Mutex::new(Vec::new()),
        }
    }

    pub fn registry(&self) -> &Arc<WindowRegistry> {
        self.lifecycle.registry()
    }

    pub fn current_request(&self) -> RequestContext {
        self.requests.current()
    }

    pub fn on_create(&self, want: &Want) {
        info!(
            context_id = %self.context.context_id(),
            parameters = want.parameters.len(),
            "onCreate"
        );
    }

    /// Record the request, start building its window and hand back a stub
    /// without waiting for the window.
    pub fn on_connect(&self, want: &Want) -> ConnectionStub {
        let request = RequestContext::from_want(want);
        info!(app_name = %request.app_name, device_type = %request.device_type, "onConnect");
        self.requests.replace(request.clone());
        let ticket = self.registry().issue_ticket();

        match Handle::try_current() {
            Ok(runtime) => {
                let task = runtime.spawn(
                    Self::present(
                        self.geometry.clone(),
                        self.lifecycle.clone(),
                        window_name(&self.config.window.name_prefix, self.clock.now_ms()),
                        ticket,
                        request,
                    )
                    .in_current_span(),
                );
                let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
                pending.retain(|task| !task.is_finished());
                pending.push(task);
            }
            Err(err) => {
                error!(error = %err, "no async runtime available, dialog window not created");
            }
        }

        ConnectionStub::new(self.config.dialog.stub_descriptor.clone())
    }

    pub fn on_request(&self, want: &Want, start_id: u32) {
        info!(start_id, "onRequest");
        let _stub = self.on_connect(want);
    }

    pub async fn on_disconnect(&self) {
        info!("onDisconnect");
        self.on_destroy().await;
    }

    pub async fn on_destroy(&self) {
        info!("onDestroy");
        self.lifecycle.destroy().await;
    }

    /// Route a user cancel to the live dialog. Returns `false` when no
    /// dialog has started its presentation.
    pub async fn cancel_current(&self) -> bool {
        let presentation = self
            .registry()
            .current()
            .await
            .and_then(|handle| handle.presentation().cloned());
        match presentation {
            Some(presentation) => {
                presentation.on_cancel().await;
                true
            }
            None => {
                warn!("cancel requested with no dialog on screen");
                false
            }
        }
    }

    /// Wait for every connect issued so far to finish building its window.
    pub async fn wait_idle(&self) -> Vec<ConnectOutcome> {
        let tasks: Vec<_> = {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            pending.drain(..).collect()
        };

        let mut outcomes = Vec::with_capacity(tasks.len());
        for task in tasks {
            match task.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(err) => error!(error = %err, "dialog creation task failed"),
            }
        }
        outcomes
    }

    async fn present(
        geometry: Arc<ResolveDialogGeometry>,
        lifecycle: Arc<WindowLifecycleManager>,
        name: String,
        ticket: RequestTicket,
        request: RequestContext,
    ) -> ConnectOutcome {
        let rect = match geometry.execute().await {
            Ok(rect) => rect,
            Err(err) => {
                warn!(error = %err, "getDefaultDisplay failed, dialog not shown");
                return ConnectOutcome::GeometryUnavailable(err);
            }
        };

        ConnectOutcome::Window(
            lifecycle
                .create_float_window(ticket, name, rect, request)
                .await,
        )
    }
}
