//! # Window Lifecycle Manager
//!
//! Creates, binds, places, shows and destroys the single overlay window.
//!
//! Creation is a staged pipeline:
//!
//! 1. retire the current window, if any
//! 2. ask the toolkit for a float window
//! 3. record it in the registry
//! 4. load the dialog page into it
//! 5. move, resize, clear the background and show it
//! 6. attach and start the in-window presentation
//!
//! Each stage can fail; every failure ends in its own [`CreateOutcome`]
//! variant and nothing propagates to the host. Pipelines are serialized so
//! two overlapping requests never interleave their stages.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info, info_span, warn, Instrument};

use pd_core::ports::{
    AbilityContextPort, DialogViewPort, FloatWindowPort, WindowError, WindowToolkitPort,
};
use pd_core::{DialogConfig, DialogRect, RequestContext, WindowConfig, WindowId};

use super::presentation::{DialogPresentationController, PresentationPorts};
use super::window_registry::{RequestTicket, WindowHandle, WindowRegistry};

/// Terminal state of one creation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The window is visible and its presentation started.
    Shown { window_id: WindowId },
    /// A newer request (or a destroy) arrived before this one could start.
    Superseded,
    /// The toolkit refused to create a window. Nothing was recorded.
    CreationFailed { error: WindowError },
    /// The window exists but the dialog page failed to load. The handle stays
    /// recorded until the next supersede or destroy.
    BindFailed {
        window_id: WindowId,
        error: WindowError,
    },
    /// Content loaded but moving, resizing or showing failed. The handle
    /// stays recorded without a presentation.
    PlacementFailed {
        window_id: WindowId,
        error: WindowError,
    },
}

impl CreateOutcome {
    pub fn is_shown(&self) -> bool {
        matches!(self, CreateOutcome::Shown { .. })
    }
}

pub struct WindowLifecycleManager {
    toolkit: Arc<dyn WindowToolkitPort>,
    context: Arc<dyn AbilityContextPort>,
    registry: Arc<WindowRegistry>,
    presentation_ports: PresentationPorts,
    config: Arc<DialogConfig>,
    dispatch_lock: Mutex<()>,
}

impl WindowLifecycleManager {
    pub fn new(
        toolkit: Arc<dyn WindowToolkitPort>,
        context: Arc<dyn AbilityContextPort>,
        registry: Arc<WindowRegistry>,
        presentation_ports: PresentationPorts,
        config: Arc<DialogConfig>,
    ) -> Self {
        Self {
            toolkit,
            context,
            registry,
            presentation_ports,
            config,
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn registry(&self) -> &Arc<WindowRegistry> {
        &self.registry
    }

    pub async fn create_float_window(
        &self,
        ticket: RequestTicket,
        name: String,
        rect: DialogRect,
        request: RequestContext,
    ) -> CreateOutcome {
        let _dispatch_guard = self.dispatch_lock.lock().await;

        let span = info_span!(
            "usecase.window_lifecycle.create_float_window",
            window = %name,
            app_name = %request.app_name
        );
        async {
            if !self.registry.is_latest(ticket) {
                info!("newer request pending, skipping window creation");
                return CreateOutcome::Superseded;
            }

            if let Some(previous) = self.registry.take().await {
                info!(
                    previous = %previous.id(),
                    previous_name = previous.name(),
                    "destroying superseded window"
                );
                previous.tear_down().await;
            }

            info!("create window begin");
            let window = match self.create_window(&name).await {
                Ok(window) => window,
                Err(error) => {
                    error!(error = %error, "failed to create the window");
                    return CreateOutcome::CreationFailed { error };
                }
            };
            let window_id = window.id();

            let handle = WindowHandle::new(name.clone(), rect, request.clone(), window.clone());
            if let Some(stray) = self.registry.supersede(handle).await {
                warn!(stray = %stray.id(), "registry held a window after supersede");
                stray.tear_down().await;
            }
            info!(window_id = %window_id, "window created");

            let view = match self.bind_content(window.as_ref(), &request).await {
                Ok(view) => view,
                Err(error) => {
                    error!(window_id = %window_id, error = %error, "failed to load the content");
                    return CreateOutcome::BindFailed { window_id, error };
                }
            };

            if let Err(error) = self.place_and_show(window.as_ref(), rect).await {
                error!(window_id = %window_id, error = %error, "failed to place the window");
                return CreateOutcome::PlacementFailed { window_id, error };
            }

            let presentation = Arc::new(DialogPresentationController::new(
                window_id.clone(),
                request,
                self.presentation_ports.clone(),
                view,
                &self.config,
            ));
            self.registry
                .attach_presentation(&window_id, presentation.clone())
                .await;
            self.registry.mark_shown(&window_id).await;
            presentation.on_show().await;

            info!(window_id = %window_id, "create window successfully");
            CreateOutcome::Shown { window_id }
        }
        .instrument(span)
        .await
    }

    /// Tear down the tracked window (no-op when there is none) and ask the
    /// hosting context to terminate. Pending creation pipelines are retired.
    pub async fn destroy(&self) {
        self.registry.invalidate_tickets();
        let _dispatch_guard = self.dispatch_lock.lock().await;

        match self.registry.take().await {
            Some(handle) => {
                info!(
                    window_id = %handle.id(),
                    name = handle.name(),
                    rect = ?handle.rect(),
                    "destroying dialog window"
                );
                handle.tear_down().await;
            }
            None => info!("no dialog window to destroy"),
        }

        if let Err(err) = self.context.terminate_self().await {
            warn!(error = %err, "failed to terminate ability context");
        }
    }

    async fn create_window(&self, name: &str) -> Result<Arc<dyn FloatWindowPort>, WindowError> {
        let config = WindowConfig::float(name, self.context.context_id());
        self.toolkit.create_window(config).await
    }

    async fn bind_content(
        &self,
        window: &dyn FloatWindowPort,
        request: &RequestContext,
    ) -> Result<Arc<dyn DialogViewPort>, WindowError> {
        window
            .set_ui_content(&self.config.window.content_page, request.to_router_params())
            .await
    }

    async fn place_and_show(
        &self,
        window: &dyn FloatWindowPort,
        rect: DialogRect,
    ) -> Result<(), WindowError> {
        window.move_to(rect.left, rect.top).await?;
        window.resize(rect.width, rect.height).await?;
        window
            .set_background_color(&self.config.window.background_color)
            .await?;
        window.show().await
    }
}
