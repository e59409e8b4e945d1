//! Singleton window bookkeeping.
//!
//! The registry is the source of truth for "which overlay is current". It is
//! shared by `Arc` between the lifecycle manager and host-triggered teardown.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use pd_core::ports::FloatWindowPort;
use pd_core::{DialogRect, RequestContext, WindowId};

use super::presentation::DialogPresentationController;

/// The single live overlay window.
#[derive(Clone)]
pub struct WindowHandle {
    id: WindowId,
    name: String,
    rect: DialogRect,
    request: RequestContext,
    window: Arc<dyn FloatWindowPort>,
    presentation: Option<Arc<DialogPresentationController>>,
}

impl WindowHandle {
    pub fn new(
        name: String,
        rect: DialogRect,
        request: RequestContext,
        window: Arc<dyn FloatWindowPort>,
    ) -> Self {
        Self {
            id: window.id(),
            name,
            rect,
            request,
            window,
            presentation: None,
        }
    }

    pub fn id(&self) -> &WindowId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rect(&self) -> DialogRect {
        self.rect
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    pub fn presentation(&self) -> Option<&Arc<DialogPresentationController>> {
        self.presentation.as_ref()
    }

    /// Stop the presentation and destroy the platform window. Failures are
    /// logged; the handle is gone either way.
    pub async fn tear_down(self) {
        if let Some(presentation) = &self.presentation {
            presentation.tear_down().await;
        }
        if let Err(err) = self.window.destroy().await {
            warn!(window_id = %self.id, error = %err, "failed to destroy window");
        }
    }
}

impl fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowHandle")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("rect", &self.rect)
            .field("request", &self.request)
            .field("has_presentation", &self.presentation.is_some())
            .finish()
    }
}

/// Generation number handed out per connect. Only the newest ticket may
/// still create a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Default)]
struct Slot {
    handle: Option<WindowHandle>,
    shown: bool,
}

#[derive(Default)]
pub struct WindowRegistry {
    slot: Mutex<Slot>,
    generation: AtomicU64,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue_ticket(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Retire every ticket issued so far.
    pub fn invalidate_tickets(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    pub async fn current(&self) -> Option<WindowHandle> {
        self.slot.lock().await.handle.clone()
    }

    /// Whether the current window completed placement and is visible.
    pub async fn is_shown(&self) -> bool {
        self.slot.lock().await.shown
    }

    /// Record `new` as current and hand back the handle it displaced, which
    /// the caller must tear down. Resets the shown flag.
    pub async fn supersede(&self, new: WindowHandle) -> Option<WindowHandle> {
        let mut slot = self.slot.lock().await;
        slot.shown = false;
        slot.handle.replace(new)
    }

    /// Remove and return the current handle, clearing the shown flag.
    pub async fn take(&self) -> Option<WindowHandle> {
        let mut slot = self.slot.lock().await;
        slot.shown = false;
        slot.handle.take()
    }

    pub async fn attach_presentation(
        &self,
        id: &WindowId,
        presentation: Arc<DialogPresentationController>,
    ) -> bool {
        let mut slot = self.slot.lock().await;
        match slot.handle.as_mut() {
            Some(handle) if handle.id == *id => {
                handle.presentation = Some(presentation);
                true
            }
            _ => false,
        }
    }

    pub async fn mark_shown(&self, id: &WindowId) -> bool {
        let mut slot = self.slot.lock().await;
        let is_current = slot.handle.as_ref().is_some_and(|h| h.id == *id);
        if is_current {
            slot.shown = true;
        }
        is_current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pd_core::ports::{DialogViewPort, WindowError};
    use serde_json::Value;

    struct StubWindow {
        id: WindowId,
    }

    #[async_trait]
    impl FloatWindowPort for StubWindow {
        fn id(&self) -> WindowId {
            self.id.clone()
        }

        async fn set_ui_content(
            &self,
            _page: &str,
            _params: Value,
        ) -> Result<Arc<dyn DialogViewPort>, WindowError> {
            Err(WindowError::Destroyed)
        }

        async fn move_to(&self, _x: u32, _y: u32) -> Result<(), WindowError> {
            Ok(())
        }

        async fn resize(&self, _width: u32, _height: u32) -> Result<(), WindowError> {
            Ok(())
        }

        async fn set_background_color(&self, _color: &str) -> Result<(), WindowError> {
            Ok(())
        }

        async fn show(&self) -> Result<(), WindowError> {
            Ok(())
        }

        async fn destroy(&self) -> Result<(), WindowError> {
            Ok(())
        }
    }

    fn handle(id: &str) -> WindowHandle {
        WindowHandle::new(
            format!("dlg-{id}"),
            DialogRect {
                left: 0,
                top: 72,
                width: 1080,
                height: 2268,
            },
            RequestContext::new(id, "phone"),
            Arc::new(StubWindow {
                id: WindowId::from(id),
            }),
        )
    }

    #[tokio::test]
    async fn empty_registry_has_no_current_window() {
        let registry = WindowRegistry::new();
        assert!(registry.current().await.is_none());
        assert!(!registry.is_shown().await);
        assert!(registry.take().await.is_none());
    }

    #[tokio::test]
    async fn supersede_returns_previous_and_resets_flag() {
        let registry = WindowRegistry::new();
        assert!(registry.supersede(handle("a")).await.is_none());
        assert!(registry.mark_shown(&WindowId::from("a")).await);
        assert!(registry.is_shown().await);

        let old = registry.supersede(handle("b")).await.unwrap();

        assert_eq!(old.id().as_str(), "a");
        assert!(!registry.is_shown().await);
        assert_eq!(registry.current().await.unwrap().id().as_str(), "b");
    }

    #[tokio::test]
    async fn mark_shown_ignores_stale_window() {
        let registry = WindowRegistry::new();
        registry.supersede(handle("b")).await;

        assert!(!registry.mark_shown(&WindowId::from("a")).await);
        assert!(!registry.is_shown().await);
    }

    #[test]
    fn only_newest_ticket_is_latest() {
        let registry = WindowRegistry::new();
        let first = registry.issue_ticket();
        let second = registry.issue_ticket();

        assert!(!registry.is_latest(first));
        assert!(registry.is_latest(second));

        registry.invalidate_tickets();
        assert!(!registry.is_latest(second));
    }
}
