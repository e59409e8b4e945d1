//! In-window dialog logic.
//!
//! Drives [`PresentationStateMachine`] and executes its side effects against
//! the native caller, the toast service and the loaded page.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{error, info, info_span, warn, Instrument};

use pd_core::dialog::{
    PresentationAction, PresentationEvent, PresentationState, PresentationStateMachine, ToastKind,
};
use pd_core::ports::{DialogViewPort, NativeHandlerPort, ToastPort};
use pd_core::{DialogConfig, RequestContext, RotationAnimation, WindowId, EVENT_VALUE};

use super::zombie_guard::ZombieGuard;

/// Process-wide collaborators shared by every dialog instance.
#[derive(Clone)]
pub struct PresentationPorts {
    pub native: Arc<dyn NativeHandlerPort>,
    pub toast: Arc<dyn ToastPort>,
}

struct Session {
    state: PresentationState,
    zombie_guard: ZombieGuard,
}

struct Inner {
    window_id: WindowId,
    request: RequestContext,
    ports: PresentationPorts,
    view: Arc<dyn DialogViewPort>,
    animation: RotationAnimation,
    zombie_delay: Duration,
    cancel_text: String,
    zombie_text: String,
    session: Mutex<Session>,
}

pub struct DialogPresentationController {
    inner: Arc<Inner>,
}

impl DialogPresentationController {
    pub fn new(
        window_id: WindowId,
        request: RequestContext,
        ports: PresentationPorts,
        view: Arc<dyn DialogViewPort>,
        config: &DialogConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                window_id,
                request,
                ports,
                view,
                animation: config.busy_animation(),
                zombie_delay: config.zombie_delay(),
                cancel_text: config.toast_text(ToastKind::Cancelled).to_string(),
                zombie_text: config.toast_text(ToastKind::Zombie).to_string(),
                session: Mutex::new(Session {
                    state: PresentationState::Loaded,
                    zombie_guard: ZombieGuard::new(),
                }),
            }),
        }
    }

    pub fn window_id(&self) -> &WindowId {
        &self.inner.window_id
    }

    /// Attributes of the request this dialog was opened for.
    pub fn request(&self) -> &RequestContext {
        &self.inner.request
    }

    pub async fn state(&self) -> PresentationState {
        self.inner.session.lock().await.state
    }

    pub async fn zombie_guard_armed(&self) -> bool {
        self.inner.session.lock().await.zombie_guard.is_armed()
    }

    /// The window became visible.
    pub async fn on_show(&self) -> PresentationState {
        Inner::dispatch(&self.inner, PresentationEvent::Displayed).await
    }

    /// The user dismissed the dialog.
    pub async fn on_cancel(&self) -> PresentationState {
        Inner::dispatch(&self.inner, PresentationEvent::CancelRequested).await
    }

    pub async fn tear_down(&self) -> PresentationState {
        Inner::dispatch(&self.inner, PresentationEvent::TornDown).await
    }
}

impl Inner {
    async fn dispatch(this: &Arc<Self>, event: PresentationEvent) -> PresentationState {
        let span = info_span!(
            "usecase.dialog_presentation.dispatch",
            window_id = %this.window_id,
            event = ?event
        );
        async {
            let mut session = this.session.lock().await;
            let (next, actions) = PresentationStateMachine::transition(session.state, event);
            for action in actions {
                this.execute(&mut session, action).await;
            }
            session.state = next;
            next
        }
        .instrument(span)
        .await
    }

    /// Boxed entry point for events raised from spawned tasks.
    fn dispatch_detached(
        this: Arc<Self>,
        event: PresentationEvent,
    ) -> Pin<Box<dyn Future<Output = PresentationState> + Send>> {
        Box::pin(async move { Inner::dispatch(&this, event).await })
    }

    async fn execute(self: &Arc<Self>, session: &mut Session, action: PresentationAction) {
        match action {
            PresentationAction::NotifyNative { event } => {
                if let Err(err) = self.ports.native.call_native_handler(event, EVENT_VALUE).await {
                    warn!(event = %event, error = %err, "native handler call failed");
                }
            }
            PresentationAction::StartBusyIndicator => {
                if let Err(err) = self.view.start_busy_animation(&self.animation).await {
                    warn!(error = %err, "failed to start busy indicator");
                }
            }
            PresentationAction::ShowToast(kind) => {
                let text = match kind {
                    ToastKind::Cancelled => &self.cancel_text,
                    ToastKind::Zombie => &self.zombie_text,
                };
                if let Err(err) = self.ports.toast.show_toast(text).await {
                    warn!(?kind, error = %err, "failed to show toast");
                }
            }
            PresentationAction::ArmZombieGuard => {
                let weak: Weak<Self> = Arc::downgrade(self);
                session.zombie_guard.arm(self.zombie_delay, async move {
                    if let Some(inner) = weak.upgrade() {
                        Inner::dispatch_detached(inner, PresentationEvent::ZombieTimerElapsed)
                            .await;
                    }
                });
            }
            PresentationAction::DisarmZombieGuard => {
                if session.zombie_guard.disarm() {
                    info!("pending zombie check cancelled by teardown");
                }
            }
            PresentationAction::ReportZombie => {
                error!(
                    app_name = %self.request.app_name,
                    delay_ms = u64::try_from(self.zombie_delay.as_millis()).unwrap_or(u64::MAX),
                    "zombie dialog: window still alive after cancel"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};
    use pd_core::DialogEvent;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    mock! {
        pub Native {}

        #[async_trait]
        impl NativeHandlerPort for Native {
            async fn call_native_handler(&self, event: DialogEvent, value: &str) -> anyhow::Result<()>;
        }
    }

    #[derive(Default)]
    struct RecordingToast {
        messages: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl ToastPort for RecordingToast {
        async fn show_toast(&self, message: &str) -> anyhow::Result<()> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingView {
        started: AtomicUsize,
    }

    #[async_trait]
    impl DialogViewPort for CountingView {
        async fn start_busy_animation(&self, animation: &RotationAnimation) -> anyhow::Result<()> {
            assert_eq!(*animation, RotationAnimation::default());
            self.started.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn controller(
        native: MockNative,
        toast: Arc<RecordingToast>,
        view: Arc<CountingView>,
    ) -> DialogPresentationController {
        DialogPresentationController::new(
            WindowId::from("w-1"),
            RequestContext::new("Notes", "phone"),
            PresentationPorts {
                native: Arc::new(native),
                toast,
            },
            view,
            &DialogConfig::default(),
        )
    }

    #[tokio::test]
    async fn show_announces_init_and_spins() {
        let mut native = MockNative::new();
        native
            .expect_call_native_handler()
            .with(eq(DialogEvent::Init), eq("value"))
            .times(1)
            .returning(|_, _| Ok(()));
        let view = Arc::new(CountingView::default());
        let dialog = controller(native, Arc::new(RecordingToast::default()), view.clone());

        assert_eq!(dialog.on_show().await, PresentationState::Shown);
        assert_eq!(view.started.load(Ordering::SeqCst), 1);
        assert_eq!(dialog.request().app_name, "Notes");
    }

    #[tokio::test]
    async fn cancel_is_delivered_once_and_arms_guard() {
        tokio::time::pause();
        let mut native = MockNative::new();
        native
            .expect_call_native_handler()
            .with(eq(DialogEvent::Init), eq("value"))
            .times(1)
            .returning(|_, _| Ok(()));
        native
            .expect_call_native_handler()
            .with(eq(DialogEvent::Cancel), eq("value"))
            .times(1)
            .returning(|_, _| Ok(()));
        let toast = Arc::new(RecordingToast::default());
        let dialog = controller(native, toast.clone(), Arc::new(CountingView::default()));

        dialog.on_show().await;
        assert_eq!(dialog.on_cancel().await, PresentationState::Cancelling);
        assert_eq!(dialog.on_cancel().await, PresentationState::Cancelling);

        assert!(dialog.zombie_guard_armed().await);
        assert_eq!(
            *toast.messages.lock().unwrap(),
            vec![DialogConfig::default().strings.cancel]
        );
    }

    #[tokio::test]
    async fn native_failure_does_not_stop_presentation() {
        let mut native = MockNative::new();
        native
            .expect_call_native_handler()
            .returning(|_, _| Err(anyhow::anyhow!("caller gone")));
        let view = Arc::new(CountingView::default());
        let dialog = controller(native, Arc::new(RecordingToast::default()), view.clone());

        assert_eq!(dialog.on_show().await, PresentationState::Shown);
        assert_eq!(view.started.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn guard_reports_zombie_when_not_torn_down() {
        tokio::time::pause();
        let mut native = MockNative::new();
        native.expect_call_native_handler().returning(|_, _| Ok(()));
        let toast = Arc::new(RecordingToast::default());
        let dialog = controller(native, toast.clone(), Arc::new(CountingView::default()));

        dialog.on_show().await;
        dialog.on_cancel().await;
        tokio::time::sleep(Duration::from_millis(5_001)).await;

        assert_eq!(dialog.state().await, PresentationState::Zombie);
        let messages = toast.messages.lock().unwrap().clone();
        assert_eq!(
            messages,
            vec![
                DialogConfig::default().strings.cancel,
                DialogConfig::default().strings.zombie,
            ]
        );

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(toast.messages.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn teardown_before_delay_suppresses_zombie() {
        tokio::time::pause();
        let mut native = MockNative::new();
        native.expect_call_native_handler().returning(|_, _| Ok(()));
        let toast = Arc::new(RecordingToast::default());
        let dialog = controller(native, toast.clone(), Arc::new(CountingView::default()));

        dialog.on_show().await;
        dialog.on_cancel().await;
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(dialog.tear_down().await, PresentationState::Destroyed);
        assert!(!dialog.zombie_guard_armed().await);
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(dialog.state().await, PresentationState::Destroyed);
        assert_eq!(toast.messages.lock().unwrap().len(), 1);
    }
}
