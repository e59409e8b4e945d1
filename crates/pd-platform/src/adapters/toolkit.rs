//! In-memory window toolkit.
//!
//! Every window is a record in a shared table. The toolkit tracks how many
//! windows are visible at once, so overlap between a superseded window and
//! its replacement is observable.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use pd_core::ports::{DialogViewPort, FloatWindowPort, WindowError, WindowToolkitPort};
use pd_core::{ContextId, RotationAnimation, WindowConfig, WindowId, WindowType};

/// Failure switches for exercising error branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolkitFaults {
    pub fail_create: bool,
    pub fail_content: bool,
    pub fail_show: bool,
    /// Yield to the scheduler this many times inside `destroy`, stretching
    /// platform teardown across other tasks' progress.
    pub destroy_yields: u32,
}

/// Observable state of one headless window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub name: String,
    pub window_type: WindowType,
    pub context: ContextId,
    pub page: Option<String>,
    pub params: Option<Value>,
    pub position: Option<(u32, u32)>,
    pub size: Option<(u32, u32)>,
    pub background: Option<String>,
    pub visible: bool,
    pub destroyed: bool,
    pub animation: Option<RotationAnimation>,
}

#[derive(Debug, Default)]
struct ToolkitState {
    windows: HashMap<WindowId, WindowSnapshot>,
    order: Vec<WindowId>,
    faults: ToolkitFaults,
    max_visible: usize,
}

impl ToolkitState {
    fn visible_count(&self) -> usize {
        self.windows.values().filter(|w| w.visible).count()
    }

    fn window_mut(&mut self, id: &WindowId) -> Result<&mut WindowSnapshot, WindowError> {
        match self.windows.get_mut(id) {
            Some(window) if !window.destroyed => Ok(window),
            _ => Err(WindowError::Destroyed),
        }
    }
}

type SharedState = Arc<Mutex<ToolkitState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, ToolkitState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessWindowToolkit {
    state: SharedState,
}

impl HeadlessWindowToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_faults(&self, faults: ToolkitFaults) {
        lock(&self.state).faults = faults;
    }

    /// Every window ever created, oldest first.
    pub fn windows(&self) -> Vec<WindowSnapshot> {
        let state = lock(&self.state);
        state
            .order
            .iter()
            .filter_map(|id| state.windows.get(id).cloned())
            .collect()
    }

    pub fn visible_windows(&self) -> Vec<WindowSnapshot> {
        self.windows().into_iter().filter(|w| w.visible).collect()
    }

    pub fn live_windows(&self) -> Vec<WindowSnapshot> {
        self.windows().into_iter().filter(|w| !w.destroyed).collect()
    }

    /// Highest number of simultaneously visible windows seen so far.
    pub fn max_visible(&self) -> usize {
        lock(&self.state).max_visible
    }

    pub fn window(&self, id: &WindowId) -> Option<WindowSnapshot> {
        lock(&self.state).windows.get(id).cloned()
    }
}

#[async_trait]
impl WindowToolkitPort for HeadlessWindowToolkit {
    async fn create_window(
        &self,
        config: WindowConfig,
    ) -> Result<Arc<dyn FloatWindowPort>, WindowError> {
        tokio::task::yield_now().await;

        let mut state = lock(&self.state);
        if state.faults.fail_create {
            return Err(WindowError::Create {
                code: 1300002,
                message: format!("cannot create {}", config.name),
            });
        }

        let id = WindowId::new();
        state.windows.insert(
            id.clone(),
            WindowSnapshot {
                id: id.clone(),
                name: config.name,
                window_type: config.window_type,
                context: config.context,
                page: None,
                params: None,
                position: None,
                size: None,
                background: None,
                visible: false,
                destroyed: false,
                animation: None,
            },
        );
        state.order.push(id.clone());
        debug!(window_id = %id, "headless window created");

        Ok(Arc::new(HeadlessWindow {
            id,
            state: self.state.clone(),
        }))
    }
}

struct HeadlessWindow {
    id: WindowId,
    state: SharedState,
}

impl HeadlessWindow {
    fn update<F>(&self, f: F) -> Result<(), WindowError>
    where
        F: FnOnce(&mut WindowSnapshot),
    {
        let mut state = lock(&self.state);
        f(state.window_mut(&self.id)?);
        Ok(())
    }
}

#[async_trait]
impl FloatWindowPort for HeadlessWindow {
    fn id(&self) -> WindowId {
        self.id.clone()
    }

    async fn set_ui_content(
        &self,
        page: &str,
        params: Value,
    ) -> Result<Arc<dyn DialogViewPort>, WindowError> {
        tokio::task::yield_now().await;

        let mut state = lock(&self.state);
        if state.faults.fail_content {
            return Err(WindowError::Content {
                code: 1300002,
                message: format!("cannot load {page}"),
            });
        }
        let window = state.window_mut(&self.id)?;
        window.page = Some(page.to_string());
        window.params = Some(params);

        Ok(Arc::new(HeadlessView {
            window_id: self.id.clone(),
            state: self.state.clone(),
        }))
    }

    async fn move_to(&self, x: u32, y: u32) -> Result<(), WindowError> {
        self.update(|w| w.position = Some((x, y)))
    }

    async fn resize(&self, width: u32, height: u32) -> Result<(), WindowError> {
        self.update(|w| w.size = Some((width, height)))
    }

    async fn set_background_color(&self, color: &str) -> Result<(), WindowError> {
        self.update(|w| w.background = Some(color.to_string()))
    }

    async fn show(&self) -> Result<(), WindowError> {
        tokio::task::yield_now().await;

        let mut state = lock(&self.state);
        if state.faults.fail_show {
            return Err(WindowError::Operation {
                op: "showWindow",
                code: 1300002,
            });
        }
        state.window_mut(&self.id)?.visible = true;
        state.max_visible = state.max_visible.max(state.visible_count());
        Ok(())
    }

    async fn destroy(&self) -> Result<(), WindowError> {
        let yields = lock(&self.state).faults.destroy_yields;
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }

        self.update(|w| {
            w.visible = false;
            w.destroyed = true;
        })?;
        debug!(window_id = %self.id, "headless window destroyed");
        Ok(())
    }
}

struct HeadlessView {
    window_id: WindowId,
    state: SharedState,
}

#[async_trait]
impl DialogViewPort for HeadlessView {
    async fn start_busy_animation(&self, animation: &RotationAnimation) -> anyhow::Result<()> {
        let mut state = lock(&self.state);
        let window = state.window_mut(&self.window_id)?;
        window.animation = Some(animation.clone());
        Ok(())
    }
}
