use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::dialog::RotationAnimation;
use crate::ids::WindowId;
use crate::ports::errors::WindowError;
use crate::window::WindowConfig;

#[async_trait]
pub trait WindowToolkitPort: Send + Sync {
    async fn create_window(
        &self,
        config: WindowConfig,
    ) -> Result<Arc<dyn FloatWindowPort>, WindowError>;
}

/// One platform window.
///
/// Methods take `&self`; the toolkit owns the native object and these are
/// requests against it.
#[async_trait]
pub trait FloatWindowPort: Send + Sync {
    fn id(&self) -> WindowId;

    /// Load `page` with `params` as its router parameters and return the
    /// loaded page's view.
    async fn set_ui_content(
        &self,
        page: &str,
        params: Value,
    ) -> Result<Arc<dyn DialogViewPort>, WindowError>;

    async fn move_to(&self, x: u32, y: u32) -> Result<(), WindowError>;

    async fn resize(&self, width: u32, height: u32) -> Result<(), WindowError>;

    async fn set_background_color(&self, color: &str) -> Result<(), WindowError>;

    async fn show(&self) -> Result<(), WindowError>;

    async fn destroy(&self) -> Result<(), WindowError>;
}

/// Elements of the loaded dialog page.
#[async_trait]
pub trait DialogViewPort: Send + Sync {
    async fn start_busy_animation(&self, animation: &RotationAnimation) -> anyhow::Result<()>;
}
