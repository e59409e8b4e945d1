use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use pd_core::ports::{DisplayError, DisplayPort};
use pd_core::{DialogRect, GeometryError, GeometryPolicy};

#[derive(Debug, thiserror::Error)]
pub enum ResolveGeometryError {
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Query the default display and derive the overlay rectangle from it.
pub struct ResolveDialogGeometry {
    display: Arc<dyn DisplayPort>,
    policy: GeometryPolicy,
    timeout: Duration,
}

impl ResolveDialogGeometry {
    pub fn new(display: Arc<dyn DisplayPort>, policy: GeometryPolicy, timeout: Duration) -> Self {
        Self {
            display,
            policy,
            timeout,
        }
    }

    #[tracing::instrument(name = "usecase.resolve_dialog_geometry.execute", skip(self))]
    pub async fn execute(&self) -> Result<DialogRect, ResolveGeometryError> {
        let screen = match tokio::time::timeout(self.timeout, self.display.default_display()).await
        {
            Ok(result) => result?,
            Err(_) => {
                let waited = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                warn!(timeout_ms = waited, "display query timed out");
                return Err(DisplayError::Timeout(waited).into());
            }
        };

        let rect = self.policy.resolve(screen)?;
        info!(
            display_width = screen.width,
            display_height = screen.height,
            ?rect,
            "dialog geometry resolved"
        );
        Ok(rect)
    }
}
