use async_trait::async_trait;

use crate::geometry::DisplayInfo;
use crate::ports::errors::DisplayError;

#[async_trait]
pub trait DisplayPort: Send + Sync {
    /// Dimensions of the display the dialog should cover.
    async fn default_display(&self) -> Result<DisplayInfo, DisplayError>;
}
