use async_trait::async_trait;

use pd_core::ports::{DisplayError, DisplayPort};
use pd_core::DisplayInfo;

/// Display with fixed, caller-supplied dimensions.
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    result: Result<DisplayInfo, DisplayError>,
}

impl HeadlessDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            result: Ok(DisplayInfo { width, height }),
        }
    }

    /// A display whose query always fails with `error`.
    pub fn failing(error: DisplayError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl DisplayPort for HeadlessDisplay {
    async fn default_display(&self) -> Result<DisplayInfo, DisplayError> {
        tokio::task::yield_now().await;
        self.result.clone()
    }
}
