use async_trait::async_trait;

use crate::dialog::DialogEvent;

/// Channel back to the native caller that requested the dialog.
#[async_trait]
pub trait NativeHandlerPort: Send + Sync {
    async fn call_native_handler(&self, event: DialogEvent, value: &str) -> anyhow::Result<()>;
}
