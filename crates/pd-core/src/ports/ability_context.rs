use async_trait::async_trait;

use crate::ids::ContextId;

/// Execution context of the extension ability hosting the dialog.
#[async_trait]
pub trait AbilityContextPort: Send + Sync {
    fn context_id(&self) -> ContextId;

    /// Ask the host runtime to stop this ability.
    async fn terminate_self(&self) -> anyhow::Result<()>;
}
