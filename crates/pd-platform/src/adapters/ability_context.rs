use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::info;

use pd_core::ports::AbilityContextPort;
use pd_core::ContextId;

/// Ability context whose termination cancels a token the host waits on.
#[derive(Debug, Clone)]
pub struct TokenAbilityContext {
    id: ContextId,
    token: CancellationToken,
}

impl TokenAbilityContext {
    pub fn new(id: ContextId) -> Self {
        Self {
            id,
            token: CancellationToken::new(),
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once `terminate_self` has been called.
    pub async fn terminated(&self) {
        self.token.cancelled().await
    }
}

#[async_trait]
impl AbilityContextPort for TokenAbilityContext {
    fn context_id(&self) -> ContextId {
        self.id.clone()
    }

    async fn terminate_self(&self) -> anyhow::Result<()> {
        info!(context_id = %self.id, "terminateSelf");
        self.token.cancel();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn terminate_releases_waiters() -> anyhow::Result<()> {
        let context = TokenAbilityContext::new(ContextId::from("ability-1"));
        let waiter = {
            let context = context.clone();
            tokio::spawn(async move { context.terminated().await })
        };

        assert!(!context.is_terminated());
        context.terminate_self().await?;
        waiter.await?;

        assert!(context.is_terminated());
        Ok(())
    }
}
