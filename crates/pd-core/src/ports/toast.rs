use async_trait::async_trait;

#[async_trait]
pub trait ToastPort: Send + Sync {
    async fn show_toast(&self, message: &str) -> anyhow::Result<()>;
}
