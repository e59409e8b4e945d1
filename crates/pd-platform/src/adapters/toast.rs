use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::info;

use pd_core::ports::ToastPort;

/// Toasts written to the log, with a history for inspection.
#[derive(Debug, Default)]
pub struct LoggingToast {
    shown: Mutex<Vec<String>>,
}

impl LoggingToast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ToastPort for LoggingToast {
    async fn show_toast(&self, message: &str) -> anyhow::Result<()> {
        info!(target: "pd_platform::toast", text = message, "showToast");
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        Ok(())
    }
}
