use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use pd_core::ports::NativeHandlerPort;
use pd_core::DialogEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeMessage {
    pub event: DialogEvent,
    pub value: String,
}

/// Forwards native handler calls over an in-process channel to whoever
/// plays the invoking service.
#[derive(Debug, Clone)]
pub struct ChannelNativeHandler {
    tx: mpsc::UnboundedSender<NativeMessage>,
}

impl ChannelNativeHandler {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NativeMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NativeHandlerPort for ChannelNativeHandler {
    async fn call_native_handler(&self, event: DialogEvent, value: &str) -> anyhow::Result<()> {
        debug!(event = %event, value, "callNativeHandler");
        self.tx
            .send(NativeMessage {
                event,
                value: value.to_string(),
            })
            .map_err(|_| anyhow::anyhow!("native caller disconnected"))
    }
}
