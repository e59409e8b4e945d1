use serde::{Deserialize, Serialize};

use crate::ids::ContextId;

/// Window kinds the toolkit can create. The dialog only ever asks for a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowType {
    Float,
}

/// Creation request handed to the window toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub name: String,
    pub window_type: WindowType,
    pub context: ContextId,
}

impl WindowConfig {
    pub fn float(name: impl Into<String>, context: ContextId) -> Self {
        Self {
            name: name.into(),
            window_type: WindowType::Float,
            context,
        }
    }
}

/// Unique window name: `prefix` followed by the epoch milliseconds of the request.
pub fn window_name(prefix: &str, now_ms: i64) -> String {
    format!("{prefix}{now_ms}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_name_appends_timestamp() {
        assert_eq!(
            window_name("PasteboardDialog", 1_700_000_000_123),
            "PasteboardDialog1700000000123"
        );
    }

    #[test]
    fn float_config_binds_context() {
        let config = WindowConfig::float("dlg", ContextId::from("ctx"));
        assert_eq!(config.window_type, WindowType::Float);
        assert_eq!(config.context.as_str(), "ctx");
    }
}
