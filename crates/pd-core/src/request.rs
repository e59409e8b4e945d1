//! Inbound request attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label used when the caller leaves an attribute out.
pub const DEFAULT_LABEL: &str = "unknown";

const PARAM_APP_NAME: &str = "appName";
const PARAM_DEVICE_TYPE: &str = "deviceType";

/// Host request envelope carrying free-form parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Want {
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl Want {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style parameter setter.
    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }

    pub fn string_param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(Value::as_str)
    }
}

/// Snapshot of who is asking for clipboard access.
///
/// Serialized with the page's camelCase keys, so it doubles as the router
/// parameters handed to the dialog content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub app_name: String,
    pub device_type: String,
}

impl RequestContext {
    pub fn new(app_name: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            device_type: device_type.into(),
        }
    }

    /// Read the context out of a host request. Absent or non-string
    /// attributes fall back to [`DEFAULT_LABEL`].
    pub fn from_want(want: &Want) -> Self {
        Self::new(
            want.string_param(PARAM_APP_NAME).unwrap_or(DEFAULT_LABEL),
            want.string_param(PARAM_DEVICE_TYPE).unwrap_or(DEFAULT_LABEL),
        )
    }

    pub fn to_router_params(&self) -> Value {
        serde_json::json!({
            PARAM_APP_NAME: self.app_name,
            PARAM_DEVICE_TYPE: self.device_type,
        })
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL, DEFAULT_LABEL)
    }
}
