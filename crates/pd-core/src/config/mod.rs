//! # Dialog configuration DTO
//!
//! Plain data describing how the dialog window is named, placed and timed.
//! Every key is optional in TOML; absent keys take the built-in values the
//! pasteboard service has always used.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dialog::{RotationAnimation, ToastKind};
use crate::geometry::GeometryPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window names are this prefix plus the request timestamp.
    pub name_prefix: String,
    /// Page loaded into the window as its content.
    pub content_page: String,
    pub background_color: String,
    pub top_offset: u32,
    pub bottom_margin: u32,
    pub display_query_timeout_ms: u64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            name_prefix: "PasteboardDialog".to_string(),
            content_page: "pages/index".to_string(),
            background_color: "#00000000".to_string(),
            top_offset: GeometryPolicy::DEFAULT_OFFSET,
            bottom_margin: GeometryPolicy::DEFAULT_OFFSET,
            display_query_timeout_ms: 3_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    pub zombie_delay_ms: u64,
    pub busy_rotation_ms: u64,
    pub stub_descriptor: String,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            zombie_delay_ms: 5_000,
            busy_rotation_ms: RotationAnimation::DEFAULT_CYCLE_MS,
            stub_descriptor: "PasteboardDialog".to_string(),
        }
    }
}

/// Localized toast texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogStrings {
    pub cancel: String,
    pub zombie: String,
}

impl Default for DialogStrings {
    fn default() -> Self {
        Self {
            cancel: "Paste request cancelled".to_string(),
            zombie: "The paste dialog failed to close".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub window: WindowSettings,
    pub dialog: DialogSettings,
    pub strings: DialogStrings,
}

impl DialogConfig {
    /// Map a parsed TOML document onto the config, keeping defaults for
    /// anything the document leaves out.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let config: Self = toml_value.clone().try_into()?;
        Ok(config)
    }

    pub fn geometry(&self) -> GeometryPolicy {
        GeometryPolicy {
            top_offset: self.window.top_offset,
            bottom_margin: self.window.bottom_margin,
        }
    }

    pub fn zombie_delay(&self) -> Duration {
        Duration::from_millis(self.dialog.zombie_delay_ms)
    }

    pub fn display_query_timeout(&self) -> Duration {
        Duration::from_millis(self.window.display_query_timeout_ms)
    }

    pub fn busy_animation(&self) -> RotationAnimation {
        RotationAnimation::spinner(Duration::from_millis(self.dialog.busy_rotation_ms))
    }

    pub fn toast_text(&self, kind: ToastKind) -> &str {
        match kind {
            ToastKind::Cancelled => &self.strings.cancel,
            ToastKind::Zombie => &self.strings.zombie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn empty_document_yields_defaults() {
        let value: Value = toml::from_str("").unwrap();

        let config = DialogConfig::from_toml(&value).unwrap();

        assert_eq!(config, DialogConfig::default());
        assert_eq!(config.geometry(), GeometryPolicy::default());
        assert_eq!(config.zombie_delay(), Duration::from_secs(5));
        assert_eq!(config.busy_animation(), RotationAnimation::default());
    }

    #[test]
    fn partial_sections_override_only_named_keys() {
        let value: Value = toml::from_str(
            r#"
            [window]
            top_offset = 96

            [dialog]
            zombie_delay_ms = 1500

            [strings]
            zombie = "still here"
            "#,
        )
        .unwrap();

        let config = DialogConfig::from_toml(&value).unwrap();

        assert_eq!(config.window.top_offset, 96);
        assert_eq!(config.window.bottom_margin, 72);
        assert_eq!(config.window.name_prefix, "PasteboardDialog");
        assert_eq!(config.zombie_delay(), Duration::from_millis(1500));
        assert_eq!(config.toast_text(ToastKind::Zombie), "still here");
        assert_eq!(
            config.toast_text(ToastKind::Cancelled),
            DialogStrings::default().cancel
        );
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        let value: Value = toml::from_str(
            r#"
            [dialog]
            zombie_delay_ms = "soon"
            "#,
        )
        .unwrap();

        assert!(DialogConfig::from_toml(&value).is_err());
    }
}
