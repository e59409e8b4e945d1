//! Overlay placement.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dimensions reported by the active display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub width: u32,
    pub height: u32,
}

/// Placement rectangle of the overlay, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Fixed offsets keeping the dialog clear of system status chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryPolicy {
    pub top_offset: u32,
    pub bottom_margin: u32,
}

impl GeometryPolicy {
    pub const DEFAULT_OFFSET: u32 = 72;
}

impl Default for GeometryPolicy {
    fn default() -> Self {
        Self {
            top_offset: Self::DEFAULT_OFFSET,
            bottom_margin: Self::DEFAULT_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("display reported empty dimensions {width}x{height}")]
    EmptyDisplay { width: u32, height: u32 },

    #[error("display height {height} leaves no room below offset {top_offset} / margin {bottom_margin}")]
    DisplayTooShort {
        height: u32,
        top_offset: u32,
        bottom_margin: u32,
    },
}

impl GeometryPolicy {
    /// Full-width rectangle anchored `top_offset` below the top edge, with
    /// its height reduced by `bottom_margin`.
    pub fn resolve(&self, display: DisplayInfo) -> Result<DialogRect, GeometryError> {
        if display.width == 0 || display.height == 0 {
            return Err(GeometryError::EmptyDisplay {
                width: display.width,
                height: display.height,
            });
        }

        if display.height <= self.bottom_margin || display.height <= self.top_offset {
            return Err(GeometryError::DisplayTooShort {
                height: display.height,
                top_offset: self.top_offset,
                bottom_margin: self.bottom_margin,
            });
        }

        Ok(DialogRect {
            left: 0,
            top: self.top_offset,
            width: display.width,
            height: display.height - self.bottom_margin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_phone_display_with_default_offsets() {
        let rect = GeometryPolicy::default()
            .resolve(DisplayInfo {
                width: 1080,
                height: 2340,
            })
            .unwrap();

        assert_eq!(
            rect,
            DialogRect {
                left: 0,
                top: 72,
                width: 1080,
                height: 2268,
            }
        );
    }

    #[test]
    fn offsets_are_independent() {
        let policy = GeometryPolicy {
            top_offset: 40,
            bottom_margin: 100,
        };

        let rect = policy
            .resolve(DisplayInfo {
                width: 1920,
                height: 1080,
            })
            .unwrap();

        assert_eq!(rect.top, 40);
        assert_eq!(rect.height, 980);
        assert_eq!(rect.width, 1920);
    }

    #[test]
    fn rejects_empty_display() {
        let err = GeometryPolicy::default()
            .resolve(DisplayInfo {
                width: 0,
                height: 2340,
            })
            .unwrap_err();

        assert!(matches!(err, GeometryError::EmptyDisplay { .. }));
    }

    #[test]
    fn rejects_display_shorter_than_margin() {
        let err = GeometryPolicy::default()
            .resolve(DisplayInfo {
                width: 800,
                height: 72,
            })
            .unwrap_err();

        assert!(matches!(err, GeometryError::DisplayTooShort { height: 72, .. }));
    }
}
