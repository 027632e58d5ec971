use serde::{Deserialize, Serialize};

use crate::error::{DragError, DragResult};
use crate::events::PointerKind;
use crate::interaction::DragAxes;
use crate::marker::MarkerMount;

fn default_true() -> bool {
    true
}

/// Live-preview policy: whether prospective values are published to the
/// preview observer while the pointer moves.
///
/// Touch input is excluded by default; flip `include_touch` to publish
/// previews for touch drags as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivePreviewBehavior {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub include_touch: bool,
}

impl Default for LivePreviewBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            include_touch: false,
        }
    }
}

impl LivePreviewBehavior {
    #[must_use]
    pub fn allows(self, kind: PointerKind) -> bool {
        self.enabled && (kind != PointerKind::Touch || self.include_touch)
    }
}

/// Cosmetic class names handed to the host's styling hooks.
///
/// The binding itself applies only `dragging` (added at session start,
/// removed unconditionally at session end); `hover` and `highlight` are
/// carried for host integrations that style those states themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleClasses {
    pub hover: String,
    pub dragging: String,
    pub highlight: String,
}

impl Default for StyleClasses {
    fn default() -> Self {
        Self {
            hover: "point-hover".to_owned(),
            dragging: "point-dragging".to_owned(),
            highlight: "point-highlight".to_owned(),
        }
    }
}

impl StyleClasses {
    fn validate(&self) -> DragResult<()> {
        for (value, name) in [
            (&self.hover, "hover"),
            (&self.dragging, "dragging"),
            (&self.highlight, "highlight"),
        ] {
            if value.is_empty() || value.contains(char::is_whitespace) {
                return Err(DragError::InvalidConfig(format!(
                    "style class `{name}` must be a single non-empty class name"
                )));
            }
        }
        Ok(())
    }
}

/// Host-configurable drag behavior, serializable so applications can persist
/// their setup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DragBehavior {
    #[serde(default)]
    pub axes: DragAxes,
    #[serde(default)]
    pub live_preview: LivePreviewBehavior,
    #[serde(default)]
    pub marker_mount: MarkerMount,
    #[serde(default)]
    pub style_classes: StyleClasses,
}

impl DragBehavior {
    pub fn validate(&self) -> DragResult<()> {
        self.style_classes.validate()
    }
}
