pub use kurbo::{Point, Vec2};

/// Mouse button reported by the host for a pointer-down event.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Left button on most devices; the only one that starts a drag.
    #[default]
    Primary,
    /// Middle button / wheel press.
    Auxiliary,
    /// Right button.
    Secondary,
    /// Anything else (back/forward buttons).
    Other,
}

/// Identity of the pointer that owns a drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerId {
    /// The (single) mouse cursor.
    Mouse,
    /// A touch point, keyed by the host's touch identifier.
    Touch(u64),
}

/// Where a pointer event came from, with the bits needed to decide eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse event with the button that changed state.
    Mouse {
        /// Button pressed (ignored for moves).
        button: MouseButton,
    },
    /// Touch event.
    Touch {
        /// Identifier of the first active touch.
        id: u64,
        /// Number of touches currently on the surface.
        touches: u32,
    },
}

impl PointerSource {
    /// Primary-button mouse source.
    pub fn primary_mouse() -> Self {
        Self::Mouse {
            button: MouseButton::Primary,
        }
    }

    /// Single-finger touch source.
    pub fn single_touch(id: u64) -> Self {
        Self::Touch { id, touches: 1 }
    }

    /// Pointer identity used to bind a drag session.
    pub fn pointer_id(self) -> PointerId {
        match self {
            Self::Mouse { .. } => PointerId::Mouse,
            Self::Touch { id, .. } => PointerId::Touch(id),
        }
    }

    /// Only the primary mouse button or a single touch may start a drag.
    pub fn can_start_drag(self) -> bool {
        match self {
            Self::Mouse { button } => button == MouseButton::Primary,
            Self::Touch { touches, .. } => touches == 1,
        }
    }

    /// Multi-touch moves (pinch, two-finger scroll) never move the drag.
    pub fn can_move_drag(self) -> bool {
        match self {
            Self::Mouse { .. } => true,
            Self::Touch { touches, .. } => touches == 1,
        }
    }
}

/// Offset with the horizontal axis pinned to zero and the vertical axis kept non-negative.
pub fn vertical_offset(y: f64) -> Vec2 {
    Vec2::new(0.0, y.max(0.0))
}
