//! View-operation bindings: logical view gestures mapped to input triggers.
//!
//! A binding stores which button/modifier combination drives a gesture plus
//! the gesture's signed sensitivity and scale range. Exactly one binding
//! exists per gesture per view state. Resolving trigger conflicts between
//! gestures is the input-operation consumer's concern; this layer only
//! stores and retrieves the mapping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Logical view gestures a viewport understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewGesture {
    Zoom,
    Pan,
    Rotation,
    Spin,
    Focus,
    #[serde(rename = "perspective")]
    PerspectiveToggle,
}

impl ViewGesture {
    pub const ALL: [ViewGesture; 6] = [
        ViewGesture::Zoom,
        ViewGesture::Pan,
        ViewGesture::Rotation,
        ViewGesture::Spin,
        ViewGesture::Focus,
        ViewGesture::PerspectiveToggle,
    ];
}

impl std::fmt::Display for ViewGesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zoom => write!(f, "Zoom"),
            Self::Pan => write!(f, "Pan"),
            Self::Rotation => write!(f, "Rotation"),
            Self::Spin => write!(f, "Spin"),
            Self::Focus => write!(f, "Focus"),
            Self::PerspectiveToggle => write!(f, "Perspective"),
        }
    }
}

/// Mouse button participating in a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Keyboard modifier bitset for input triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(0b001);
    pub const CTRL: Modifiers = Modifiers(0b010);
    pub const ALT: Modifiers = Modifiers(0b100);

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    #[must_use]
    pub const fn with(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Button/modifier combination (optionally the wheel) that fires a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTrigger {
    /// Dragged button, if the gesture is drag-driven
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<MouseButton>,
    pub modifiers: Modifiers,
    /// Whether the wheel also drives this gesture
    pub wheel: bool,
}

impl InputTrigger {
    /// A drag trigger on the given button.
    pub const fn drag(button: MouseButton, modifiers: Modifiers) -> Self {
        Self {
            button: Some(button),
            modifiers,
            wheel: false,
        }
    }

    /// A wheel trigger.
    pub const fn wheel(modifiers: Modifiers) -> Self {
        Self {
            button: None,
            modifiers,
            wheel: true,
        }
    }

    /// Drag trigger that also accepts wheel input.
    pub const fn drag_or_wheel(button: MouseButton, modifiers: Modifiers) -> Self {
        Self {
            button: Some(button),
            modifiers,
            wheel: true,
        }
    }
}

/// One gesture's trigger and parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewOperationBinding {
    pub gesture: ViewGesture,
    pub trigger: InputTrigger,
    /// Signed sensitivity; the sign flips the gesture's direction
    pub sensitivity: f64,
    /// Lower zoom-scale bound
    pub scale_min: f64,
    /// Upper zoom-scale bound
    pub scale_max: f64,
}

impl ViewOperationBinding {
    pub fn new(gesture: ViewGesture, trigger: InputTrigger) -> Self {
        Self {
            gesture,
            trigger,
            sensitivity: 1.0,
            scale_min: DEFAULT_SCALE_MIN,
            scale_max: DEFAULT_SCALE_MAX,
        }
    }

    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn with_scale_range(mut self, min: f64, max: f64) -> Self {
        self.scale_min = min;
        self.scale_max = max;
        self
    }
}

const DEFAULT_SCALE_MIN: f64 = 0.01;
const DEFAULT_SCALE_MAX: f64 = 100.0;

/// Zoom/pan conventions and the gesture→binding table for one view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSettings {
    /// Wheel-zoom direction, +1 or -1
    pub wheel_zoom_sign: i8,
    /// Re-focus the camera target after fitting operations
    pub auto_focus: bool,
    /// Zoom toward the cursor instead of the viewport center
    pub zoom_to_cursor: bool,
    /// Keep the world Z axis upright while rotating
    pub z_locked_rotation: bool,
    bindings: HashMap<ViewGesture, ViewOperationBinding>,
}

impl OperationSettings {
    /// Look up the binding for a gesture.
    pub fn find(&self, gesture: ViewGesture) -> Option<&ViewOperationBinding> {
        self.bindings.get(&gesture)
    }

    /// Install a binding, replacing the previous one for its gesture.
    pub fn bind(&mut self, binding: ViewOperationBinding) {
        self.bindings.insert(binding.gesture, binding);
    }

    pub fn bindings(&self) -> impl Iterator<Item = &ViewOperationBinding> {
        self.bindings.values()
    }
}

impl Default for OperationSettings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        for binding in [
            ViewOperationBinding::new(
                ViewGesture::Zoom,
                InputTrigger::drag_or_wheel(MouseButton::Right, Modifiers::NONE),
            ),
            ViewOperationBinding::new(
                ViewGesture::Pan,
                InputTrigger::drag(MouseButton::Middle, Modifiers::SHIFT),
            ),
            ViewOperationBinding::new(
                ViewGesture::Rotation,
                InputTrigger::drag(MouseButton::Middle, Modifiers::NONE),
            ),
            ViewOperationBinding::new(
                ViewGesture::Spin,
                InputTrigger::drag(MouseButton::Middle, Modifiers::CTRL),
            ),
            ViewOperationBinding::new(
                ViewGesture::Focus,
                InputTrigger::drag(MouseButton::Left, Modifiers::CTRL),
            ),
            ViewOperationBinding::new(
                ViewGesture::PerspectiveToggle,
                InputTrigger::drag(MouseButton::Middle, Modifiers::ALT),
            ),
        ] {
            bindings.insert(binding.gesture, binding);
        }

        Self {
            wheel_zoom_sign: 1,
            auto_focus: true,
            zoom_to_cursor: true,
            z_locked_rotation: false,
            bindings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_gesture_has_a_default_binding() {
        let settings = OperationSettings::default();
        for gesture in ViewGesture::ALL {
            let binding = settings.find(gesture).expect("missing default binding");
            assert_eq!(binding.gesture, gesture);
            assert_eq!(binding.sensitivity, 1.0);
            assert!(binding.scale_min > 0.0);
            assert!(binding.scale_max > binding.scale_min);
        }
    }

    #[test]
    fn test_bind_replaces_per_gesture() {
        let mut settings = OperationSettings::default();
        let custom = ViewOperationBinding::new(
            ViewGesture::Zoom,
            InputTrigger::wheel(Modifiers::CTRL),
        )
        .with_sensitivity(-1.0)
        .with_scale_range(0.1, 10.0);

        settings.bind(custom);

        let found = settings.find(ViewGesture::Zoom).unwrap();
        assert_eq!(found.sensitivity, -1.0);
        assert_eq!(found.scale_min, 0.1);
        assert!(found.trigger.wheel);
        assert_eq!(settings.bindings().count(), ViewGesture::ALL.len());
    }

    #[test]
    fn test_modifier_bitset() {
        let combo = Modifiers::SHIFT.with(Modifiers::CTRL);
        assert!(combo.contains(Modifiers::SHIFT));
        assert!(combo.contains(Modifiers::CTRL));
        assert!(!combo.contains(Modifiers::ALT));
        assert!(Modifiers::NONE.is_empty());
    }
}
