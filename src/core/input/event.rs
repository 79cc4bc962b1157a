//=========================================================================
// Input Event Types
//
// Defines the engine-side representation of host input events.
//
// This module abstracts away platform-specific input (e.g. Winit, a
// headless test driver) into a small, portable format consumed by the
// controller.
//
// Responsibilities:
// - Represent keyboard keys and mouse buttons in a stable, portable way
// - Categorize events by the listener they are delivered through
//
// Event Flow:
// ```text
// Host (Winit / test driver)
//         ↓
//    InputEvent (this module)
//         ↓
//    Controller::dispatch() ── ListenerKind subscribed? ──→ InputState / CameraRig
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced:
/// `KeyW` is the same key on QWERTY and AZERTY layouts, which keeps the
/// movement cluster where the hand expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    /// Fallback for keys not explicitly mapped by the host.
    Unidentified,
}

//=== ListenerKind ========================================================

/// Host-level listener channels the controller registers on start.
///
/// Mirrors the three registrations a browser-style host offers
/// (`keydown`, `keyup`, `click`). Events arriving on a channel without a
/// live subscription are dropped by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    KeyDown,
    KeyUp,
    Click,
}

impl ListenerKind {
    /// Every channel the controller subscribes to, in registration order.
    pub const ALL: [ListenerKind; 3] = [Self::KeyDown, Self::KeyUp, Self::Click];
}

//=== InputEvent ==========================================================

/// Input event delivered by the host.
///
/// Key repeat is not filtered here: repeated `KeyDown`s for a held key
/// simply re-assert the same axis value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Pointer engagement on the render surface (lock request).
    Click(MouseButton),
}

impl InputEvent {
    /// The listener channel this event is delivered through.
    pub fn kind(&self) -> ListenerKind {
        match self {
            Self::KeyDown(_) => ListenerKind::KeyDown,
            Self::KeyUp(_) => ListenerKind::KeyUp,
            Self::Click(_) => ListenerKind::Click,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn events_report_their_listener_kind() {
        assert_eq!(InputEvent::KeyDown(KeyCode::KeyW).kind(), ListenerKind::KeyDown);
        assert_eq!(InputEvent::KeyUp(KeyCode::KeyW).kind(), ListenerKind::KeyUp);
        assert_eq!(InputEvent::Click(MouseButton::Left).kind(), ListenerKind::Click);
    }

    #[test]
    fn listener_kinds_are_distinct() {
        let kinds: HashSet<_> = ListenerKind::ALL.iter().copied().collect();
        assert_eq!(kinds.len(), ListenerKind::ALL.len());
    }

    #[test]
    fn key_events_compare_by_payload() {
        assert_eq!(InputEvent::KeyDown(KeyCode::Space), InputEvent::KeyDown(KeyCode::Space));
        assert_ne!(InputEvent::KeyDown(KeyCode::Space), InputEvent::KeyUp(KeyCode::Space));
        assert_ne!(InputEvent::KeyDown(KeyCode::KeyA), InputEvent::KeyDown(KeyCode::KeyD));
    }
}
