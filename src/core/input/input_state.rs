//=========================================================================
// Input State
//
// Maintains the locomotion input snapshot for the controller.
// Consumes key events as they arrive and updates the move direction and
// jump availability.
//
// Responsibilities:
// - Track which bound movement keys are held
// - Derive the per-axis move direction (last press wins the axis)
// - Gate jump impulses on ground contact
//
// Notes:
// Mutated only by key events and by landing. The frame loop reads the
// direction once per tick.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashMap;
use std::fmt;

//=== External Crates =====================================================
use log::{debug, trace};

//=== Internal Modules ====================================================
use super::action::{Axis, MoveAction};
use super::bindings::KeyBindings;
use super::event::KeyCode;

//=== Direction ===========================================================

/// Horizontal move direction.
///
/// Each component is one of `-10`, `0` or `+10`. Stored unnormalized; the
/// motion integrator turns it into velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Direction {
    x: i8,
    z: i8,
}

impl Direction {
    /// No axis driven.
    pub const IDLE: Self = Self { x: 0, z: 0 };

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn z(&self) -> i8 {
        self.z
    }

    pub fn is_idle(&self) -> bool {
        self.x == 0 && self.z == 0
    }

    fn set(&mut self, axis: Axis, value: i8) {
        match axis {
            Axis::X => self.x = value,
            Axis::Z => self.z = value,
        }
    }
}

//=== KeyResponse =========================================================

/// What a key event did to the input state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Key is unmapped (or a release with nothing to undo).
    Ignored,

    /// A movement axis was updated.
    Moved,

    /// Jump accepted: the caller applies the impulse.
    Jumped,

    /// Jump pressed while airborne.
    JumpRefused,
}

//=== InputState ==========================================================

/// Move direction + jump gate, driven by key press/release.
pub struct InputState {
    bindings: KeyBindings,
    held: HashMap<KeyCode, MoveAction>,
    direction: Direction,
    can_jump: bool,
}

impl InputState {
    //--- Constructor ------------------------------------------------------
    //
    // Starts idle and grounded.
    //
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashMap::with_capacity(8),
            direction: Direction::IDLE,
            can_jump: true,
        }
    }

    //--- on_key_down() ----------------------------------------------------
    //
    // Movement keys claim their axis outright, overriding whatever the
    // opposite key wrote. Jump consumes `can_jump` whether or not it was
    // set, so a second press before landing is refused.
    //
    pub fn on_key_down(&mut self, key: KeyCode) -> KeyResponse {
        let Some(action) = self.bindings.action_for(key) else {
            trace!("Unmapped key down: {:?}", key);
            return KeyResponse::Ignored;
        };

        match action.axis() {
            Some(axis) => {
                self.held.insert(key, action);
                self.direction.set(axis, action.drive());
                KeyResponse::Moved
            }
            None => {
                let accepted = self.can_jump;
                self.can_jump = false;
                if accepted {
                    debug!("Jump accepted");
                    KeyResponse::Jumped
                } else {
                    debug!("Jump refused: airborne");
                    KeyResponse::JumpRefused
                }
            }
        }
    }

    //--- on_key_up() ------------------------------------------------------
    //
    // Releasing a movement key hands the axis to a still-held opposite
    // key, then to another held key of the same action, else clears it.
    //
    pub fn on_key_up(&mut self, key: KeyCode) -> KeyResponse {
        let Some(action) = self.held.remove(&key) else {
            trace!("Key up without held binding: {:?}", key);
            return KeyResponse::Ignored;
        };
        let Some(axis) = action.axis() else {
            return KeyResponse::Ignored;
        };

        let value = match action.opposite() {
            Some(opposite) if self.is_action_held(opposite) => opposite.drive(),
            _ if self.is_action_held(action) => action.drive(),
            _ => 0,
        };

        self.direction.set(axis, value);
        KeyResponse::Moved
    }

    //--- land() -----------------------------------------------------------
    //
    // Called when the rig touches the ground.
    //
    pub fn land(&mut self) {
        self.can_jump = true;
    }

    //--- reset() ----------------------------------------------------------
    //
    // Back to idle and grounded. Bindings are kept.
    //
    pub fn reset(&mut self) {
        self.held.clear();
        self.direction = Direction::IDLE;
        self.can_jump = true;
    }

    //--- Queries ----------------------------------------------------------

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    fn is_action_held(&self, action: MoveAction) -> bool {
        self.held.values().any(|held| *held == action)
    }
}

//=== Debug Trait =========================================================
//
// Example:
//
// ```text
// InputState { direction: (0, -10), can_jump: true, held: ["KeyW"] }
// ```
//
impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held: Vec<_> = self.held.keys().map(|k| format!("{:?}", k)).collect();

        f.debug_struct("InputState")
            .field("direction", &(self.direction.x, self.direction.z))
            .field("can_jump", &self.can_jump)
            .field("held", &held)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
