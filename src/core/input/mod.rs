//=========================================================================
// Input System
//=========================================================================
//
// Keyboard-driven locomotion input.
//
// Architecture:
//   InputEvent → KeyBindings → MoveAction → InputState (direction, can_jump)
//
// Components:
// - `event`: Portable key/button/event types
// - `action`: Logical movement actions and their axes
// - `bindings`: Key → action table
// - `input_state`: Direction vector and jump gate
//
//=========================================================================

//=== Module Declarations =================================================

pub mod action;
pub mod bindings;
pub mod event;
mod input_state;

//=== Public API ==========================================================

pub use action::{Axis, MoveAction};
pub use bindings::KeyBindings;
pub use event::{InputEvent, KeyCode, ListenerKind, MouseButton};
pub use input_state::{Direction, InputState, KeyResponse};
