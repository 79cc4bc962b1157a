//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use walkcam::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Controller
pub use crate::controller::{Controller, ControllerBuilder};

// Host capabilities
pub use crate::core::host::{EventSource, ListenerRegistry, Renderer, StartError};

// Input
pub use crate::core::input::{InputEvent, KeyBindings, KeyCode, MouseButton, MoveAction};

// Rig
pub use crate::core::rig::{CameraPose, LockState, LookControl, YawPitchLook};

// Scheduling
pub use crate::core::scheduler::{Clock, FixedClock, FixedStep, FrameStep, SystemClock, TickControl};

// Scene
pub use crate::core::scene::Scene;
