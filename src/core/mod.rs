//=========================================================================
// Core Systems
//
// Host-independent pieces of the first-person controller.
//
// Pipeline per frame:
// ```text
//   InputEvent ──dispatch──> InputState ─┐
//                                         ├─> MotionIntegrator ─> CameraRig ─> Renderer
//   Clock ──────────delta──────────────────┘
// ```
//
// Responsibilities:
// - `input`: key bindings, move direction, jump gate
// - `motion`: damping, gravity and input override
// - `rig`: look/lock capability wrapper and ground clamp
// - `scheduler`: frame liveness, clocks and fixed-step driving
// - `host`: capability traits the host implements
// - `scene`: static content handed to the renderer
//
// Notes:
// Nothing in here touches a window or an event loop. Hosts plug in
// through the traits in `host`, `rig` and `scheduler`.
//
//=========================================================================

pub mod host;
pub mod input;
pub mod motion;
pub mod rig;
pub mod scene;
pub mod scheduler;
