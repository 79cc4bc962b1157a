//=========================================================================
// walkcam Library Root
//
// First-person walking camera controller.
//
// Responsibilities:
// - Expose the mountable controller (`Controller`, `ControllerBuilder`)
// - Expose host-independent core systems for custom hosts and tests
// - Keep the winit host (`platform`) private behind `launch()`
//
// Typical usage:
// ```no_run
// use walkcam::ControllerBuilder;
//
// fn main() {
//     walkcam::launch(ControllerBuilder::new(), "canvas-container").unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds input, motion, rig, scheduling and the host traits. Custom
// hosts (headless drivers, other windowing libraries) build on these.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` is the winit host: window, keyboard/mouse translation,
// pointer capture and the redraw loop.
//
// `controller` defines the controller facade and its builder.
//
mod controller;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use controller::{Controller, ControllerBuilder};
pub use platform::{launch, PlatformError};
