//=========================================================================
// Platform Subsystem
//
// Hosts a `Controller` inside a winit window on the main thread.
//
// Architecture:
// ```text
//  Winit Event Loop (main thread)
//   ├─ resumed            → create window, build + start controller
//   ├─ KeyboardInput      → input_processor → Controller::dispatch
//   ├─ MouseInput         → Click           → pointer lock request
//   ├─ DeviceEvent motion → PointerLook::rotate
//   ├─ Escape / focus out → PointerLook::unlock
//   ├─ Resized            → Controller::resize
//   ├─ RedrawRequested    → Controller::frame → request_redraw
//   └─ CloseRequested     → Controller::stop  → exit
// ```
//
// Events are applied as they arrive; there is no buffering between the
// event loop and the controller.
//
// Winit mandates the main thread on macOS/iOS, so `launch` must be
// called from it.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod window_host;

//=== External Crates =====================================================

use std::sync::Arc;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::controller::{Controller, ControllerBuilder};
use crate::core::host::{ListenerRegistry, StartError};
use crate::core::scheduler::{SystemClock, TickControl};
use window_host::{PointerLook, WindowRenderer, WINDOW_TITLE};

type WindowController = Controller<WindowRenderer, PointerLook, ListenerRegistry, SystemClock>;

//=== PlatformError =======================================================

/// Failures of the windowed host.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),

    /// The controller could not be mounted into the window.
    Start(StartError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::Start(e) => write!(f, "Controller start failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::Start(e) => Some(e),
        }
    }
}

impl From<StartError> for PlatformError {
    fn from(e: StartError) -> Self {
        Self::Start(e)
    }
}

//=== Entry Point =========================================================

/// Opens a window named `container` and runs the controller in it until
/// the window is closed.
///
/// # Errors
///
/// Returns [`PlatformError`] if the event loop cannot be created or fails,
/// or if the controller cannot be started (e.g. window creation failed).
///
/// # Panics
///
/// Panics if called off the main thread (macOS/iOS winit requirement).
///
/// # Examples
///
/// ```no_run
/// use walkcam::{launch, ControllerBuilder};
///
/// launch(ControllerBuilder::new().with_move_speed(8.0), "canvas-container")?;
/// # Ok::<(), walkcam::PlatformError>(())
/// ```
pub fn launch(builder: ControllerBuilder, container: &str) -> Result<(), PlatformError> {
    debug!(target: "platform", "Starting Winit event loop");

    let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
    let mut platform = Platform::new(builder, container);

    event_loop
        .run_app(&mut platform)
        .map_err(PlatformError::EventLoopExecution)?;

    match platform.failure.take() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

//=== Platform ============================================================

/// Winit application owning the window and the controller mounted in it.
///
/// Not Send/Sync; lives on the main thread for the whole event loop.
struct Platform {
    /// Consumed when the window is first created.
    builder: Option<ControllerBuilder>,

    /// Name the window answers to when the controller mounts.
    container: String,

    window: Option<Arc<Window>>,
    controller: Option<WindowController>,

    /// Start failure reported back to `launch`.
    failure: Option<StartError>,
}

impl Platform {
    fn new(builder: ControllerBuilder, container: &str) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            builder: Some(builder),
            container: container.to_owned(),
            window: None,
            controller: None,
            failure: None,
        }
    }

    /// Builds and starts the controller against the (possibly missing)
    /// window.
    fn mount(&mut self, builder: ControllerBuilder) -> Result<(), StartError> {
        let window = self.window.clone();
        let mut controller = builder.build(
            WindowRenderer::new(window.clone(), &self.container),
            PointerLook::new(window.clone()),
            ListenerRegistry::new(),
            SystemClock::new(),
        );

        if let Some(window) = &window {
            let size = window.inner_size();
            controller.resize(size.width, size.height);
        }

        // Kept even on failure so teardown stays uniform.
        let started = controller.start(&self.container);
        self.controller = Some(controller);
        started
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(controller) = &mut self.controller {
            controller.stop();
        }
        event_loop.exit();
    }

    fn release_pointer(&mut self) {
        if let Some(controller) = &mut self.controller {
            controller.look_mut().unlock();
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and mounts the controller on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(builder) = self.builder.take() else {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        };

        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(Arc::new(window));
            }
            Err(e) => error!(target: "platform", "Window creation failed: {}", e),
        }

        match self.mount(builder) {
            Ok(()) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(e) => {
                self.failure = Some(e);
                self.shutdown(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(size) => {
                if let Some(controller) = &mut self.controller {
                    controller.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => self.release_pointer(),

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.state == ElementState::Pressed
                    && key_event.physical_key == PhysicalKey::Code(WinitKeyCode::Escape)
                {
                    self.release_pointer();
                }

                match input_processor::process_key_event(&key_event) {
                    Some(event) => {
                        if let Some(controller) = &mut self.controller {
                            controller.dispatch(event);
                        }
                    }
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let (Some(event), Some(controller)) =
                    (input_processor::process_mouse_button(button, state), &mut self.controller)
                {
                    controller.dispatch(event);
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(controller) = &mut self.controller else {
                    return;
                };

                if controller.frame() == TickControl::Continue {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            _ => {}
        }
    }

    /// Raw motion keeps arriving while the cursor is grabbed, unlike
    /// `CursorMoved`.
    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if let Some(controller) = &mut self.controller {
                controller.look_mut().rotate(dx as f32, dy as f32);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
