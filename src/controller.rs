//=========================================================================
// Controller
//
// Mountable first-person controller and its builder.
//
// Architecture:
// ```text
//     ControllerBuilder  ──build()──>  Controller  ──start()──>  [Live]
//         │                               │                       │
//         ├─ with_move_speed()            ├─ dispatch(event)      ├─ tick(dt) / frame()
//         ├─ with_gravity()               │    └─ InputState      │    ├─ MotionIntegrator
//         └─ with_bindings() ...          │                       │    ├─ CameraRig
//                                         └─ stop()  <────────────┘    └─ Renderer
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, error, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::host::{EventSource, ListenerId, Renderer, StartError};
use crate::core::input::{InputEvent, InputState, KeyBindings, KeyResponse, ListenerKind};
use crate::core::motion::{MotionConfig, MotionIntegrator};
use crate::core::rig::{CameraRig, Contact, LookControl, Projection};
use crate::core::scene::Scene;
use crate::core::scheduler::{Clock, FrameScheduler, FrameStep, TickControl};

//=== ControllerBuilder ===================================================

/// Builder for configuring and constructing a [`Controller`].
///
/// # Default Values
///
/// - **Move speed**: 5.0
/// - **Damping**: 10.0
/// - **Gravity**: 980.0
/// - **Jump impulse**: 10.0
/// - **Resting height**: 10.0
/// - **Field of view**: 75°, clip planes 1.0 to 1000.0
/// - **Bindings**: WASD / arrows to move, Space to jump
/// - **Scene**: [`Scene::showcase`]
///
/// # Examples
///
/// ```
/// use walkcam::ControllerBuilder;
/// use walkcam::core::host::ListenerRegistry;
/// use walkcam::core::rig::YawPitchLook;
/// use walkcam::core::scheduler::FixedClock;
/// # use walkcam::core::{host::Renderer, rig::CameraPose, scene::Scene};
/// # struct NullRenderer;
/// # impl Renderer for NullRenderer {
/// #     fn attach(&mut self, _: &str) -> bool { true }
/// #     fn detach(&mut self) {}
/// #     fn render(&mut self, _: &Scene, _: &CameraPose) {}
/// # }
///
/// let mut controller = ControllerBuilder::new()
///     .with_move_speed(8.0)
///     .with_resting_height(1.7)
///     .build(NullRenderer, YawPitchLook::default(), ListenerRegistry::new(), FixedClock::from_tps(60.0));
///
/// controller.start("viewport").unwrap();
/// controller.frame();
/// controller.stop();
/// ```
#[derive(Debug, Clone)]
pub struct ControllerBuilder {
    motion: MotionConfig,
    projection: Projection,
    bindings: KeyBindings,
    scene: Scene,
}

impl ControllerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            motion: MotionConfig::default(),
            projection: Projection::default(),
            bindings: KeyBindings::default(),
            scene: Scene::showcase(),
        }
    }

    /// Sets the horizontal speed factor applied to held axes.
    ///
    /// # Panics
    ///
    /// Panics if `speed` is not positive and finite.
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        assert!(speed > 0.0 && speed.is_finite(), "Move speed must be positive, got {}", speed);
        self.motion.move_speed = speed;
        self
    }

    /// Sets the horizontal damping rate (per second).
    ///
    /// # Panics
    ///
    /// Panics if `damping` is negative or not finite.
    pub fn with_damping(mut self, damping: f32) -> Self {
        assert!(damping >= 0.0 && damping.is_finite(), "Damping must be non-negative, got {}", damping);
        self.motion.damping = damping;
        self
    }

    /// Sets downward acceleration (units per second squared).
    ///
    /// # Panics
    ///
    /// Panics if `gravity` is negative or not finite.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        assert!(gravity >= 0.0 && gravity.is_finite(), "Gravity must be non-negative, got {}", gravity);
        self.motion.gravity = gravity;
        self
    }

    /// Sets the upward velocity added by a jump.
    ///
    /// # Panics
    ///
    /// Panics if `impulse` is negative or not finite.
    pub fn with_jump_impulse(mut self, impulse: f32) -> Self {
        assert!(impulse >= 0.0 && impulse.is_finite(), "Jump impulse must be non-negative, got {}", impulse);
        self.motion.jump_impulse = impulse;
        self
    }

    /// Sets the eye height the ground clamp holds the camera at.
    ///
    /// # Panics
    ///
    /// Panics if `height` is not finite.
    pub fn with_resting_height(mut self, height: f32) -> Self {
        assert!(height.is_finite(), "Resting height must be finite, got {}", height);
        self.motion.resting_height = height;
        self
    }

    /// Sets the vertical field of view in degrees.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < degrees < 180`.
    pub fn with_field_of_view(mut self, degrees: f32) -> Self {
        assert!(degrees > 0.0 && degrees < 180.0, "Field of view must be in (0, 180), got {}", degrees);
        self.projection.fov_y_degrees = degrees;
        self
    }

    /// Sets near/far clip distances.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < near < far`.
    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        assert!(near > 0.0 && near < far, "Clip planes must satisfy 0 < near < far, got {} / {}", near, far);
        self.projection.near = near;
        self.projection.far = far;
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    /// Builds a stopped controller around the given host capabilities.
    pub fn build<R, L, E, C>(self, renderer: R, look: L, events: E, clock: C) -> Controller<R, L, E, C>
    where
        R: Renderer,
        L: LookControl,
        E: EventSource,
        C: Clock,
    {
        debug!("Building controller: {:?}", self.motion);

        Controller {
            input: InputState::new(self.bindings),
            motion: MotionIntegrator::new(self.motion),
            rig: CameraRig::new(look, self.motion.resting_height, self.projection),
            scheduler: FrameScheduler::new(),
            scene: self.scene,
            listeners: Vec::with_capacity(ListenerKind::ALL.len()),
            renderer,
            events,
            clock,
        }
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Controller ==========================================================

/// First-person walking controller.
///
/// Owns every piece of mutable locomotion state (input, velocity, rig)
/// plus the host capabilities it was built with. Create via
/// [`ControllerBuilder`], mount with [`Controller::start`], feed events
/// through [`Controller::dispatch`] and frames through
/// [`Controller::frame`] or [`Controller::tick`].
pub struct Controller<R: Renderer, L: LookControl, E: EventSource, C: Clock> {
    input: InputState,
    motion: MotionIntegrator,
    rig: CameraRig<L>,
    scheduler: FrameScheduler,
    scene: Scene,
    listeners: Vec<ListenerId>,
    renderer: R,
    events: E,
    clock: C,
}

impl<R, L, E, C> Controller<R, L, E, C>
where
    R: Renderer,
    L: LookControl,
    E: EventSource,
    C: Clock,
{
    //--- Lifecycle --------------------------------------------------------

    /// Mounts the controller into the named host container.
    ///
    /// Attaches the render surface, clears input and velocity, re-arms the
    /// clock, places the eye at resting height, subscribes to key and click
    /// listeners and starts the frame loop.
    /// Starting a live controller is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::ContainerNotFound`] (after logging it) if the
    /// renderer cannot attach. Nothing is left registered in that case.
    pub fn start(&mut self, container: &str) -> Result<(), StartError> {
        if self.scheduler.is_running() {
            warn!("Controller already started");
            return Ok(());
        }

        if !self.renderer.attach(container) {
            error!("Container not found: {}", container);
            return Err(StartError::ContainerNotFound(container.to_owned()));
        }

        // Locomotion state lives for one mount; keys released while
        // stopped were never seen.
        self.input.reset();
        self.motion.reset();
        self.clock.reset();

        self.scene.attach_camera();
        self.rig.settle();

        for kind in ListenerKind::ALL {
            let id = self.events.subscribe(kind);
            self.listeners.push(id);
        }

        self.scheduler.start();
        info!("Controller started in '{}' at {}", container, self.rig.position());
        Ok(())
    }

    /// Tears the controller down: stops the frame loop, removes listeners
    /// and detaches the surface. Safe to call any number of times.
    pub fn stop(&mut self) {
        if !self.scheduler.stop() {
            debug!("Stop requested while not running");
            return;
        }

        for id in self.listeners.drain(..) {
            self.events.unsubscribe(id);
        }
        self.renderer.detach();
        self.scene.detach_camera();

        info!("Controller stopped after {} frames", self.scheduler.frames());
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    //--- Events -----------------------------------------------------------

    /// Applies a host event immediately.
    ///
    /// Events on channels without a live listener (before start, after
    /// stop) are dropped.
    pub fn dispatch(&mut self, event: InputEvent) {
        if !self.events.is_subscribed(event.kind()) {
            trace!("Dropping {:?}: no listener", event);
            return;
        }

        match event {
            InputEvent::KeyDown(key) => {
                if self.input.on_key_down(key) == KeyResponse::Jumped {
                    self.motion.jump();
                }
            }
            InputEvent::KeyUp(key) => {
                self.input.on_key_up(key);
            }
            InputEvent::Click(_) => {
                self.rig.request_lock();
            }
        }
    }

    //--- Frames -----------------------------------------------------------

    /// Samples the clock and runs one tick.
    pub fn frame(&mut self) -> TickControl {
        if !self.scheduler.is_running() {
            return TickControl::Exit;
        }
        let dt = self.clock.delta();
        self.tick(dt)
    }

    /// Runs one frame with an externally supplied `dt` (seconds):
    /// integrate, move the rig, clamp to the ground, render.
    ///
    /// Returns [`TickControl::Exit`] without doing anything once stopped.
    pub fn tick(&mut self, dt: f32) -> TickControl {
        if !self.scheduler.is_running() {
            trace!("Tick after teardown ignored");
            return TickControl::Exit;
        }

        let translation = self.motion.integrate(self.input.direction(), dt);

        if self.rig.apply_translation(translation) == Contact::Landed {
            self.motion.land();
            self.input.land();
        }

        self.renderer.render(&self.scene, &self.rig.pose());
        self.scheduler.record(dt);

        TickControl::Continue
    }

    /// Propagates a surface resize to the camera projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.resize(width, height);
    }

    //--- Accessors --------------------------------------------------------

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn velocity(&self) -> Vec3 {
        self.motion.velocity()
    }

    pub fn position(&self) -> Vec3 {
        self.rig.position()
    }

    pub fn rig(&self) -> &CameraRig<L> {
        &self.rig
    }

    /// Host access to the look capability (pointer motion, unlock).
    pub fn look_mut(&mut self) -> &mut L {
        self.rig.look_mut()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    /// Frames completed since construction.
    pub fn frames(&self) -> u64 {
        self.scheduler.frames()
    }
}

impl<R, L, E, C> FrameStep for Controller<R, L, E, C>
where
    R: Renderer,
    L: LookControl,
    E: EventSource,
    C: Clock,
{
    fn tick(&mut self, dt: f32) -> TickControl {
        Controller::tick(self, dt)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
