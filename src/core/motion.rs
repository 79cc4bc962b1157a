//=========================================================================
// Motion Integrator
//=========================================================================
//
// Per-frame locomotion physics: damping, gravity, input override.
//
// Architecture:
//   (Direction, Velocity, Δt) → integrate() → (Velocity', Translation)
//
// Step order each frame:
//   1. Damp horizontal velocity toward zero
//   2. Accumulate gravity on the vertical axis
//   3. Held axes overwrite their horizontal velocity component
//   4. Emit a rig-relative translation (right, up, forward)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::trace;

//=== Internal Dependencies ===============================================

use super::input::Direction;

//=== MotionConfig ========================================================

/// Locomotion tuning constants.
///
/// # Default Values
///
/// - **move_speed**: 5.0 (scaled by the ±10 direction component)
/// - **damping**: 10.0 per second
/// - **gravity**: 980.0 (9.8 × mass factor 100)
/// - **jump_impulse**: 10.0
/// - **resting_height**: 10.0 (eye height above the ground plane)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    pub move_speed: f32,
    pub damping: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub resting_height: f32,
}

impl MotionConfig {
    pub const DEFAULT_MOVE_SPEED: f32 = 5.0;
    pub const DEFAULT_DAMPING: f32 = 10.0;
    pub const DEFAULT_GRAVITY: f32 = 9.8 * 100.0;
    pub const DEFAULT_JUMP_IMPULSE: f32 = 10.0;
    pub const DEFAULT_RESTING_HEIGHT: f32 = 10.0;
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: Self::DEFAULT_MOVE_SPEED,
            damping: Self::DEFAULT_DAMPING,
            gravity: Self::DEFAULT_GRAVITY,
            jump_impulse: Self::DEFAULT_JUMP_IMPULSE,
            resting_height: Self::DEFAULT_RESTING_HEIGHT,
        }
    }
}

//=== Translation =========================================================

/// Displacement for one frame, expressed in the rig's local axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Translation {
    /// Along the look direction's right vector.
    pub right: f32,

    /// World up.
    pub up: f32,

    /// Along the look direction projected onto the ground plane.
    pub forward: f32,
}

impl Translation {
    pub const ZERO: Self = Self {
        right: 0.0,
        up: 0.0,
        forward: 0.0,
    };
}

//=== MotionIntegrator ====================================================

/// Owns the controller's velocity and advances it frame by frame.
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    config: MotionConfig,
    velocity: Vec3,
}

impl MotionIntegrator {
    /// Creates an integrator at rest.
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            velocity: Vec3::ZERO,
        }
    }

    //--- Integration ------------------------------------------------------

    /// Advances velocity by `dt` seconds and returns the frame's translation.
    ///
    /// A zero, negative or non-finite `dt` leaves velocity untouched and
    /// yields [`Translation::ZERO`].
    pub fn integrate(&mut self, direction: Direction, dt: f32) -> Translation {
        if !(dt > 0.0 && dt.is_finite()) {
            trace!("Skipping integration for dt = {}", dt);
            return Translation::ZERO;
        }

        let MotionConfig {
            move_speed,
            damping,
            gravity,
            ..
        } = self.config;
        let v = &mut self.velocity;

        // Retained fraction floors at zero so long frames cannot flip sign.
        let keep = (1.0 - damping * dt).max(0.0);
        v.x *= keep;
        v.z *= keep;

        v.y -= gravity * dt;

        if direction.z() != 0 {
            v.z = f32::from(direction.z()) * move_speed;
        }
        if direction.x() != 0 {
            v.x = f32::from(direction.x()) * move_speed;
        }

        Translation {
            right: -v.x * dt,
            up: v.y * dt,
            forward: -v.z * dt,
        }
    }

    /// Adds the configured jump impulse to vertical velocity.
    pub fn jump(&mut self) {
        self.velocity.y += self.config.jump_impulse;
    }

    /// Cancels vertical velocity on ground contact.
    pub fn land(&mut self) {
        self.velocity.y = 0.0;
    }

    /// Brings the body to rest.
    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    //--- Queries ----------------------------------------------------------

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputState, KeyBindings, KeyCode};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn direction_for(keys: &[KeyCode]) -> Direction {
        let mut input = InputState::new(KeyBindings::default());
        for key in keys {
            input.on_key_down(*key);
        }
        input.direction()
    }

    //=====================================================================
    // Damping
    //=====================================================================

    #[test]
    fn idle_horizontal_velocity_decays_toward_zero() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        motion.set_velocity(Vec3::new(50.0, 0.0, -50.0));

        let mut last = motion.velocity();
        for _ in 0..60 {
            motion.integrate(Direction::IDLE, 1.0 / 60.0);
            let v = motion.velocity();
            assert!(v.x.abs() < last.x.abs());
            assert!(v.z.abs() < last.z.abs());
            assert!(v.x >= 0.0 && v.z <= 0.0, "decay crossed zero: {:?}", v);
            last = v;
        }
        assert!(last.x.abs() < 0.01);
    }

    #[test]
    fn long_frame_damping_stops_at_zero_without_overshoot() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        motion.set_velocity(Vec3::new(50.0, 0.0, -50.0));

        motion.integrate(Direction::IDLE, 0.5);

        assert_eq!(motion.velocity().x, 0.0);
        assert_eq!(motion.velocity().z, 0.0);
    }

    #[test]
    fn reset_brings_body_to_rest() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        motion.set_velocity(Vec3::new(50.0, 10.0, -50.0));

        motion.reset();

        assert_eq!(motion.velocity(), Vec3::ZERO);
    }

    #[test]
    fn single_step_damping_matches_formula() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        motion.set_velocity(Vec3::new(20.0, 0.0, 0.0));

        motion.integrate(Direction::IDLE, 0.05);

        // 20 - 20 * 10 * 0.05 = 10
        assert!(approx_eq(motion.velocity().x, 10.0));
    }

    //=====================================================================
    // Gravity & Jump
    //=====================================================================

    #[test]
    fn gravity_accumulates_downward() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());

        let t = motion.integrate(Direction::IDLE, 0.1);

        assert!(approx_eq(motion.velocity().y, -98.0));
        assert!(approx_eq(t.up, -9.8));
    }

    #[test]
    fn jump_then_gravity_matches_scenario() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        motion.jump();
        assert!(approx_eq(motion.velocity().y, 10.0));

        let t = motion.integrate(Direction::IDLE, 0.1);

        assert!(approx_eq(motion.velocity().y, -88.0));
        assert!(approx_eq(t.up, -8.8));
    }

    #[test]
    fn land_cancels_vertical_velocity_only() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        motion.set_velocity(Vec3::new(3.0, -40.0, 4.0));

        motion.land();

        assert_eq!(motion.velocity(), Vec3::new(3.0, 0.0, 4.0));
    }

    //=====================================================================
    // Input Override
    //=====================================================================

    #[test]
    fn held_forward_sets_z_velocity_and_forward_translation() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());

        let t = motion.integrate(direction_for(&[KeyCode::KeyW]), 0.1);

        assert!(approx_eq(motion.velocity().z, -50.0));
        assert!(approx_eq(t.forward, 5.0));
        assert!(approx_eq(t.right, 0.0));
    }

    #[test]
    fn held_left_moves_along_negative_right() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());

        let t = motion.integrate(direction_for(&[KeyCode::KeyA]), 0.1);

        assert!(approx_eq(motion.velocity().x, 50.0));
        assert!(approx_eq(t.right, -5.0));
    }

    #[test]
    fn held_axis_overrides_damping() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        let forward = direction_for(&[KeyCode::KeyW]);

        for _ in 0..10 {
            motion.integrate(forward, 1.0 / 60.0);
        }

        assert!(approx_eq(motion.velocity().z, -50.0));
    }

    #[test]
    fn released_axis_is_governed_by_damping() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        motion.integrate(direction_for(&[KeyCode::KeyD]), 0.01);
        assert!(approx_eq(motion.velocity().x, -50.0));

        motion.integrate(Direction::IDLE, 0.01);

        // -50 * (1 - 10 * 0.01) = -45
        assert!(approx_eq(motion.velocity().x, -45.0));
    }

    #[test]
    fn move_speed_scales_velocity() {
        let config = MotionConfig {
            move_speed: 2.0,
            ..MotionConfig::default()
        };
        let mut motion = MotionIntegrator::new(config);

        motion.integrate(direction_for(&[KeyCode::KeyS]), 0.1);

        assert!(approx_eq(motion.velocity().z, 20.0));
    }

    //=====================================================================
    // Degenerate Δt
    //=====================================================================

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());
        motion.set_velocity(Vec3::new(1.0, 2.0, 3.0));

        let t = motion.integrate(direction_for(&[KeyCode::KeyW]), 0.0);

        assert_eq!(t, Translation::ZERO);
        assert_eq!(motion.velocity(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn negative_and_nan_dt_are_no_ops() {
        let mut motion = MotionIntegrator::new(MotionConfig::default());

        assert_eq!(motion.integrate(Direction::IDLE, -0.1), Translation::ZERO);
        assert_eq!(motion.integrate(Direction::IDLE, f32::NAN), Translation::ZERO);
        assert_eq!(motion.velocity(), Vec3::ZERO);
    }

    #[test]
    fn default_config_constants() {
        let config = MotionConfig::default();
        assert_eq!(config.move_speed, 5.0);
        assert_eq!(config.damping, 10.0);
        assert!(approx_eq(config.gravity, 980.0));
        assert_eq!(config.jump_impulse, 10.0);
        assert_eq!(config.resting_height, 10.0);
    }
}
