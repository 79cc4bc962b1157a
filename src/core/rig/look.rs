//=========================================================================
// Yaw/Pitch Look
//=========================================================================
//
// Host-agnostic look capability: position + yaw/pitch orientation + lock
// state. Pointer deltas rotate the view only while locked.
//
// Axes follow the usual right-handed camera convention: the camera looks
// down -Z at yaw 0, +Y is up, positive yaw turns left.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec3};

//=== Internal Dependencies ===============================================

use super::{LockState, LookControl};

//=== YawPitchLook ========================================================

/// Mouse-look state without any windowing attached.
#[derive(Debug, Clone, PartialEq)]
pub struct YawPitchLook {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    sensitivity: f32,
    lock: LockState,
}

impl YawPitchLook {
    /// Radians of rotation per pixel of pointer motion.
    pub const DEFAULT_SENSITIVITY: f32 = 0.002;

    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            lock: LockState::Unlocked,
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    //--- Orientation ------------------------------------------------------

    /// Applies a pointer delta in pixels. Ignored while unlocked.
    ///
    /// Pitch is clamped to straight up / straight down.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if self.lock != LockState::Locked {
            return;
        }
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    //--- Lock -------------------------------------------------------------

    /// Releases pointer capture (Escape, focus loss).
    pub fn unlock(&mut self) {
        self.lock = LockState::Unlocked;
    }

    //--- Basis ------------------------------------------------------------

    fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    fn ground_forward(&self) -> Vec3 {
        Vec3::Y.cross(self.right())
    }
}

impl Default for YawPitchLook {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

//=== LookControl Implementation ==========================================

impl LookControl for YawPitchLook {
    fn lock(&mut self) {
        self.lock = LockState::Locked;
    }

    fn lock_state(&self) -> LockState {
        self.lock
    }

    fn move_right(&mut self, distance: f32) {
        self.position += self.right() * distance;
    }

    fn move_forward(&mut self, distance: f32) {
        self.position += self.ground_forward() * distance;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn position_mut(&mut self) -> &mut Vec3 {
        &mut self.position
    }

    fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn forward_at_zero_yaw_is_negative_z() {
        let mut look = YawPitchLook::default();
        look.move_forward(3.0);
        assert!(approx_eq(look.position().z, -3.0));
        assert!(approx_eq(look.position().x, 0.0));
    }

    #[test]
    fn right_at_zero_yaw_is_positive_x() {
        let mut look = YawPitchLook::default();
        look.move_right(2.0);
        assert!(approx_eq(look.position().x, 2.0));
    }

    #[test]
    fn pitch_does_not_lift_forward_movement() {
        let mut look = YawPitchLook::default();
        look.lock();
        look.rotate(0.0, -500.0);
        assert!(look.pitch() > 0.0);

        look.move_forward(4.0);

        assert!(approx_eq(look.position().y, 0.0));
        assert!(approx_eq(look.position().z, -4.0));
    }

    #[test]
    fn rotate_is_ignored_while_unlocked() {
        let mut look = YawPitchLook::default();
        look.rotate(100.0, 100.0);
        assert_eq!(look.yaw(), 0.0);
        assert_eq!(look.pitch(), 0.0);
    }

    #[test]
    fn pointer_right_turns_right() {
        let mut look = YawPitchLook::default();
        look.lock();
        look.rotate(100.0, 0.0);
        assert!(approx_eq(look.yaw(), -0.2));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut look = YawPitchLook::default();
        look.lock();
        look.rotate(0.0, 100_000.0);
        assert!(approx_eq(look.pitch(), -FRAC_PI_2));
    }

    #[test]
    fn orientation_follows_yaw() {
        let mut look = YawPitchLook::default();
        look.set_yaw(FRAC_PI_2);
        let facing = look.orientation() * Vec3::NEG_Z;
        assert!(approx_eq(facing.x, -1.0));
        assert!(approx_eq(facing.z, 0.0));
    }

    #[test]
    fn sensitivity_scales_rotation() {
        let mut look = YawPitchLook::default().with_sensitivity(0.01);
        look.lock();
        look.rotate(10.0, 0.0);
        assert!(approx_eq(look.yaw(), -0.1));
    }
}
