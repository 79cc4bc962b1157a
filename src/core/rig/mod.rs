//=========================================================================
// Camera Rig
//=========================================================================
//
// Applies frame translations through the look/lock capability and keeps
// the eye above the ground plane.
//
// Architecture:
//   CameraRig<L: LookControl>
//     ├─ look: L                (owns position + orientation)
//     ├─ resting_height: f32    (flat floor)
//     └─ projection: Projection (handed to the renderer)
//
// Lock state machine:
// ```text
//   Unlocked ──request_lock() (click)──> Locked
//   Locked ──capability (Escape, focus loss)──> Unlocked
// ```
//
// The rig never reads or writes orientation; it only forwards it to the
// renderer inside a `CameraPose`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Quat, Vec3};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::motion::Translation;

//=== Module Declarations =================================================

mod look;

//=== Public API ==========================================================

pub use look::YawPitchLook;

//=== LockState ===========================================================

/// Exclusive pointer-capture state of the look capability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

//=== LookControl =========================================================

/// Look/lock capability the rig drives.
///
/// Implementations own the camera position and orientation. While locked
/// they update orientation from pointer motion on their own; the rig only
/// moves the position.
pub trait LookControl {
    /// Engages pointer capture. Called on pointer engagement.
    fn lock(&mut self);

    /// Current capture state.
    fn lock_state(&self) -> LockState;

    /// Moves along the look direction's right vector.
    fn move_right(&mut self, distance: f32);

    /// Moves along the look direction projected onto the ground plane.
    fn move_forward(&mut self, distance: f32);

    fn position(&self) -> Vec3;

    fn position_mut(&mut self) -> &mut Vec3;

    fn orientation(&self) -> Quat;
}

//=== Projection ==========================================================

/// Perspective parameters of the controlled camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Updates the aspect ratio from a surface size. Zero-sized surfaces
    /// (minimized windows) keep the previous ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            aspect: 4.0 / 3.0,
            near: 1.0,
            far: 1000.0,
        }
    }
}

//=== CameraPose ==========================================================

/// Snapshot of the camera handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
    pub projection: Projection,
}

//=== Contact =============================================================

/// Result of applying a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Eye is at or above resting height.
    Airborne,

    /// Eye dipped below resting height and was clamped back onto it.
    Landed,
}

//=== CameraRig ===========================================================

/// Moves the camera through a [`LookControl`] and clamps it to the floor.
pub struct CameraRig<L: LookControl> {
    look: L,
    resting_height: f32,
    projection: Projection,
}

impl<L: LookControl> CameraRig<L> {
    pub fn new(look: L, resting_height: f32, projection: Projection) -> Self {
        Self {
            look,
            resting_height,
            projection,
        }
    }

    //--- Movement ---------------------------------------------------------

    /// Places the eye at resting height (controller start).
    pub fn settle(&mut self) {
        self.look.position_mut().y = self.resting_height;
    }

    /// Applies one frame of movement, then enforces the ground floor.
    ///
    /// Horizontal components go through the capability so they follow the
    /// current look direction; the vertical component is written directly.
    /// On [`Contact::Landed`] the caller cancels vertical velocity and
    /// re-arms the jump.
    pub fn apply_translation(&mut self, translation: Translation) -> Contact {
        self.look.move_right(translation.right);
        self.look.move_forward(translation.forward);

        let position = self.look.position_mut();
        position.y += translation.up;

        if position.y < self.resting_height {
            trace!("Ground contact at y = {}", position.y);
            position.y = self.resting_height;
            Contact::Landed
        } else {
            Contact::Airborne
        }
    }

    //--- Lock -------------------------------------------------------------

    /// Requests pointer capture. Returns `false` if already locked.
    pub fn request_lock(&mut self) -> bool {
        if self.look.lock_state() == LockState::Locked {
            trace!("Lock requested while already locked");
            return false;
        }
        debug!("Requesting pointer lock");
        self.look.lock();
        true
    }

    pub fn lock_state(&self) -> LockState {
        self.look.lock_state()
    }

    //--- Accessors --------------------------------------------------------

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.look.position(),
            orientation: self.look.orientation(),
            projection: self.projection,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.look.position()
    }

    pub fn resting_height(&self) -> f32 {
        self.resting_height
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    pub fn look(&self) -> &L {
        &self.look
    }

    /// Mutable access for the host (pointer motion, capability unlock).
    pub fn look_mut(&mut self) -> &mut L {
        &mut self.look
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

    fn rig() -> CameraRig<YawPitchLook> {
        let mut rig = CameraRig::new(YawPitchLook::default(), 10.0, Projection::default());
        rig.settle();
        rig
    }

    fn up(distance: f32) -> Translation {
        Translation {
            up: distance,
            ..Translation::ZERO
        }
    }

    //=====================================================================
    // Ground Clamp
    //=====================================================================

    #[test]
    fn settle_places_eye_at_resting_height() {
        let rig = rig();
        assert_eq!(rig.position().y, 10.0);
    }

    #[test]
    fn dipping_below_floor_clamps_and_lands() {
        let mut rig = rig();

        let contact = rig.apply_translation(up(-8.8));

        assert_eq!(contact, Contact::Landed);
        assert_eq!(rig.position().y, 10.0);
    }

    #[test]
    fn rising_stays_airborne() {
        let mut rig = rig();

        assert_eq!(rig.apply_translation(up(2.5)), Contact::Airborne);
        assert!(approx_eq(rig.position().y, 12.5));
    }

    #[test]
    fn resting_exactly_on_floor_is_not_a_landing() {
        let mut rig = rig();
        assert_eq!(rig.apply_translation(Translation::ZERO), Contact::Airborne);
        assert_eq!(rig.position().y, 10.0);
    }

    #[test]
    fn falling_from_height_lands_on_floor() {
        let mut rig = rig();
        rig.apply_translation(up(30.0));

        assert_eq!(rig.apply_translation(up(-29.0)), Contact::Airborne);
        assert_eq!(rig.apply_translation(up(-5.0)), Contact::Landed);
        assert_eq!(rig.position().y, 10.0);
    }

    //=====================================================================
    // Horizontal Movement
    //=====================================================================

    #[test]
    fn forward_translation_moves_along_look_direction() {
        let mut rig = rig();

        rig.apply_translation(Translation {
            forward: 5.0,
            ..Translation::ZERO
        });

        let p = rig.position();
        assert!(approx_eq(p.z, -5.0));
        assert!(approx_eq(p.x, 0.0));
    }

    #[test]
    fn right_translation_follows_yaw() {
        let mut rig = rig();
        rig.request_lock();
        rig.look_mut().set_yaw(std::f32::consts::FRAC_PI_2);

        rig.apply_translation(Translation {
            right: 2.0,
            ..Translation::ZERO
        });

        // Facing -X, right points to -Z.
        let p = rig.position();
        assert!(approx_eq(p.z, -2.0));
        assert!(approx_eq(p.x, 0.0));
    }

    //=====================================================================
    // Lock State Machine
    //=====================================================================

    #[test]
    fn starts_unlocked() {
        assert_eq!(rig().lock_state(), LockState::Unlocked);
    }

    #[test]
    fn request_lock_engages_capture() {
        let mut rig = rig();
        assert!(rig.request_lock());
        assert_eq!(rig.lock_state(), LockState::Locked);
    }

    #[test]
    fn redundant_lock_request_is_a_no_op() {
        let mut rig = rig();
        rig.request_lock();
        assert!(!rig.request_lock());
        assert_eq!(rig.lock_state(), LockState::Locked);
    }

    #[test]
    fn capability_unlock_allows_relock() {
        let mut rig = rig();
        rig.request_lock();
        rig.look_mut().unlock();

        assert_eq!(rig.lock_state(), LockState::Unlocked);
        assert!(rig.request_lock());
    }

    //=====================================================================
    // Pose & Projection
    //=====================================================================

    #[test]
    fn pose_carries_position_and_projection() {
        let mut rig = rig();
        rig.resize(1920, 1080);

        let pose = rig.pose();

        assert_eq!(pose.position, Vec3::new(0.0, 10.0, 0.0));
        assert!(approx_eq(pose.projection.aspect, 1920.0 / 1080.0));
        assert_eq!(pose.projection.fov_y_degrees, 75.0);
    }

    #[test]
    fn zero_sized_resize_keeps_aspect() {
        let mut projection = Projection::default();
        projection.resize(0, 600);
        assert!(approx_eq(projection.aspect, 4.0 / 3.0));
    }
}
