//=========================================================================
// Window Host Capabilities
//=========================================================================
//
// Winit-backed implementations of the controller's host capabilities.
//
// Components:
// - `WindowRenderer`: surface = the OS window; reports the pose in the
//   window title (no GPU drawing)
// - `PointerLook`: cursor grab as pointer lock, raw mouse motion as look
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use glam::{Quat, Vec3};
use log::{debug, info, trace, warn};
use winit::window::{CursorGrabMode, Window};

//=== Internal Dependencies ===============================================

use crate::core::host::Renderer;
use crate::core::rig::{CameraPose, LockState, LookControl, YawPitchLook};
use crate::core::scene::Scene;

/// Window title shown before the first frame.
pub(crate) const WINDOW_TITLE: &str = "walkcam";

//=== WindowRenderer ======================================================

/// Renderer whose surface is the host window.
pub(crate) struct WindowRenderer {
    window: Option<Arc<Window>>,
    container: String,
    attached: bool,
    frames: u64,
}

impl WindowRenderer {
    /// Frames between title refreshes.
    const TITLE_INTERVAL: u64 = 30;

    /// `container` names the window; `None` means window creation failed.
    pub(crate) fn new(window: Option<Arc<Window>>, container: &str) -> Self {
        Self {
            window,
            container: container.to_owned(),
            attached: false,
            frames: 0,
        }
    }
}

impl Renderer for WindowRenderer {
    fn attach(&mut self, container: &str) -> bool {
        if self.window.is_none() || container != self.container {
            return false;
        }
        info!(target: "platform", "Surface attached to '{}'", container);
        self.attached = true;
        true
    }

    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Some(window) = &self.window {
            window.set_title(WINDOW_TITLE);
        }
        info!(target: "platform", "Surface detached from '{}'", self.container);
    }

    fn render(&mut self, scene: &Scene, camera: &CameraPose) {
        let Some(window) = self.window.as_ref().filter(|_| self.attached) else {
            return;
        };

        if self.frames % Self::TITLE_INTERVAL == 0 {
            let p = camera.position;
            window.set_title(&format!("{} | ({:.1}, {:.1}, {:.1})", WINDOW_TITLE, p.x, p.y, p.z));
            trace!(
                target: "platform",
                "Frame {}: {} props ({} platforms), {} lights, camera at {}",
                self.frames,
                scene.props.len(),
                scene.platforms().count(),
                scene.lights.len(),
                p
            );
        }
        self.frames += 1;
    }
}

//=== PointerLook =========================================================

/// Look capability backed by cursor grab on the host window.
pub(crate) struct PointerLook {
    inner: YawPitchLook,
    window: Option<Arc<Window>>,
}

impl PointerLook {
    pub(crate) fn new(window: Option<Arc<Window>>) -> Self {
        Self {
            inner: YawPitchLook::default(),
            window,
        }
    }

    /// Raw pointer motion (pixels). Ignored while unlocked.
    pub(crate) fn rotate(&mut self, dx: f32, dy: f32) {
        self.inner.rotate(dx, dy);
    }

    /// Releases capture (Escape, focus loss).
    pub(crate) fn unlock(&mut self) {
        if self.inner.lock_state() == LockState::Unlocked {
            return;
        }
        if let Some(window) = &self.window {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                warn!(target: "platform::input", "Cursor release failed: {}", e);
            }
            window.set_cursor_visible(true);
        }
        self.inner.unlock();
        debug!(target: "platform::input", "Pointer unlocked");
    }
}

impl LookControl for PointerLook {
    /// Grabs the cursor. `Locked` is not available everywhere (X11,
    /// Windows), so `Confined` is tried next.
    fn lock(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.inner.lock();
                debug!(target: "platform::input", "Pointer locked");
            }
            Err(e) => warn!(target: "platform::input", "Pointer lock unavailable: {}", e),
        }
    }

    fn lock_state(&self) -> LockState {
        self.inner.lock_state()
    }

    fn move_right(&mut self, distance: f32) {
        self.inner.move_right(distance);
    }

    fn move_forward(&mut self, distance: f32) {
        self.inner.move_forward(distance);
    }

    fn position(&self) -> Vec3 {
        self.inner.position()
    }

    fn position_mut(&mut self) -> &mut Vec3 {
        self.inner.position_mut()
    }

    fn orientation(&self) -> Quat {
        self.inner.orientation()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_without_window_cannot_attach() {
        let mut renderer = WindowRenderer::new(None, "canvas-container");
        assert!(!renderer.attach("canvas-container"));
    }

    #[test]
    fn detach_without_attach_is_a_no_op() {
        let mut renderer = WindowRenderer::new(None, "canvas-container");
        renderer.detach();
        assert!(!renderer.attached);
    }

    #[test]
    fn render_before_attach_draws_nothing() {
        let mut renderer = WindowRenderer::new(None, "canvas-container");
        let pose = CameraPose {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            projection: Default::default(),
        };
        renderer.render(&Scene::empty(), &pose);
        assert_eq!(renderer.frames, 0);
    }

    #[test]
    fn pointer_look_without_window_stays_unlocked() {
        let mut look = PointerLook::new(None);
        look.lock();
        assert_eq!(look.lock_state(), LockState::Unlocked);
    }

    #[test]
    fn pointer_look_moves_like_yaw_pitch_look() {
        let mut look = PointerLook::new(None);
        look.move_forward(2.0);
        look.move_right(1.0);
        assert_eq!(look.position(), Vec3::new(1.0, 0.0, -2.0));
    }
}
