//=========================================================================
// Host Interface
//=========================================================================
//
// Host-to-controller interface types (capabilities and errors).
//
// Defines the contract between a host (winit window, headless driver) and
// the controller, so hosts can be swapped without touching core logic.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::ListenerKind;
use crate::core::rig::CameraPose;
use crate::core::scene::Scene;

//=== Renderer ============================================================

/// Draws the scene and owns a surface attachable to a host container.
pub trait Renderer {
    /// Attaches the drawable surface to the named container.
    ///
    /// Returns `false` if the host has no such container.
    fn attach(&mut self, container: &str) -> bool;

    /// Detaches the surface from its container.
    fn detach(&mut self);

    /// Draws one frame.
    fn render(&mut self, scene: &Scene, camera: &CameraPose);
}

//=== EventSource =========================================================

/// Identifier returned by [`EventSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Host-level listener registration.
///
/// The controller subscribes on start and unsubscribes on stop; the host
/// only delivers events whose kind has a live subscription.
pub trait EventSource {
    fn subscribe(&mut self, kind: ListenerKind) -> ListenerId;

    /// Removes a listener. Returns `false` if it was not registered.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;

    fn is_subscribed(&self, kind: ListenerKind) -> bool;
}

//=== StartError ==========================================================

/// Controller start failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// The host has no container with the requested name.
    ContainerNotFound(String),
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContainerNotFound(name) => write!(f, "Container not found: {}", name),
        }
    }
}

impl std::error::Error for StartError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_error_display_names_container() {
        let err = StartError::ContainerNotFound("canvas-container".into());
        assert_eq!(err.to_string(), "Container not found: canvas-container");
    }

    #[test]
    fn start_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<StartError>();
    }
}
