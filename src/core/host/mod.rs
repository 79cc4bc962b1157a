//=========================================================================
// Host Bridge
//=========================================================================
//
// Bridges host environments (winit window, headless driver) with the
// controller.
//
// Components:
// - `interface`: Capability traits and error definitions (the contract)
// - `listeners`: In-process listener registry
//
//=========================================================================

//=== Module Declarations =================================================

mod interface;
mod listeners;

//=== Public API ==========================================================

pub use interface::{EventSource, ListenerId, Renderer, StartError};
pub use listeners::ListenerRegistry;
