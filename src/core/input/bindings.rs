//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical keys to movement actions.
//
// Architecture:
//   KeyCode → HashMap → MoveAction
//
// Several keys may share an action (WASD and the arrow cluster); a key
// maps to at most one action.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{action::MoveAction, event::KeyCode};

//=== KeyBindings =========================================================

/// Key → action table consulted on every key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, MoveAction>,
}

impl KeyBindings {
    /// Creates an empty table (every key unmapped).
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an action, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, action: MoveAction) -> &mut Self {
        self.bindings.insert(key, action);
        self
    }

    /// Removes a key's binding. Returns the action it was bound to.
    pub fn unbind(&mut self, key: KeyCode) -> Option<MoveAction> {
        self.bindings.remove(&key)
    }

    /// Removes every key bound to `action`.
    pub fn unbind_action(&mut self, action: MoveAction) {
        self.bindings.retain(|_, bound| *bound != action);
    }

    //--- Lookup -----------------------------------------------------------

    /// Maps a key to its action. Unmapped keys return `None`.
    pub fn action_for(&self, key: KeyCode) -> Option<MoveAction> {
        self.bindings.get(&key).copied()
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    /// WASD + arrow keys for movement, Space for jump.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(KeyCode::KeyW, MoveAction::MoveForward)
            .bind(KeyCode::ArrowUp, MoveAction::MoveForward)
            .bind(KeyCode::KeyS, MoveAction::MoveBack)
            .bind(KeyCode::ArrowDown, MoveAction::MoveBack)
            .bind(KeyCode::KeyA, MoveAction::MoveLeft)
            .bind(KeyCode::ArrowLeft, MoveAction::MoveLeft)
            .bind(KeyCode::KeyD, MoveAction::MoveRight)
            .bind(KeyCode::ArrowRight, MoveAction::MoveRight)
            .bind(KeyCode::Space, MoveAction::Jump);
        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_wasd_and_arrows() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.action_for(KeyCode::KeyW), Some(MoveAction::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::ArrowUp), Some(MoveAction::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::KeyS), Some(MoveAction::MoveBack));
        assert_eq!(bindings.action_for(KeyCode::ArrowDown), Some(MoveAction::MoveBack));
        assert_eq!(bindings.action_for(KeyCode::KeyA), Some(MoveAction::MoveLeft));
        assert_eq!(bindings.action_for(KeyCode::ArrowLeft), Some(MoveAction::MoveLeft));
        assert_eq!(bindings.action_for(KeyCode::KeyD), Some(MoveAction::MoveRight));
        assert_eq!(bindings.action_for(KeyCode::ArrowRight), Some(MoveAction::MoveRight));
        assert_eq!(bindings.action_for(KeyCode::Space), Some(MoveAction::Jump));
        assert_eq!(bindings.len(), 9);
    }

    #[test]
    fn unmapped_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(KeyCode::KeyQ), None);
        assert_eq!(bindings.action_for(KeyCode::Unidentified), None);
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut bindings = KeyBindings::default();
        bindings.bind(KeyCode::Space, MoveAction::MoveForward);
        assert_eq!(bindings.action_for(KeyCode::Space), Some(MoveAction::MoveForward));
    }

    #[test]
    fn unbind_action_removes_all_keys_for_it() {
        let mut bindings = KeyBindings::default();
        bindings.unbind_action(MoveAction::MoveForward);

        assert_eq!(bindings.action_for(KeyCode::KeyW), None);
        assert_eq!(bindings.action_for(KeyCode::ArrowUp), None);
        assert_eq!(bindings.action_for(KeyCode::KeyS), Some(MoveAction::MoveBack));
    }

    #[test]
    fn unbind_returns_previous_action() {
        let mut bindings = KeyBindings::default();
        assert_eq!(bindings.unbind(KeyCode::Space), Some(MoveAction::Jump));
        assert_eq!(bindings.unbind(KeyCode::Space), None);
    }

    #[test]
    fn empty_table_maps_nothing() {
        let bindings = KeyBindings::empty();
        assert!(bindings.is_empty());
        assert_eq!(bindings.action_for(KeyCode::KeyW), None);
    }
}
