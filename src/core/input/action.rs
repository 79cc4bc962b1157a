//=========================================================================
// Movement Actions
//=========================================================================
//
// Logical actions produced by the key bindings.
//
// Actions: what the player intends (walk forward, jump), independent of
// which physical key produced it. The input state interprets them.
//
//=========================================================================

//=== Axis ================================================================

/// Horizontal axis a movement action drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Strafe axis (left / right).
    X,

    /// Walk axis (forward / back).
    Z,
}

//=== MoveAction ==========================================================

/// High-level locomotion command mapped from a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Jump,
}

impl MoveAction {
    /// Magnitude written into a direction component while an axis is held.
    pub const STEP: i8 = 10;

    /// Axis this action drives, or `None` for `Jump`.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::MoveForward | Self::MoveBack => Some(Axis::Z),
            Self::MoveLeft | Self::MoveRight => Some(Axis::X),
            Self::Jump => None,
        }
    }

    /// Direction component this action writes on its axis.
    ///
    /// Forward is -Z (the camera looks down -Z); left is +X because the
    /// rig moves by `-velocity.x` along its right vector.
    pub fn drive(self) -> i8 {
        match self {
            Self::MoveForward => -Self::STEP,
            Self::MoveBack => Self::STEP,
            Self::MoveLeft => Self::STEP,
            Self::MoveRight => -Self::STEP,
            Self::Jump => 0,
        }
    }

    /// The action pulling the other way on the same axis.
    pub fn opposite(self) -> Option<MoveAction> {
        match self {
            Self::MoveForward => Some(Self::MoveBack),
            Self::MoveBack => Some(Self::MoveForward),
            Self::MoveLeft => Some(Self::MoveRight),
            Self::MoveRight => Some(Self::MoveLeft),
            Self::Jump => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
