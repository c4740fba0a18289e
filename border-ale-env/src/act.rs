//! Controller inputs of the Atari 2600.
use num_derive::FromPrimitive;
use serde::{Deserialize, Serialize};

/// An action code understood by the Arcade Learning Environment.
///
/// The minimal action set of a ROM is an ordered subset of these codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
#[repr(i32)]
pub enum AleAction {
    Noop = 0,
    Fire = 1,
    Up = 2,
    Right = 3,
    Left = 4,
    Down = 5,
    UpRight = 6,
    UpLeft = 7,
    DownRight = 8,
    DownLeft = 9,
    UpFire = 10,
    RightFire = 11,
    LeftFire = 12,
    DownFire = 13,
    UpRightFire = 14,
    UpLeftFire = 15,
    DownRightFire = 16,
    DownLeftFire = 17,
}

impl AleAction {
    /// Returns the raw code passed to the emulator.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Default for AleAction {
    fn default() -> Self {
        AleAction::Noop
    }
}
