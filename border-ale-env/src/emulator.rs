//! Interface to the emulator driven by [`AleEnv`](crate::AleEnv).
use crate::AleAction;
use anyhow::Result;
use std::path::Path;

/// Option key of the random seed of the emulator.
pub const RANDOM_SEED: &str = "random_seed";

/// Option key enabling sound output.
pub const SOUND: &str = "sound";

/// Option key enabling the display window of the emulator.
pub const DISPLAY_SCREEN: &str = "display_screen";

/// The part of an Atari emulator used by [`AleEnv`](crate::AleEnv).
///
/// [`Ale`](crate::ale::Ale) implements this trait over the native library.
/// [`ScriptedEmulator`](crate::util::test::ScriptedEmulator) is an in-memory
/// implementation for tests.
pub trait Emulator {
    /// Sets an integer option. Must be called before [`Emulator::load_rom`].
    fn set_int(&mut self, key: &str, value: i32) -> Result<()>;

    /// Sets a boolean option. Must be called before [`Emulator::load_rom`].
    fn set_bool(&mut self, key: &str, value: bool) -> Result<()>;

    /// Loads a ROM image.
    fn load_rom(&mut self, rom_path: &Path) -> Result<()>;

    /// Number of frames emulated since the ROM was loaded.
    fn frame_number(&self) -> i32;

    /// The minimal ordered set of actions meaningful for the loaded ROM.
    fn minimal_actions(&self) -> Vec<AleAction>;

    /// Emulates a single frame with the given action and returns the reward.
    fn act(&mut self, action: AleAction) -> i32;

    /// Remaining lives.
    fn lives(&self) -> i32;

    /// Whether the game has ended, after which [`Emulator::reset_game`] is needed.
    fn is_game_over(&self) -> bool;

    /// Width of the screen in pixels.
    fn width(&self) -> usize;

    /// Height of the screen in pixels.
    fn height(&self) -> usize;

    /// Writes the current screen into `buf` as row-major `height x width x 3` RGB bytes.
    fn screen_rgb(&self, buf: &mut [u8]);

    /// Starts a new game with the loaded ROM.
    fn reset_game(&mut self);
}
