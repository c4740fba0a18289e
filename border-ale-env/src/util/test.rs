//! Utilities for test.
use crate::{
    preprocess::{SCREEN_HEIGHT, SCREEN_WIDTH},
    AleAction, AleEnvError, Emulator,
};
use anyhow::Result;
use std::{
    collections::{HashMap, VecDeque},
    path::{Path, PathBuf},
};

/// A deterministic in-memory [`Emulator`].
///
/// Rewards are popped from a script, one per emulated frame (0 when the
/// script is exhausted). Lives are lost and the game ends after given numbers
/// of emulated frames, counted from the last reset. The screen depends on the
/// frame number, so that every frame looks different.
#[derive(Debug, Clone)]
pub struct ScriptedEmulator {
    height: usize,
    width: usize,
    minimal_actions: Vec<AleAction>,
    initial_lives: i32,
    rewards: VecDeque<i32>,
    life_loss_at: Vec<usize>,
    game_over_at: Option<usize>,
    fail_load: bool,
    frame_number: i32,

    lives: i32,
    game_over: bool,
    episode_frames: usize,

    /// Integer options set so far.
    pub int_options: HashMap<String, i32>,

    /// Boolean options set so far.
    pub bool_options: HashMap<String, bool>,

    /// The loaded ROM.
    pub rom_path: Option<PathBuf>,

    /// Actions received, in order.
    pub actions: Vec<AleAction>,

    /// The number of calls of [`Emulator::reset_game`].
    pub n_resets: usize,
}

impl Default for ScriptedEmulator {
    fn default() -> Self {
        Self {
            height: SCREEN_HEIGHT,
            width: SCREEN_WIDTH,
            minimal_actions: vec![
                AleAction::Noop,
                AleAction::Fire,
                AleAction::Right,
                AleAction::Left,
            ],
            initial_lives: 3,
            rewards: VecDeque::new(),
            life_loss_at: vec![],
            game_over_at: None,
            fail_load: false,
            frame_number: 0,
            lives: 3,
            game_over: false,
            episode_frames: 0,
            int_options: HashMap::new(),
            bool_options: HashMap::new(),
            rom_path: None,
            actions: vec![],
            n_resets: 0,
        }
    }
}

impl ScriptedEmulator {
    /// Sets the screen size.
    pub fn with_screen(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    pub fn with_actions(mut self, actions: Vec<AleAction>) -> Self {
        self.minimal_actions = actions;
        self
    }

    pub fn with_lives(mut self, lives: i32) -> Self {
        self.initial_lives = lives;
        self.lives = lives;
        self
    }

    /// Rewards of the following frames.
    pub fn with_rewards(mut self, rewards: Vec<i32>) -> Self {
        self.rewards = rewards.into();
        self
    }

    /// A life is lost at each of the given frames, counted from 1 after a reset.
    pub fn with_life_loss_at(mut self, frames: Vec<usize>) -> Self {
        self.life_loss_at = frames;
        self
    }

    /// The game ends at the given frame, counted from 1 after a reset.
    pub fn with_game_over_at(mut self, frame: usize) -> Self {
        self.game_over_at = Some(frame);
        self
    }

    /// Makes [`Emulator::load_rom`] fail.
    pub fn with_failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Frame number reported right after loading a ROM.
    pub fn with_frame_number(mut self, frame_number: i32) -> Self {
        self.frame_number = frame_number;
        self
    }

    /// Frames emulated since the last reset.
    pub fn episode_frames(&self) -> usize {
        self.episode_frames
    }

    fn pixel(&self, y: usize, x: usize, c: usize) -> u8 {
        let t = (5 * self.frame_number as i64).rem_euclid(256) as usize;
        ((y + 2 * x + 3 * c + t) % 256) as u8
    }
}

impl Emulator for ScriptedEmulator {
    fn set_int(&mut self, key: &str, value: i32) -> Result<()> {
        self.int_options.insert(key.to_string(), value);
        Ok(())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.bool_options.insert(key.to_string(), value);
        Ok(())
    }

    fn load_rom(&mut self, rom_path: &Path) -> Result<()> {
        if self.fail_load {
            return Err(
                AleEnvError::RomLoadError(rom_path.to_path_buf(), "no such file".to_string())
                    .into(),
            );
        }
        self.rom_path = Some(rom_path.to_path_buf());
        Ok(())
    }

    fn frame_number(&self) -> i32 {
        self.frame_number
    }

    fn minimal_actions(&self) -> Vec<AleAction> {
        self.minimal_actions.clone()
    }

    fn act(&mut self, action: AleAction) -> i32 {
        self.actions.push(action);
        self.frame_number += 1;
        self.episode_frames += 1;

        if self.life_loss_at.contains(&self.episode_frames) {
            self.lives -= 1;
        }
        if self.lives <= 0 || self.game_over_at == Some(self.episode_frames) {
            self.game_over = true;
        }
        self.rewards.pop_front().unwrap_or(0)
    }

    fn lives(&self) -> i32 {
        self.lives
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn screen_rgb(&self, buf: &mut [u8]) {
        assert_eq!(buf.len(), self.height * self.width * 3);
        for (i, v) in buf.iter_mut().enumerate() {
            let (y, x, c) = (i / (self.width * 3), (i / 3) % self.width, i % 3);
            *v = self.pixel(y, x, c);
        }
    }

    fn reset_game(&mut self) {
        self.lives = self.initial_lives;
        self.game_over = false;
        self.episode_frames = 0;
        self.n_resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_with_negative_frame_number() {
        let emulator = ScriptedEmulator::default().with_frame_number(-7);
        let mut buf = vec![0u8; emulator.height() * emulator.width() * 3];
        emulator.screen_rgb(&mut buf);
        // -35 wraps to 221
        assert_eq!(buf[0], 221);
        assert_eq!(buf[1], 224);
    }
}
