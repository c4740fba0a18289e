mod config;
use crate::{
    emulator::{DISPLAY_SCREEN, RANDOM_SEED, SOUND},
    frame_stack::FrameStack,
    preprocess::{observe, OBS_SIZE},
    AleAction, AleEnvError, Emulator, EpisodicEnv,
};
use anyhow::Result;
pub use config::AleEnvConfig;
use log::{debug, info, warn};
use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

/// The number of emulator frames each action is repeated for.
pub const FRAME_SKIP: usize = 4;

/// Adapter of an Atari emulator to [`EpisodicEnv`].
///
/// Each action is repeated for [`FRAME_SKIP`] frames. The state is the stack of
/// the last `n_last_screens` observation frames, each of which is computed from
/// the maximum of two consecutive raw screens (see [`crate::preprocess`]).
/// The reward is clipped to its sign.
pub struct AleEnv<E: Emulator> {
    config: AleEnvConfig,

    emulator: E,

    // Minimal action set of the ROM
    legal_actions: Vec<AleAction>,

    // Shape of raw screens, (height, width, 3)
    screen_dim: (usize, usize, usize),

    // Buffer for the current raw screen
    screen: Vec<u8>,

    // Raw screen taken before the last frame of the previous action
    last_raw_screen: Vec<u8>,

    frames: FrameStack,

    reward: i32,

    // Lives in the game
    lives: i32,

    // If a life was lost in the last emulated frame
    lives_lost: bool,

    // Unclipped score and the number of actions in the current episode
    episode_return: i64,
    episode_steps: usize,
}

#[cfg(feature = "ale")]
impl AleEnv<crate::ale::Ale> {
    /// Builds an environment on the native Arcade Learning Environment.
    pub fn from_config(config: &AleEnvConfig) -> Result<Self> {
        Self::build(config, crate::ale::Ale::new())
    }
}

impl<E: Emulator> AleEnv<E> {
    /// Configures `emulator`, loads the ROM and starts the first episode.
    pub fn build(config: &AleEnvConfig, mut emulator: E) -> Result<Self> {
        config.check()?;

        emulator.set_int(RANDOM_SEED, config.seed)?;
        if config.use_sdl {
            if config.display.is_none() {
                return Err(AleEnvError::ConfigError(
                    "Please set DISPLAY environment variable for use_sdl=true".to_string(),
                )
                .into());
            }
            if cfg!(target_os = "macos") {
                // Sound doesn't work on macOS
                emulator.set_bool(SOUND, false)?;
            } else if cfg!(target_os = "linux") {
                emulator.set_bool(SOUND, true)?;
            }
            emulator.set_bool(DISPLAY_SCREEN, true)?;
        }

        if config.frame_skip != FRAME_SKIP {
            warn!(
                "frame_skip = {} is ignored, actions are repeated {} times",
                config.frame_skip, FRAME_SKIP
            );
        }

        let rom_path = config.rom_path();
        info!("Loading ROM {:?}", rom_path);
        emulator.load_rom(&rom_path)?;
        assert_eq!(
            emulator.frame_number(),
            0,
            "the emulator must be at frame 0 right after loading a ROM"
        );

        let legal_actions = emulator.minimal_actions();
        let screen_dim = (emulator.height(), emulator.width(), 3);
        let screen_len = screen_dim.0 * screen_dim.1 * screen_dim.2;
        info!(
            "ROM loaded: {} legal actions, screen {}x{}",
            legal_actions.len(),
            screen_dim.0,
            screen_dim.1
        );

        let mut env = Self {
            config: config.clone(),
            emulator,
            legal_actions,
            screen_dim,
            screen: vec![0; screen_len],
            last_raw_screen: vec![0; screen_len],
            frames: FrameStack::new(config.n_last_screens, OBS_SIZE, OBS_SIZE),
            reward: 0,
            lives: 0,
            lives_lost: false,
            episode_return: 0,
            episode_steps: 0,
        };
        env.initialize()?;

        Ok(env)
    }

    /// Computes an observation frame from the current and the last raw screens.
    pub fn current_screen(&mut self) -> Result<Array2<f32>> {
        self.emulator.screen_rgb(&mut self.screen);
        let screen = ArrayView3::from_shape(self.screen_dim, self.screen.as_slice())?;
        let last_screen = ArrayView3::from_shape(self.screen_dim, self.last_raw_screen.as_slice())?;
        observe(screen, last_screen, self.config.crop_or_scale)
    }

    /// The newest frame of the state.
    pub fn latest_frame(&self) -> ArrayView2<'_, f32> {
        self.frames.latest()
    }

    /// Remaining lives as of the last emulated frame.
    pub fn lives(&self) -> i32 {
        self.lives
    }

    /// The minimal action set; action indices refer to this list.
    pub fn legal_actions(&self) -> &[AleAction] {
        &self.legal_actions
    }

    pub fn config(&self) -> &AleEnvConfig {
        &self.config
    }

    pub fn emulator(&self) -> &E {
        &self.emulator
    }

    /// Sum of unclipped rewards since the last [`EpisodicEnv::initialize`].
    pub fn episode_return(&self) -> i64 {
        self.episode_return
    }

    /// The number of actions since the last [`EpisodicEnv::initialize`].
    pub fn episode_steps(&self) -> usize {
        self.episode_steps
    }
}

impl<E: Emulator> EpisodicEnv for AleEnv<E> {
    /// Stacked frames of shape `(n_last_screens, 84, 84)` in `[-1, 1)`.
    type State = Array3<f32>;

    fn state(&self) -> Array3<f32> {
        let state = self.frames.to_array();
        assert_eq!(
            state.dim(),
            (self.config.n_last_screens, OBS_SIZE, OBS_SIZE)
        );
        state
    }

    fn reward(&self) -> i32 {
        self.reward
    }

    fn is_terminal(&self) -> bool {
        if self.config.treat_life_lost_as_terminal {
            self.lives_lost || self.emulator.is_game_over()
        } else {
            self.emulator.is_game_over()
        }
    }

    fn number_of_actions(&self) -> usize {
        self.legal_actions.len()
    }

    fn receive_action(&mut self, action: usize) -> Result<i32> {
        assert!(
            !self.is_terminal(),
            "receive_action() was called after the episode ended"
        );
        assert!(
            action < self.legal_actions.len(),
            "action index {} out of range (number of actions: {})",
            action,
            self.legal_actions.len()
        );
        let act = self.legal_actions[action];

        let mut raw_reward = 0;
        for i in 0..FRAME_SKIP {
            // The last screen must be stored before executing the last frame
            if i == FRAME_SKIP - 1 {
                self.emulator.screen_rgb(&mut self.last_raw_screen);
            }

            raw_reward += self.emulator.act(act);

            let lives = self.emulator.lives();
            self.lives_lost = self.lives > lives;
            self.lives = lives;

            // On early exit last_raw_screen keeps the screen of the previous action
            if self.is_terminal() {
                break;
            }
        }

        let frame = self.current_screen()?;
        self.frames.push(frame.view());

        self.reward = raw_reward.signum();
        self.episode_return += raw_reward as i64;
        self.episode_steps += 1;

        if self.is_terminal() {
            debug!(
                "Episode ended: steps = {}, return = {}, lives = {}, game over = {}",
                self.episode_steps,
                self.episode_return,
                self.lives,
                self.emulator.is_game_over()
            );
        }

        Ok(self.reward)
    }

    fn initialize(&mut self) -> Result<()> {
        if self.emulator.is_game_over() {
            self.emulator.reset_game();
        }

        self.reward = 0;

        self.emulator.screen_rgb(&mut self.last_raw_screen);
        let frame = self.current_screen()?;
        self.frames.fill(frame.view());

        self.lives_lost = false;
        self.lives = self.emulator.lives();
        self.episode_return = 0;
        self.episode_steps = 0;

        Ok(())
    }
}
