//! An adapter of the [Arcade Learning Environment](https://github.com/mgbellemare/Arcade-Learning-Environment)
//! to episodic reinforcement learning environments for [`Border`](https://crates.io/crates/border).
//!
//! [`AleEnv`] repeats each action for 4 frames, takes the maximum of the last two raw
//! screens, converts it to luminance, resizes it to 84x84 and normalizes it into
//! `[-1, 1)`. The state is the stack of the last `n_last_screens` such frames and the
//! reward is clipped to `{-1, 0, 1}`. Losing a life optionally ends an episode.
//!
//! The emulator is accessed through the [`Emulator`] trait. With the default feature
//! `ale`, [`ale::Ale`] implements it on the native library. You need to place Atari ROM
//! images under the directory specified by environment variable `ATARI_ROM_DIR`.
//! An easy way to do this is to use [AutoROM](https://pypi.org/project/AutoROM/)
//! Python package.
//!
//! ```bash
//! pip install autorom
//! mkdir $HOME/atari_rom
//! AutoROM --install-dir $HOME/atari_rom
//! export ATARI_ROM_DIR=$HOME/atari_rom
//! ```
//!
//! Here is an example running episodes with a random policy. It uses
//! [`ScriptedEmulator`](util::test::ScriptedEmulator) in place of the native emulator;
//! `AleEnv::from_config(&config)` builds the environment on a real ROM.
//!
//! ```
//! use anyhow::Result;
//! use border_ale_env::{
//!     util::{eval, test::ScriptedEmulator, RandomPolicy},
//!     AleEnv, AleEnvConfig, EpisodicEnv,
//! };
//!
//! fn main() -> Result<()> {
//!     fastrand::seed(42);
//!
//!     let config = AleEnvConfig::default().name("pong").crop_or_scale("crop")?;
//!     let emulator = ScriptedEmulator::default().with_game_over_at(100);
//!     let mut env = AleEnv::build(&config, emulator)?;
//!     assert_eq!(env.state().shape(), &[4, 84, 84]);
//!
//!     let mut policy = RandomPolicy::new(env.number_of_actions());
//!     let returns = eval(&mut env, &mut policy, 1)?;
//!     assert_eq!(returns, vec![0]);
//!
//!     Ok(())
//! }
//! ```
mod act;
#[cfg(feature = "ale")]
pub mod ale;
mod base;
pub mod emulator;
mod env;
mod error;
mod frame_stack;
pub mod preprocess;
pub mod util;
pub use act::AleAction;
pub use base::{EpisodicEnv, Policy};
pub use emulator::Emulator;
pub use env::{AleEnv, AleEnvConfig, FRAME_SKIP};
pub use error::AleEnvError;
pub use frame_stack::FrameStack;
