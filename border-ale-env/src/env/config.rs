//! Configuration of [`AleEnv`](super::AleEnv).
//!
//! If environment variable `ATARI_ROM_DIR` exists, it is used as the directory
//! from which ROM images of the Atari games is loaded. Otherwise `$HOME/atari_rom`
//! is used.
//!
//! The display target used when `use_sdl` is set is taken from the `DISPLAY`
//! environment variable when the configuration is created and never read again.
use crate::{preprocess::ResizeMode, AleEnvError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    env,
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

fn parse_resize_mode(mode: Option<&str>) -> Result<ResizeMode> {
    match mode.map(ResizeMode::from_str) {
        Some(Ok(mode)) => Ok(mode),
        _ => Err(
            AleEnvError::ConfigError("crop_or_scale must be either crop or scale".to_string())
                .into(),
        ),
    }
}

fn default_rom_dir() -> String {
    if let Ok(var) = env::var("ATARI_ROM_DIR") {
        var
    } else if let Some(home) = dirs::home_dir() {
        home.join("atari_rom").to_string_lossy().into_owned()
    } else {
        "".to_string()
    }
}

fn default_display() -> Option<String> {
    env::var("DISPLAY").ok()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// Configurations of [`AleEnv`](super::AleEnv).
pub struct AleEnvConfig {
    pub(super) rom_dir: String,
    pub(super) name: String,
    pub(super) seed: i32,
    pub(super) use_sdl: bool,
    #[serde(skip, default = "default_display")]
    pub(super) display: Option<String>,
    pub(super) n_last_screens: usize,
    pub(super) frame_skip: usize,
    pub(super) treat_life_lost_as_terminal: bool,
    pub(super) crop_or_scale: ResizeMode,
}

impl Default for AleEnvConfig {
    fn default() -> Self {
        Self {
            rom_dir: default_rom_dir(),
            name: "".to_string(),
            seed: 0,
            use_sdl: false,
            display: default_display(),
            n_last_screens: 4,
            frame_skip: 4,
            treat_life_lost_as_terminal: true,
            crop_or_scale: ResizeMode::Scale,
        }
    }
}

impl AleEnvConfig {
    /// Sets the directory of ROM images.
    pub fn rom_dir(mut self, rom_dir: impl Into<String>) -> Self {
        self.rom_dir = rom_dir.into();
        self
    }

    /// Sets the name of the game, e.g. `pong`, or the file name of the ROM.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the random seed of the emulator.
    pub fn seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Shows the screen in a window of the emulator.
    pub fn use_sdl(mut self, use_sdl: bool) -> Self {
        self.use_sdl = use_sdl;
        self
    }

    /// Sets the display target, overriding the one taken from `DISPLAY`.
    pub fn display(mut self, display: Option<String>) -> Self {
        self.display = display;
        self
    }

    /// Sets the number of stacked frames in the state.
    pub fn n_last_screens(mut self, n: usize) -> Self {
        self.n_last_screens = n;
        self
    }

    /// Sets the frame skip. Actions are always repeated 4 times.
    pub fn frame_skip(mut self, frame_skip: usize) -> Self {
        self.frame_skip = frame_skip;
        self
    }

    /// Ends an episode when a life is lost.
    pub fn treat_life_lost_as_terminal(mut self, v: bool) -> Self {
        self.treat_life_lost_as_terminal = v;
        self
    }

    /// Sets how screens are brought to 84x84.
    pub fn resize_mode(mut self, mode: ResizeMode) -> Self {
        self.crop_or_scale = mode;
        self
    }

    /// Sets how screens are brought to 84x84, either `"crop"` or `"scale"`.
    pub fn crop_or_scale(self, mode: &str) -> Result<Self> {
        let mode = parse_resize_mode(Some(mode))?;
        Ok(self.resize_mode(mode))
    }

    /// Path of the ROM image.
    ///
    /// `name` is taken as a file name if it has an extension, otherwise `.bin` is appended.
    pub fn rom_path(&self) -> PathBuf {
        let name = Path::new(&self.name);
        if name.extension().is_some() {
            Path::new(&self.rom_dir).join(name)
        } else {
            Path::new(&self.rom_dir).join(format!("{}.bin", self.name))
        }
    }

    pub(super) fn check(&self) -> Result<()> {
        if self.n_last_screens == 0 {
            return Err(
                AleEnvError::ConfigError("n_last_screens must be positive".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Constructs [`AleEnvConfig`] from YAML file.
    ///
    /// An unknown `crop_or_scale` is reported as [`AleEnvError::ConfigError`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let value: serde_yaml::Value = serde_yaml::from_reader(rdr)?;
        if let Some(mode) = value.get("crop_or_scale") {
            parse_resize_mode(mode.as_str())?;
        }
        let b = serde_yaml::from_value(value)?;
        Ok(b)
    }

    /// Saves [`AleEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
