//! Errors in the library.
use std::path::PathBuf;
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum AleEnvError {
    /// Invalid configuration, e.g., display requested without a display target.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The ROM image could not be loaded.
    #[error("Failed to load ROM {0:?}: {1}")]
    RomLoadError(PathBuf, String),

    /// The ROM produces frames of a geometry other than NTSC.
    #[error("This ROM is for PAL (screen {height}x{width}). Please use ROMs for NTSC")]
    IncompatibleRomError {
        /// Height of the screen reported by the emulator.
        height: usize,

        /// Width of the screen reported by the emulator.
        width: usize,
    },
}
