//! Binding of the native Arcade Learning Environment.
use crate::{AleAction, AleEnvError, Emulator};
use anyhow::Result;
use log::warn;
use num_traits::FromPrimitive;
use std::ffi::CString;
use std::path::Path;

fn c_key(key: &str) -> Result<CString> {
    CString::new(key)
        .map_err(|_| AleEnvError::ConfigError(format!("Invalid option key: {:?}", key)).into())
}

/// Handle of an `ALEInterface` instance.
pub struct Ale {
    inner: *mut atari_env_sys::ALEInterface,
}

impl Drop for Ale {
    fn drop(&mut self) {
        unsafe {
            atari_env_sys::ALE_del(self.inner);
        }
    }
}

impl Default for Ale {
    fn default() -> Self {
        Self::new()
    }
}

impl Ale {
    /// Creates an emulator without a ROM.
    pub fn new() -> Self {
        Self {
            inner: unsafe { atari_env_sys::ALE_new() },
        }
    }

    fn rgb24_size(&self) -> usize {
        self.width() * self.height() * 3
    }
}

impl Emulator for Ale {
    fn set_int(&mut self, key: &str, value: i32) -> Result<()> {
        let key = c_key(key)?;
        unsafe {
            atari_env_sys::setInt(self.inner, key.as_ptr(), value);
        }
        Ok(())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        let key = c_key(key)?;
        unsafe {
            atari_env_sys::setBool(self.inner, key.as_ptr(), value);
        }
        Ok(())
    }

    fn load_rom(&mut self, rom_path: &Path) -> Result<()> {
        let err = |msg: &str| AleEnvError::RomLoadError(rom_path.to_path_buf(), msg.to_string());

        if !rom_path.is_file() {
            return Err(err("no such file").into());
        }
        let path = rom_path.to_str().ok_or_else(|| err("path is not valid UTF-8"))?;
        let path = CString::new(path).map_err(|_| err("path contains a NUL byte"))?;
        unsafe {
            atari_env_sys::loadROM(self.inner, path.as_ptr());
        }
        Ok(())
    }

    fn frame_number(&self) -> i32 {
        unsafe { atari_env_sys::getFrameNumber(self.inner) }
    }

    fn minimal_actions(&self) -> Vec<AleAction> {
        let n = unsafe { atari_env_sys::getMinimalActionSize(self.inner) } as usize;
        let mut buf = vec![0i32; n];
        unsafe {
            atari_env_sys::getMinimalActionSet(self.inner, buf.as_mut_ptr());
        }
        buf.into_iter()
            .filter_map(|code| {
                let act = AleAction::from_i32(code);
                if act.is_none() {
                    warn!("Skipped unknown action code {} in the minimal action set", code);
                }
                act
            })
            .collect()
    }

    fn act(&mut self, action: AleAction) -> i32 {
        unsafe { atari_env_sys::act(self.inner, action.code()) }
    }

    fn lives(&self) -> i32 {
        unsafe { atari_env_sys::lives(self.inner) }
    }

    fn is_game_over(&self) -> bool {
        unsafe { atari_env_sys::game_over(self.inner) }
    }

    fn width(&self) -> usize {
        unsafe { atari_env_sys::getScreenWidth(self.inner) as usize }
    }

    fn height(&self) -> usize {
        unsafe { atari_env_sys::getScreenHeight(self.inner) as usize }
    }

    /// Always RGB regardless of endianness.
    fn screen_rgb(&self, buf: &mut [u8]) {
        assert_eq!(buf.len(), self.rgb24_size());
        unsafe {
            atari_env_sys::getScreenRGB2(self.inner, buf.as_mut_ptr());
        }
    }

    fn reset_game(&mut self) {
        unsafe {
            atari_env_sys::reset_game(self.inner);
        }
    }
}
