//! Conversion of raw RGB screens into observations.
//!
//! The pipeline applied by [`observe`] is
//!
//! 1. element-wise maximum of the current and the previous raw screen, which
//!    removes flickering of sprites drawn on alternate frames,
//! 2. conversion to luminance,
//! 3. resizing to 84x84, either directly ([`ResizeMode::Scale`]) or by
//!    shrinking to 110x84 and cropping ([`ResizeMode::Crop`]),
//! 4. normalization of `[0, 255]` into `[-1, 1)`.
use crate::AleEnvError;
use anyhow::Result;
use image::GrayImage;
use ndarray::{s, Array2, ArrayView2, ArrayView3, Zip};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Height of NTSC screens.
pub const SCREEN_HEIGHT: usize = 210;

/// Width of the screen.
pub const SCREEN_WIDTH: usize = 160;

/// Height of PAL screens, which are not supported.
pub const PAL_SCREEN_HEIGHT: usize = 250;

/// Height and width of an observation frame.
pub const OBS_SIZE: usize = 84;

/// Height of the intermediate image in [`ResizeMode::Crop`].
pub const CROP_HEIGHT: usize = 110;

/// Rows discarded from the bottom of the intermediate image in [`ResizeMode::Crop`].
pub const BOTTOM_CROP: usize = 8;

/// Rows discarded from the top of the intermediate image in [`ResizeMode::Crop`].
pub const TOP_CROP: usize = CROP_HEIGHT - OBS_SIZE - BOTTOM_CROP;

const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.0722;
const LUMA_B: f64 = 0.7152;

/// How a screen is brought to 84x84.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResizeMode {
    /// Shrinks to 110x84 keeping the aspect ratio, then crops 84 rows.
    Crop,

    /// Resizes directly to 84x84.
    Scale,
}

impl Default for ResizeMode {
    fn default() -> Self {
        ResizeMode::Scale
    }
}

/// Converts an RGB image of shape `(h, w, 3)` into luminance.
pub fn luminance(rgb: ArrayView3<u8>) -> Array2<f64> {
    let (h, w, _) = rgb.dim();
    Array2::from_shape_fn((h, w), |(y, x)| {
        rgb[[y, x, 0]] as f64 * LUMA_R + rgb[[y, x, 1]] as f64 * LUMA_G + rgb[[y, x, 2]] as f64 * LUMA_B
    })
}

// Source index and interpolation weight for a destination index, with
// half-pixel centres and clamping at both edges.
fn source_coord(dst: usize, scale: f64, src_len: usize) -> (usize, usize, f64) {
    let f = (dst as f64 + 0.5) * scale - 0.5;
    let i = f.floor();
    if i < 0.0 {
        return (0, 0, 0.0);
    }
    let i = i as usize;
    if i + 1 >= src_len {
        return (src_len - 1, src_len - 1, 0.0);
    }
    (i, i + 1, f - i as f64)
}

/// Bilinear resize with the same sampling grid as OpenCV's `INTER_LINEAR`.
///
/// `image::imageops::resize` with `Triangle` widens its support when downscaling
/// and does not give the same values.
pub fn resize_bilinear(img: ArrayView2<f64>, height: usize, width: usize) -> Array2<f64> {
    let (src_h, src_w) = img.dim();
    assert!(src_h > 0 && src_w > 0, "cannot resize an empty image");

    let scale_y = src_h as f64 / height as f64;
    let scale_x = src_w as f64 / width as f64;
    let cols: Vec<_> = (0..width).map(|x| source_coord(x, scale_x, src_w)).collect();

    let mut out = Array2::zeros((height, width));
    for (y, mut row) in out.outer_iter_mut().enumerate() {
        let (y0, y1, wy) = source_coord(y, scale_y, src_h);
        for (v, &(x0, x1, wx)) in row.iter_mut().zip(cols.iter()) {
            let top = img[[y0, x0]] * (1.0 - wx) + img[[y0, x1]] * wx;
            let bottom = img[[y1, x0]] * (1.0 - wx) + img[[y1, x1]] * wx;
            *v = top * (1.0 - wy) + bottom * wy;
        }
    }
    out
}

/// Brings a luminance image to `OBS_SIZE x OBS_SIZE`.
pub fn resize(img: ArrayView2<f64>, mode: ResizeMode) -> Array2<f64> {
    let img = match mode {
        ResizeMode::Crop => {
            let img = resize_bilinear(img, CROP_HEIGHT, OBS_SIZE);
            img.slice(s![TOP_CROP..CROP_HEIGHT - BOTTOM_CROP, ..]).to_owned()
        }
        ResizeMode::Scale => resize_bilinear(img, OBS_SIZE, OBS_SIZE),
    };
    assert_eq!(img.dim(), (OBS_SIZE, OBS_SIZE));
    img
}

/// Computes an observation frame from two consecutive raw screens.
///
/// Both screens must be `(210, 160, 3)`. A 250-row screen is reported as
/// [`AleEnvError::IncompatibleRomError`]; any other geometry is a bug and panics.
pub fn observe(
    screen: ArrayView3<u8>,
    last_screen: ArrayView3<u8>,
    mode: ResizeMode,
) -> Result<Array2<f32>> {
    let (height, width, _) = screen.dim();
    if height == PAL_SCREEN_HEIGHT {
        return Err(AleEnvError::IncompatibleRomError { height, width }.into());
    }
    assert_eq!(screen.dim(), (SCREEN_HEIGHT, SCREEN_WIDTH, 3));
    assert_eq!(last_screen.dim(), screen.dim());

    let rgb = Zip::from(&screen)
        .and(&last_screen)
        .map_collect(|&a, &b| a.max(b));
    let img = resize(luminance(rgb.view()).view(), mode);

    // [0, 255] -> [-1, 1)
    Ok(img.mapv(|v| (v as f32 - 128.0) / 128.0))
}

/// Converts a normalized frame back into an 8-bit grayscale image.
pub fn to_gray_image(frame: ArrayView2<f32>) -> GrayImage {
    let (h, w) = frame.dim();
    GrayImage::from_fn(w as u32, h as u32, |x, y| {
        let v = frame[[y as usize, x as usize]] * 128.0 + 128.0;
        image::Luma([v.round().max(0.0).min(255.0) as u8])
    })
}
