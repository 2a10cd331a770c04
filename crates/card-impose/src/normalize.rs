//! Source image normalization
//!
//! Decoded card art arrives in whatever color mode the source file used;
//! print output wants plain RGB. This module flattens transparency onto a
//! pure white background, converts CMYK scans to RGB, promotes grayscale,
//! and resizes card art to its target pixel dimensions.

use image::imageops::FilterType;
use image::{ColorType, RgbImage};
use std::path::Path;

use crate::types::*;

/// Color mode tag of a decoded raster.
///
/// Indexed sources with transparency are expanded to `Rgba` by the default
/// decoder; the tag exists so external decoders (e.g. layered-format
/// pipelines) can hand over whatever their format stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
    Cmyk,
}

impl ColorMode {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ColorMode::Gray => 1,
            ColorMode::GrayAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba | ColorMode::Cmyk => 4,
        }
    }
}

/// A decoded, not yet normalized raster image
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
    pub data: Vec<u8>,
}

/// Decode a source file into a tagged raster.
///
/// Any failure here is fatal for the sheet containing the card; a sheet
/// with a missing card is unusable stock.
pub fn decode_image(path: impl AsRef<Path>) -> Result<RasterImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| ImposeError::Decode {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;

    let (width, height) = (img.width(), img.height());
    let raster = match img.color() {
        ColorType::L8 | ColorType::L16 => RasterImage {
            width,
            height,
            mode: ColorMode::Gray,
            data: img.to_luma8().into_raw(),
        },
        ColorType::La8 | ColorType::La16 => RasterImage {
            width,
            height,
            mode: ColorMode::GrayAlpha,
            data: img.to_luma_alpha8().into_raw(),
        },
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => RasterImage {
            width,
            height,
            mode: ColorMode::Rgb,
            data: img.to_rgb8().into_raw(),
        },
        // Anything carrying alpha, including expanded indexed palettes
        _ => RasterImage {
            width,
            height,
            mode: ColorMode::Rgba,
            data: img.to_rgba8().into_raw(),
        },
    };

    Ok(raster)
}

/// Normalize a raster to print-safe RGB.
///
/// Transparency is composited onto pure white
/// (`dest = src*alpha + white*(1-alpha)`), CMYK converts channel-wise
/// (`ch = (255-c)*(255-k)/255`), grayscale is replicated across channels.
pub fn normalize(raster: &RasterImage) -> Result<RgbImage> {
    let pixel_count = raster.width as usize * raster.height as usize;
    let expected = pixel_count * raster.mode.bytes_per_pixel();
    if raster.data.len() != expected {
        return Err(ImposeError::Raster(format!(
            "{}x{} {:?} raster should hold {} bytes, got {}",
            raster.width,
            raster.height,
            raster.mode,
            expected,
            raster.data.len()
        )));
    }

    let data = match raster.mode {
        ColorMode::Rgb => raster.data.clone(),
        ColorMode::Gray => {
            let mut out = Vec::with_capacity(pixel_count * 3);
            for &v in &raster.data {
                out.extend_from_slice(&[v, v, v]);
            }
            out
        }
        ColorMode::GrayAlpha => {
            let mut out = Vec::with_capacity(pixel_count * 3);
            for px in raster.data.chunks_exact(2) {
                let v = flatten_onto_white(px[0], px[1]);
                out.extend_from_slice(&[v, v, v]);
            }
            out
        }
        ColorMode::Rgba => {
            let mut out = Vec::with_capacity(pixel_count * 3);
            for px in raster.data.chunks_exact(4) {
                out.push(flatten_onto_white(px[0], px[3]));
                out.push(flatten_onto_white(px[1], px[3]));
                out.push(flatten_onto_white(px[2], px[3]));
            }
            out
        }
        ColorMode::Cmyk => {
            let mut out = Vec::with_capacity(pixel_count * 3);
            for px in raster.data.chunks_exact(4) {
                let k = px[3] as u32;
                for &c in &px[..3] {
                    out.push(((255 - c as u32) * (255 - k) / 255) as u8);
                }
            }
            out
        }
    };

    RgbImage::from_raw(raster.width, raster.height, data)
        .ok_or_else(|| ImposeError::Raster("normalized buffer has wrong length".to_string()))
}

/// Resize to exact target dimensions with a Lanczos filter.
///
/// Aspect ratio is NOT preserved: the image is stretched to the target
/// size, so sources must already be cropped to the cell's aspect ratio.
pub fn resize_to(img: &RgbImage, width_px: u32, height_px: u32) -> RgbImage {
    if img.dimensions() == (width_px, height_px) {
        img.clone()
    } else {
        image::imageops::resize(img, width_px, height_px, FilterType::Lanczos3)
    }
}

fn flatten_onto_white(value: u8, alpha: u8) -> u8 {
    let a = alpha as f32 / 255.0;
    (value as f32 * a + 255.0 * (1.0 - a)).round() as u8
}

/// Result of checking source art against its expected physical size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionCheck {
    /// Measured width in millimeters at the given px/mm reference
    pub width_mm: f32,
    /// Measured height in millimeters at the given px/mm reference
    pub height_mm: f32,
    /// Whether the art deviates beyond tolerance and should be resized
    pub needs_resize: bool,
}

/// Check source art dimensions against the expected bleed-inclusive size.
///
/// `px_per_mm` is the reference used to interpret pixel sizes as physical
/// sizes; `constants::REFERENCE_PX_PER_MM` reproduces the historical fixed
/// 300 DPI behavior, `SheetSpec::px_per_mm()` ties it to the configured
/// resolution instead.
pub fn validate_dimensions(
    width_px: u32,
    height_px: u32,
    expected_width_mm: f32,
    expected_height_mm: f32,
    tolerance_percent: f32,
    px_per_mm: f32,
) -> DimensionCheck {
    let width_mm = width_px as f32 / px_per_mm;
    let height_mm = height_px as f32 / px_per_mm;

    let tolerance_mm = expected_width_mm.min(expected_height_mm) * (tolerance_percent / 100.0);

    let needs_resize = (width_mm - expected_width_mm).abs() > tolerance_mm
        || (height_mm - expected_height_mm).abs() > tolerance_mm;

    DimensionCheck {
        width_mm,
        height_mm,
        needs_resize,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERENCE_PX_PER_MM;

    #[test]
    fn test_rgba_flattens_onto_white() {
        let raster = RasterImage {
            width: 2,
            height: 1,
            mode: ColorMode::Rgba,
            // Opaque red, half-transparent black
            data: vec![255, 0, 0, 255, 0, 0, 0, 128],
        };

        let rgb = normalize(&raster).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 0, 0]);

        // 0*a + 255*(1-a) with a = 128/255 ≈ 0.502
        let flattened = rgb.get_pixel(1, 0).0;
        assert_eq!(flattened, [127, 127, 127]);
    }

    #[test]
    fn test_fully_transparent_becomes_white() {
        let raster = RasterImage {
            width: 1,
            height: 1,
            mode: ColorMode::Rgba,
            data: vec![12, 200, 34, 0],
        };

        let rgb = normalize(&raster).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_cmyk_conversion() {
        let raster = RasterImage {
            width: 3,
            height: 1,
            mode: ColorMode::Cmyk,
            // Pure cyan, pure black, plain paper
            data: vec![255, 0, 0, 0, 0, 0, 0, 255, 0, 0, 0, 0],
        };

        let rgb = normalize(&raster).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 255, 255]);
        assert_eq!(rgb.get_pixel(1, 0).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(2, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_gray_promoted_to_rgb() {
        let raster = RasterImage {
            width: 2,
            height: 1,
            mode: ColorMode::Gray,
            data: vec![0, 200],
        };

        let rgb = normalize(&raster).unwrap();
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(1, 0).0, [200, 200, 200]);
    }

    #[test]
    fn test_bad_buffer_length_is_rejected() {
        let raster = RasterImage {
            width: 2,
            height: 2,
            mode: ColorMode::Rgb,
            data: vec![0; 5],
        };

        assert!(matches!(normalize(&raster), Err(ImposeError::Raster(_))));
    }

    #[test]
    fn test_resize_stretches_to_exact_size() {
        let img = RgbImage::from_pixel(10, 20, image::Rgb([90, 90, 90]));
        let resized = resize_to(&img, 30, 30);
        assert_eq!(resized.dimensions(), (30, 30));
    }

    #[test]
    fn test_validate_dimensions_reference_constant() {
        // 68.5mm at 300 DPI is ~809 px
        let check = validate_dimensions(809, 1098, 68.5, 93.0, 5.0, REFERENCE_PX_PER_MM);
        assert!(!check.needs_resize);
        assert!((check.width_mm - 68.5).abs() < 0.1);

        // Half-size art misses the tolerance
        let check = validate_dimensions(405, 549, 68.5, 93.0, 5.0, REFERENCE_PX_PER_MM);
        assert!(check.needs_resize);
    }

    #[test]
    fn test_validate_dimensions_configured_dpi() {
        // The same pixels read differently under a 150 DPI reference: a
        // 405px-wide source now measures ~68.6mm and passes
        let px_per_mm = 150.0 / 25.4;
        let check = validate_dimensions(405, 549, 68.5, 93.0, 5.0, px_per_mm);
        assert!(!check.needs_resize);
    }
}
