//! Raster and terminal rendering of finished symbols
//!
//! Maps each module to a square of configurable pixel size around a light
//! quiet border. Rendering consumes a finished grid and never feeds back
//! into encoding.

use image::GrayImage;
use rayon::prelude::*;

use crate::models::QrSymbol;

/// Quiet border width in modules used by the default entry points
const DEFAULT_MARGIN: u32 = 4;

const DARK_PIXEL: u8 = 0;
const LIGHT_PIXEL: u8 = 255;

/// Render a symbol to a grayscale image with the default quiet border
pub fn to_image(symbol: &QrSymbol, module_px: u32) -> GrayImage {
    to_image_with_margin(symbol, module_px, DEFAULT_MARGIN)
}

/// Render a symbol to a grayscale image.
///
/// Each module becomes a `module_px` x `module_px` square; `margin` light
/// modules surround the grid on every side. A zero `module_px` is bumped to
/// one pixel per module.
pub fn to_image_with_margin(symbol: &QrSymbol, module_px: u32, margin: u32) -> GrayImage {
    let module_px = module_px.max(1);
    let side = (symbol.size() as u32 + 2 * margin) * module_px;
    let mut image = GrayImage::from_pixel(side, side, image::Luma([LIGHT_PIXEL]));

    for row in 0..symbol.size() {
        for col in 0..symbol.size() {
            if !symbol.module(row, col) {
                continue;
            }
            let y0 = (row as u32 + margin) * module_px;
            let x0 = (col as u32 + margin) * module_px;
            for y in y0..y0 + module_px {
                for x in x0..x0 + module_px {
                    image.put_pixel(x, y, image::Luma([DARK_PIXEL]));
                }
            }
        }
    }

    image
}

/// Render a symbol to a grayscale image using parallel row rasterization.
///
/// Same output as `to_image_with_margin`; pixel rows are filled across the
/// rayon pool, which pays off at large module sizes.
pub fn to_image_parallel(symbol: &QrSymbol, module_px: u32, margin: u32) -> GrayImage {
    let module_px = module_px.max(1);
    let grid = symbol.size() as u32;
    let side = (grid + 2 * margin) * module_px;
    let mut pixels = vec![LIGHT_PIXEL; (side * side) as usize];

    pixels
        .par_chunks_mut(side as usize)
        .enumerate()
        .for_each(|(y, row_pixels)| {
            let module_row = y as u32 / module_px;
            if module_row < margin || module_row >= margin + grid {
                return;
            }
            let row = (module_row - margin) as usize;
            for (x, pixel) in row_pixels.iter_mut().enumerate() {
                let module_col = x as u32 / module_px;
                if module_col < margin || module_col >= margin + grid {
                    continue;
                }
                if symbol.module(row, (module_col - margin) as usize) {
                    *pixel = DARK_PIXEL;
                }
            }
        });

    GrayImage::from_raw(side, side, pixels).expect("buffer sized to dimensions")
}

/// Render a symbol as terminal-printable block art, one text row per module
/// row, two characters per module
pub fn to_ascii(symbol: &QrSymbol) -> String {
    let size = symbol.size();
    let mut out = String::with_capacity((size * 2 + 1) * size);
    for row in 0..size {
        for col in 0..size {
            out.push_str(if symbol.module(row, col) { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}
