//! Per-pixel canvas generation.
//!
//! The generators know nothing about flags: they call the given pixel
//! function once per coordinate and truncate its color into the canvas.

use crate::{Color, GradientError, GradientResult, color::to_int};
use image::{RgbImage, imageops};
use rayon::prelude::*;
use std::fmt::Display;

const CHANNELS: usize = 3;

/// Fills a `width` x `height` canvas with `pixel_fn(x, y)`, one pixel at a time.
pub fn generate<F>(width: u32, height: u32, pixel_fn: F) -> RgbImage
where
    F: Fn(u32, u32) -> Color,
{
    let mut canvas = RgbImage::new(width, height);

    for x in 0..width {
        for y in 0..height {
            canvas.put_pixel(x, y, to_int(pixel_fn(x, y)));
        }
    }

    canvas
}

/// Like [`generate`] for pixel functions that can fail.
///
/// The first failing pixel aborts the whole canvas.
pub fn try_generate<F, E>(width: u32, height: u32, pixel_fn: F) -> GradientResult<RgbImage>
where
    F: Fn(u32, u32) -> Result<Color, E>,
    E: Display,
{
    let mut canvas = RgbImage::new(width, height);

    for x in 0..width {
        for y in 0..height {
            let color = pixel_fn(x, y).map_err(|e| GradientError::Pixel {
                x,
                y,
                reason: e.to_string(),
            })?;

            canvas.put_pixel(x, y, to_int(color));
        }
    }

    Ok(canvas)
}

/// Like [`generate`], with rows spread over the rayon thread pool.
pub fn generate_par<F>(width: u32, height: u32, pixel_fn: F) -> RgbImage
where
    F: Fn(u32, u32) -> Color + Sync,
{
    let mut canvas = RgbImage::new(width, height);
    if width == 0 || height == 0 {
        return canvas;
    }

    log::debug!(
        "generating {width}x{height} on {} threads",
        rayon::current_num_threads()
    );

    let row_stride = width as usize * CHANNELS;
    canvas
        .par_chunks_mut(row_stride)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                let color = to_int(pixel_fn(x as u32, y as u32));
                pixel.copy_from_slice(&color.0);
            }
        });

    canvas
}

/// Stacks canvases of equal width on top of each other, first on top.
pub fn stack(images: &[RgbImage]) -> GradientResult<RgbImage> {
    let Some(first) = images.first() else {
        return Ok(RgbImage::new(0, 0));
    };

    let width = first.width();
    if let Some(other) = images.iter().find(|img| img.width() != width) {
        return Err(GradientError::InvalidParameter(format!(
            "cannot stack a {}px wide image under a {width}px wide one",
            other.width()
        )));
    }

    let height = images.iter().map(|img| img.height()).sum();
    let mut sheet = RgbImage::new(width, height);

    let mut offset = 0;
    for img in images {
        imageops::replace(&mut sheet, img, 0, offset);
        offset += i64::from(img.height());
    }

    Ok(sheet)
}
