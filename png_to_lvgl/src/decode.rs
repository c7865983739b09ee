/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use image::{Rgba32FImage, imageops::FilterType};
use lvgl_image::PixelGrid;

use crate::error::AssetError;

pub const DEFAULT_SIZE: u32 = 64;

/// Decodes an image of any supported format and scales it to `size`x`size` RGBA.
///
/// Resampling runs on premultiplied alpha so the color of fully transparent
/// pixels does not bleed into anti-aliased edges.
pub fn load_grid(bytes: &[u8], size: u32) -> Result<PixelGrid, AssetError> {
    let img = image::load_from_memory(bytes)?;
    tracing::debug!(width = img.width(), height = img.height(), "decoded");

    let mut src = img.to_rgba32f();
    premultiply(&mut src);

    let resized = image::imageops::resize(&src, size, size, FilterType::Lanczos3);
    let (width, height) = resized.dimensions();

    let mut rgba = Vec::with_capacity(resized.len());
    for px in resized.pixels() {
        rgba.extend_from_slice(&unpremultiply(px.0));
    }

    Ok(PixelGrid::from_rgba_bytes(width, height, &rgba)?)
}

fn premultiply(img: &mut Rgba32FImage) {
    for px in img.pixels_mut() {
        let a = px.0[3];
        for c in &mut px.0[..3] {
            *c *= a;
        }
    }
}

fn unpremultiply([r, g, b, a]: [f32; 4]) -> [u8; 4] {
    let a = a.clamp(0.0, 1.0);
    if a <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |v: f32| ((v / a).clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(r), channel(g), channel(b), (a * 255.0).round() as u8]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png).unwrap();
        buf
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        encode(&ImageBuffer::from_pixel(width, height, Rgba([200u8, 100, 50, 255])))
    }

    #[test]
    fn downsamples_to_target() {
        let grid = load_grid(&png(100, 100), 64).unwrap();
        assert_eq!((grid.width(), grid.height()), (64, 64));
        assert_eq!(grid.pixel_count(), 64 * 64);
    }

    #[test]
    fn stretches_non_square_sources() {
        let grid = load_grid(&png(30, 10), 16).unwrap();
        assert_eq!((grid.width(), grid.height()), (16, 16));
    }

    #[test]
    fn rejects_garbage() {
        let err = load_grid(b"definitely not a png", 64).unwrap_err();
        assert!(matches!(err, AssetError::Decode(_)));
    }

    #[test]
    fn transparent_pixels_do_not_darken_edges() {
        // opaque white on the left, transparent black on the right
        let img = ImageBuffer::from_fn(8, 8, |x, _| {
            if x < 4 {
                Rgba([255u8, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        let grid = load_grid(&encode(&img), 3).unwrap();
        let row = grid.rows().next().unwrap();

        let edge = row[1];
        assert!(edge[3] > 0 && edge[3] < 255, "edge alpha: {edge:?}");
        assert_eq!(&edge[..3], &[255, 255, 255], "edge darkened: {edge:?}");

        for px in grid.pixels().iter().filter(|px| px[3] > 0) {
            assert_eq!(&px[..3], &[255, 255, 255]);
        }
    }

    #[test]
    fn unpremultiply_restores_color() {
        assert_eq!(unpremultiply([0.25, 0.5, 0.0, 0.5]), [128, 255, 0, 128]);
        assert_eq!(unpremultiply([0.3, 0.3, 0.3, 0.0]), [0, 0, 0, 0]);
        assert_eq!(unpremultiply([1.2, 0.0, 0.0, 1.1]), [255, 0, 0, 255]);
    }
}
