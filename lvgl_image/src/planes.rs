/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use alloc::vec::Vec;

use crate::{color::Rgb565, grid::PixelGrid};

/// Bytes per pixel in the color plane.
pub const COLOR_BYTES: usize = 2;
/// Bytes per pixel in the alpha plane.
pub const ALPHA_BYTES: usize = 1;

/// `RGB565A8` pixel data: every pixel's little-endian RGB565 word, row-major,
/// followed by every pixel's alpha byte in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPlanes {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PackedPlanes {
    pub fn from_grid(grid: &PixelGrid) -> Self {
        let count = grid.pixel_count();

        let mut color = Vec::with_capacity(count * COLOR_BYTES);
        for &[r, g, b, _] in grid.pixels() {
            color.extend_from_slice(&Rgb565::from_rgb(r, g, b).to_le_bytes());
        }

        let alpha: Vec<u8> = grid.pixels().iter().map(|px| px[3]).collect();

        let mut data = color;
        data.extend_from_slice(&alpha);

        Self {
            width: grid.width(),
            height: grid.height(),
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row of the color plane.
    pub fn stride(&self) -> u32 {
        self.width * COLOR_BYTES as u32
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn color_len(&self) -> usize {
        self.width as usize * self.height as usize * COLOR_BYTES
    }

    pub fn color_plane(&self) -> &[u8] {
        &self.data[..self.color_len()]
    }

    pub fn alpha_plane(&self) -> &[u8] {
        &self.data[self.color_len()..]
    }

    pub fn color_rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.color_plane().chunks_exact(self.stride() as usize)
    }

    pub fn alpha_rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.alpha_plane().chunks_exact(self.width as usize * ALPHA_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::quantize, grid::Rgba};
    use proptest::prelude::*;

    fn grid(width: u32, height: u32, pixels: &[Rgba]) -> PixelGrid {
        PixelGrid::new(width, height, pixels.to_vec()).unwrap()
    }

    #[test]
    fn two_pixel_example() {
        let planes = PackedPlanes::from_grid(&grid(2, 1, &[[255, 0, 0, 255], [0, 255, 0, 128]]));

        assert_eq!(planes.as_bytes(), &[0x00, 0xF8, 0xE0, 0x07, 0xFF, 0x80]);
        assert_eq!(planes.stride(), 4);
        assert_eq!(planes.color_plane(), &[0x00, 0xF8, 0xE0, 0x07]);
        assert_eq!(planes.alpha_plane(), &[0xFF, 0x80]);
        assert!(!planes.is_empty());
    }

    #[test]
    fn planes_are_not_interleaved() {
        let pixels = [[255, 255, 255, 1], [255, 255, 255, 2], [255, 255, 255, 3]];
        let planes = PackedPlanes::from_grid(&grid(3, 1, &pixels));

        assert_eq!(planes.color_plane(), &[0xFF; 6]);
        assert_eq!(planes.alpha_plane(), &[1, 2, 3]);
    }

    #[test]
    fn rows_split_each_plane() {
        let pixels: Vec<Rgba> = (0..6u8).map(|i| [0, 0, i * 8, i]).collect();
        let planes = PackedPlanes::from_grid(&grid(2, 3, &pixels));

        let color: Vec<_> = planes.color_rows().collect();
        let alpha: Vec<_> = planes.alpha_rows().collect();

        assert_eq!(color.len(), 3);
        assert_eq!(alpha.len(), 3);
        assert_eq!(color[1], &[2, 0, 3, 0]);
        assert_eq!(alpha[2], &[4, 5]);
    }

    proptest! {
        #[test]
        fn layout_matches_source(
            (width, height, pixels) in (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
                (Just(w), Just(h), prop::collection::vec(any::<Rgba>(), (w * h) as usize))
            })
        ) {
            let planes = PackedPlanes::from_grid(&grid(width, height, &pixels));
            let count = pixels.len();

            prop_assert_eq!(planes.len(), count * 3);
            prop_assert_eq!(planes.stride(), width * 2);

            for (i, &[r, g, b, a]) in pixels.iter().enumerate() {
                let word = quantize(r, g, b).to_le_bytes();
                prop_assert_eq!(&planes.color_plane()[i * 2..i * 2 + 2], &word[..]);
                prop_assert_eq!(planes.alpha_plane()[i], a);
            }
        }
    }
}
