/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use alloc::vec::Vec;

use crate::error::{Error, Result};

/// One pixel as `[r, g, b, a]`.
pub type Rgba = [u8; 4];

/// Row-major RGBA pixels with known, non-zero dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::TooLarge { width, height })?;

        if pixels.len() != expected {
            return Err(Error::PixelCount {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a grid from tightly packed RGBA8 bytes, as decoders hand them out.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let pixels: &[Rgba] = bytemuck::try_cast_slice(bytes)
            .map_err(|_| Error::RaggedBuffer { len: bytes.len() })?;

        Self::new(width, height, pixels.to_vec())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn rows(&self) -> core::slice::ChunksExact<'_, Rgba> {
        self.pixels.chunks_exact(self.width as usize)
    }
}
