/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Plain-data mirror of LVGL's `lv_image_dsc_t`.
//!
//! Field order follows the C struct so the emitter can print it top to bottom.

use alloc::string::String;

use crate::{
    error::{Error, Result},
    planes::PackedPlanes,
};

/// Value of `LV_IMAGE_HEADER_MAGIC`.
pub const IMAGE_HEADER_MAGIC: u8 = 0x19;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// 16-bit RGB565 plane followed by an 8-bit alpha plane.
    Rgb565A8 = 0x14,
}

impl ColorFormat {
    pub const fn c_name(self) -> &'static str {
        match self {
            ColorFormat::Rgb565A8 => "LV_COLOR_FORMAT_RGB565A8",
        }
    }
}

/// `lv_image_header_t`. The C side uses 16-bit bitfields for the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub magic: u8,
    pub cf: ColorFormat,
    pub flags: u16,
    pub w: u16,
    pub h: u16,
    pub stride: u16,
    pub reserved_2: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub header: ImageHeader,
    pub data_size: u32,
    /// Symbol of the pixel map the descriptor points at.
    pub data: String,
    /// External palette; never used by `RGB565A8` and always printed as `NULL`.
    pub reserved: Option<String>,
}

impl ImageDescriptor {
    pub fn new(data: String, planes: &PackedPlanes) -> Result<Self> {
        let (width, height) = (planes.width(), planes.height());
        let too_large = || Error::TooLarge { width, height };

        let header = ImageHeader {
            magic: IMAGE_HEADER_MAGIC,
            cf: ColorFormat::Rgb565A8,
            flags: 0,
            w: u16::try_from(width).map_err(|_| too_large())?,
            h: u16::try_from(height).map_err(|_| too_large())?,
            stride: u16::try_from(planes.stride()).map_err(|_| too_large())?,
            reserved_2: 0,
        };

        Ok(Self {
            header,
            data_size: u32::try_from(planes.len()).map_err(|_| too_large())?,
            data,
            reserved: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelGrid;

    fn planes(width: u32, height: u32) -> PackedPlanes {
        let grid = PixelGrid::new(width, height, vec![[10, 20, 30, 40]; (width * height) as usize]);
        PackedPlanes::from_grid(&grid.unwrap())
    }

    #[test]
    fn header_tracks_geometry() {
        let desc = ImageDescriptor::new("image_sunny_map".into(), &planes(64, 64)).unwrap();

        assert_eq!(desc.header.magic, IMAGE_HEADER_MAGIC);
        assert_eq!(desc.header.cf, ColorFormat::Rgb565A8);
        assert_eq!(desc.header.flags, 0);
        assert_eq!(desc.header.w, 64);
        assert_eq!(desc.header.h, 64);
        assert_eq!(desc.header.stride, 128);
        assert_eq!(desc.header.reserved_2, 0);
        assert_eq!(desc.data_size, 64 * 64 * 3);
        assert_eq!(desc.data, "image_sunny_map");
        assert_eq!(desc.reserved, None);
    }

    #[test]
    fn non_square_geometry() {
        let desc = ImageDescriptor::new("x_map".into(), &planes(5, 3)).unwrap();

        assert_eq!((desc.header.w, desc.header.h, desc.header.stride), (5, 3, 10));
        assert_eq!(desc.data_size, 45);
    }

    #[test]
    fn stride_must_fit_header() {
        let err = ImageDescriptor::new("wide_map".into(), &planes(40_000, 1)).unwrap_err();
        assert_eq!(
            err,
            Error::TooLarge {
                width: 40_000,
                height: 1
            }
        );
    }
}
