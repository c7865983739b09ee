/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Pixel codec for LVGL `RGB565A8` images.
//!
//! Turns a grid of RGBA pixels into the planar byte layout LVGL expects
//! (little-endian RGB565 plane followed by an 8-bit alpha plane) and renders
//! it as a C source file holding the pixel map and its `lv_image_dsc_t`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod color;
pub mod descriptor;
pub mod emit;
pub mod error;
pub mod grid;
pub mod planes;

pub use color::{Rgb565, quantize};
pub use descriptor::{ColorFormat, ImageDescriptor, ImageHeader};
pub use emit::{ImageArtifact, is_c_identifier};
pub use error::{Error, Result};
pub use grid::{PixelGrid, Rgba};
pub use planes::PackedPlanes;
